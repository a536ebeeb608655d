// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combine-latest - emits the latest value of every source whenever any of them emits.
//!
//! Nothing is emitted until every source has produced at least one value. From then on, each
//! value from any source produces one emission holding the latest value of every source, in
//! source order.
//!
//! # Termination
//!
//! - **Completion**: the result completes only once *every* source has completed. A source
//!   that completes early keeps its last value frozen in every later emission while the
//!   others keep driving. A source that completes without ever emitting means no emission
//!   will ever happen, but the result still waits for the other sources to complete.
//! - **Failure**: the first failure from any source fails the result immediately and
//!   releases every source. Later failures are never observed.
//! - An empty list of sources completes immediately.
//!
//! # Examples
//!
//! ```rust
//! use cascade_stream::combine_latest;
//! use cascade_test_utils::{record, test_subject};
//!
//! let temperature = test_subject::<i32>();
//! let humidity = test_subject::<i32>();
//! let combined = combine_latest(vec![temperature.clone(), humidity.clone()]);
//! let (recorder, _subscription) = record(&combined);
//!
//! temperature.next(20).unwrap();
//! humidity.next(60).unwrap();
//! temperature.next(21).unwrap();
//!
//! assert_eq!(recorder.values(), vec![vec![20, 60], vec![21, 60]]);
//! ```
//!
//! The pairwise form works across value types:
//!
//! ```rust
//! use cascade_stream::CombineLatestExt;
//! use cascade_test_utils::{record, test_subject};
//!
//! let names = test_subject::<&'static str>();
//! let ages = test_subject::<u32>();
//! let (recorder, _subscription) = record(&names.clone().combine_latest_with(ages.clone()));
//!
//! names.next("Alice").unwrap();
//! ages.next(25).unwrap();
//!
//! assert_eq!(recorder.values(), vec![("Alice", 25)]);
//! ```

use crate::filter_map::FilterMapExt;
use crate::logging::debug;
use crate::map::MapExt;
use cascade_core::cascade_mutex::Mutex;
use cascade_core::{
    CompositeDisposable, Disposable, Observable, Observer, Signal, StreamEvent, Subscription,
};
use std::sync::Arc;

struct CombineState<T> {
    latest: Vec<Option<T>>,
    filled: usize,
    completed: Vec<bool>,
    remaining: usize,
    terminated: bool,
}

impl<T: Clone> CombineState<T> {
    fn new(sources: usize) -> Self {
        Self {
            latest: (0..sources).map(|_| None).collect(),
            filled: 0,
            completed: vec![false; sources],
            remaining: sources,
            terminated: false,
        }
    }

    /// Stores `value` for `index`, returning the snapshot to emit once every slot is filled.
    fn on_next(&mut self, index: usize, value: T) -> Option<Vec<T>> {
        if self.terminated {
            return None;
        }
        if self.latest[index].replace(value).is_none() {
            self.filled += 1;
        }
        (self.filled == self.latest.len()).then(|| self.latest.iter().flatten().cloned().collect())
    }

    /// Marks `index` completed, returning `true` when this was the last live source.
    fn on_completed(&mut self, index: usize) -> bool {
        if self.terminated || self.completed[index] {
            return false;
        }
        self.completed[index] = true;
        self.remaining -= 1;
        if self.remaining == 0 {
            self.terminated = true;
        }
        self.terminated
    }

    /// Returns `true` if this failure is the first terminal event of the result.
    fn on_failed(&mut self) -> bool {
        !core::mem::replace(&mut self.terminated, true)
    }
}

/// Combines the latest values of `sources`, emitting a `Vec` in source order.
///
/// See the [module-level documentation](crate::combine_latest) for the termination rules.
pub fn combine_latest<O, T, E>(sources: impl IntoIterator<Item = O>) -> Signal<Vec<T>, E>
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Clone + Send + 'static,
    E: Send + 'static,
{
    let sources: Arc<Vec<O>> = Arc::new(sources.into_iter().collect());
    Signal::new(move |observer: Observer<Vec<T>, E>| {
        if sources.is_empty() {
            observer.completed();
            return Subscription::disposed();
        }

        let state = Arc::new(Mutex::new(CombineState::new(sources.len())));
        let subscriptions = Arc::new(CompositeDisposable::new());

        for (index, source) in sources.iter().enumerate() {
            if subscriptions.is_disposed() {
                break;
            }

            let state = Arc::clone(&state);
            let release = Arc::clone(&subscriptions);
            let downstream = observer.clone();
            subscriptions.add(source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    let snapshot = state.lock().on_next(index, value);
                    if let Some(values) = snapshot {
                        downstream.next(values);
                    }
                }
                StreamEvent::Completed => {
                    let finished = state.lock().on_completed(index);
                    if finished {
                        release.dispose();
                        downstream.completed();
                    }
                }
                StreamEvent::Failed(error) => {
                    let first = state.lock().on_failed();
                    if first {
                        debug!("combine_latest: source {} failed, releasing siblings", index);
                        release.dispose();
                        downstream.failed(error);
                    }
                }
            })));
        }

        Subscription::from_shared(subscriptions)
    })
}

enum Side<A, B> {
    Left(A),
    Right(B),
}

impl<A: Clone, B: Clone> Clone for Side<A, B> {
    fn clone(&self) -> Self {
        match self {
            Side::Left(a) => Side::Left(a.clone()),
            Side::Right(b) => Side::Right(b.clone()),
        }
    }
}

/// Extension trait providing the pairwise `combine_latest_with` operator.
pub trait CombineLatestExt<A, E>: Observable<Item = A, Error = E> + Sized {
    /// Emits `(a, b)` with the latest value of each side once both have emitted.
    ///
    /// Same termination rules as [`combine_latest`].
    fn combine_latest_with<O2, B>(self, other: O2) -> Signal<(A, B), E>
    where
        O2: Observable<Item = B, Error = E> + 'static,
        B: Clone + Send + 'static;
}

impl<O, A, E> CombineLatestExt<A, E> for O
where
    O: Observable<Item = A, Error = E> + 'static,
    A: Clone + Send + 'static,
    E: Send + 'static,
{
    fn combine_latest_with<O2, B>(self, other: O2) -> Signal<(A, B), E>
    where
        O2: Observable<Item = B, Error = E> + 'static,
        B: Clone + Send + 'static,
    {
        let left: Signal<Side<A, B>, E> = self.map(Side::Left);
        let right: Signal<Side<A, B>, E> = other.map(Side::Right);

        combine_latest(vec![left, right]).filter_map(|values| {
            let mut values = values.into_iter();
            match (values.next(), values.next()) {
                (Some(Side::Left(a)), Some(Side::Right(b))) => Some((a, b)),
                _ => None,
            }
        })
    }
}

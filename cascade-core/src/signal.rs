// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The type-erased observable every operator returns.
//!
//! A [`Signal`] is cold: each call to `observe` runs its producer again with fresh state.
//! Disposing the returned subscription disposes whatever the producer returned *and* stops the
//! observer, so nothing reaches it afterwards, not even from a timer that is already firing.
//!
//! # Example
//!
//! ```
//! use cascade_core::{CascadeError, ObservableExt, Signal};
//! use std::sync::{Arc, Mutex};
//!
//! let numbers = Signal::<i32, CascadeError>::sequence([1, 2, 3]);
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = seen.clone();
//! numbers.observe_next(move |value| sink.lock().unwrap().push(value));
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
//! ```

use crate::{Observable, Observer, Subscription, Task};
use core::fmt;
use std::sync::Arc;

type Producer<T, E> = dyn Fn(Observer<T, E>) -> Subscription + Send + Sync;

/// A cloneable, type-erased stream of `T` values failing with `E`.
pub struct Signal<T, E> {
    producer: Arc<Producer<T, E>>,
}

impl<T, E> Signal<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Creates a signal from a producer run once per subscription.
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn(Observer<T, E>) -> Subscription + Send + Sync + 'static,
    {
        Self {
            producer: Arc::new(producer),
        }
    }

    /// A signal that never emits and never terminates.
    pub fn never() -> Self {
        Self::new(|_| Subscription::empty())
    }

    /// A signal that completes immediately.
    pub fn completed() -> Self {
        Self::new(|observer| {
            observer.completed();
            Subscription::empty()
        })
    }

    /// A signal that fails immediately.
    pub fn failed(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::new(move |observer| {
            observer.failed(error.clone());
            Subscription::empty()
        })
    }

    /// A signal that emits one value and completes.
    pub fn just(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::sequence([value])
    }

    /// A signal that synchronously emits every value and then completes.
    pub fn sequence<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone + Sync,
    {
        let values: Arc<[T]> = values.into_iter().collect();
        Self::new(move |observer| {
            for value in values.iter() {
                if observer.is_stopped() {
                    break;
                }
                observer.next(value.clone());
            }
            observer.completed();
            Subscription::empty()
        })
    }

    /// Reads this signal as a task: `Completed` becomes `Success`, `Failed` becomes `Failure`.
    pub fn into_task(self) -> Task<T, E> {
        Task::from_signal(self)
    }
}

impl<T, E> Observable for Signal<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    type Item = T;
    type Error = E;

    fn observe(&self, observer: Observer<T, E>) -> Subscription {
        let downstream = observer.clone();
        let upstream = (self.producer)(observer);
        Subscription::from_fn(move || {
            downstream.stop();
            upstream.dispose();
        })
    }
}

impl<T, E> Clone for Signal<T, E> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<T, E> fmt::Debug for Signal<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal").finish_non_exhaustive()
    }
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::debug;
use cascade_core::cascade_mutex::Mutex;
use cascade_core::{
    CompositeDisposable, Disposable, Observable, Observer, SerialDisposable, Signal, StreamEvent,
    Subscription,
};
use cascade_runtime::Scheduler;
use core::time::Duration;
use std::sync::Arc;

#[derive(Default)]
struct TimeoutState {
    generation: u64,
    finished: bool,
}

/// Extension trait providing the `timeout` operator.
pub trait TimeoutExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Fails with `error` if no event arrives within `interval`.
    ///
    /// The window starts at subscription and restarts after every value. On timeout the
    /// source subscription is released. A source terminal event cancels the timer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cascade_core::CascadeError;
    /// use cascade_stream_time::TimeoutExt;
    /// use cascade_test_utils::{record, test_subject, TestScheduler};
    /// use std::time::Duration;
    ///
    /// let scheduler = TestScheduler::new();
    /// let source = test_subject::<i32>();
    /// let guarded = source.clone().timeout(
    ///     Duration::from_millis(100),
    ///     scheduler.clone(),
    ///     CascadeError::timeout_error("no reading within 100ms"),
    /// );
    /// let (recorder, _subscription) = record(&guarded);
    ///
    /// scheduler.advance(Duration::from_millis(100));
    ///
    /// assert!(recorder.failure().is_some_and(|error| error.is_timeout()));
    /// assert_eq!(source.subscriber_count(), 0);
    /// ```
    fn timeout<S>(self, interval: Duration, scheduler: S, error: E) -> Signal<T, E>
    where
        S: Scheduler,
        E: Clone + Sync;
}

impl<O, T, E> TimeoutExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn timeout<S>(self, interval: Duration, scheduler: S, error: E) -> Signal<T, E>
    where
        S: Scheduler,
        E: Clone + Sync,
    {
        let source = Arc::new(self);
        Signal::new(move |observer: Observer<T, E>| {
            let state = Arc::new(Mutex::new(TimeoutState::default()));
            let timer = Arc::new(SerialDisposable::new());
            let upstream = Arc::new(SerialDisposable::new());

            let arm = {
                let scheduler = scheduler.clone();
                let error = error.clone();
                let state = Arc::clone(&state);
                let timer = Arc::clone(&timer);
                let upstream = Arc::clone(&upstream);
                let observer = observer.clone();
                move |generation: u64| {
                    let state = Arc::clone(&state);
                    let upstream = Arc::clone(&upstream);
                    let observer = observer.clone();
                    let error = error.clone();
                    timer.set(scheduler.schedule_after(
                        interval,
                        Box::new(move || {
                            let expired = {
                                let mut state = state.lock();
                                let expired = !state.finished && state.generation == generation;
                                state.finished |= expired;
                                expired
                            };
                            if expired {
                                debug!("timeout: no event within the allowed interval");
                                upstream.dispose();
                                observer.failed(error);
                            }
                        }),
                    ));
                }
            };
            arm(0);

            let on_timer = Arc::clone(&timer);
            let subscription = source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    let generation = {
                        let mut state = state.lock();
                        if state.finished {
                            return;
                        }
                        state.generation += 1;
                        state.generation
                    };
                    observer.next(value);
                    arm(generation);
                }
                terminal => {
                    let first = !core::mem::replace(&mut state.lock().finished, true);
                    if first {
                        on_timer.dispose();
                        observer.on(terminal);
                    }
                }
            }));
            upstream.set(subscription);

            let subscriptions = CompositeDisposable::new();
            subscriptions.add(Subscription::from_shared(upstream));
            subscriptions.add(Subscription::from_shared(timer));
            Subscription::new(subscriptions)
        })
    }
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::trace;
use cascade_core::cascade_mutex::Mutex;
use cascade_core::{
    CompositeDisposable, Disposable, Observable, Observer, SerialDisposable, Signal, StreamEvent,
    Subscription,
};
use cascade_runtime::Scheduler;
use core::time::Duration;
use std::sync::Arc;

struct DebounceState<T> {
    pending: Option<T>,
    generation: u64,
}

/// Extension trait providing the `debounce` operator.
pub trait DebounceExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Emits a value only after `interval` passed without another value arriving.
    ///
    /// This implements **trailing debounce** semantics:
    /// - When a value arrives, the pending timer is cancelled and a new one is started
    /// - If no new value arrives before the timer fires, the remembered value is emitted
    /// - When the source completes, a pending value is flushed immediately, then `Completed`
    /// - When the source fails, the pending value is discarded and the failure forwarded
    ///
    /// # Arguments
    ///
    /// * `interval` - The quiet period required before emitting
    /// * `scheduler` - The scheduler the timers run on
    ///
    /// # Example
    ///
    /// ```rust
    /// use cascade_stream_time::DebounceExt;
    /// use cascade_test_utils::{record, test_subject, TestScheduler};
    /// use std::time::Duration;
    ///
    /// let scheduler = TestScheduler::new();
    /// let source = test_subject::<i32>();
    /// let (recorder, _subscription) =
    ///     record(&source.clone().debounce(Duration::from_millis(100), scheduler.clone()));
    ///
    /// source.next(1).unwrap();
    /// scheduler.advance(Duration::from_millis(50));
    /// source.next(2).unwrap();
    /// scheduler.advance(Duration::from_millis(99));
    /// assert!(recorder.values().is_empty());
    ///
    /// scheduler.advance(Duration::from_millis(1));
    /// assert_eq!(recorder.values(), vec![2]);
    /// ```
    fn debounce<S>(self, interval: Duration, scheduler: S) -> Signal<T, E>
    where
        S: Scheduler;
}

impl<O, T, E> DebounceExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn debounce<S>(self, interval: Duration, scheduler: S) -> Signal<T, E>
    where
        S: Scheduler,
    {
        let source = Arc::new(self);
        Signal::new(move |observer: Observer<T, E>| {
            let state = Arc::new(Mutex::new(DebounceState {
                pending: None,
                generation: 0,
            }));
            let timer = Arc::new(SerialDisposable::new());
            let subscriptions = Arc::new(CompositeDisposable::new());
            subscriptions.add(Subscription::from_shared(Arc::clone(&timer)));

            let scheduler = scheduler.clone();
            let release = Arc::clone(&subscriptions);
            subscriptions.add(source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    let generation = {
                        let mut state = state.lock();
                        state.pending = Some(value);
                        state.generation += 1;
                        state.generation
                    };

                    let state = Arc::clone(&state);
                    let downstream = observer.clone();
                    timer.set(scheduler.schedule_after(
                        interval,
                        Box::new(move || {
                            let due = {
                                let mut state = state.lock();
                                if state.generation == generation {
                                    state.pending.take()
                                } else {
                                    None
                                }
                            };
                            if let Some(value) = due {
                                downstream.next(value);
                            }
                        }),
                    ));
                }
                StreamEvent::Completed => {
                    let flushed = state.lock().pending.take();
                    release.dispose();
                    if let Some(value) = flushed {
                        trace!("debounce: flushing pending value on completion");
                        observer.next(value);
                    }
                    observer.completed();
                }
                StreamEvent::Failed(error) => {
                    state.lock().pending.take();
                    release.dispose();
                    observer.failed(error);
                }
            })));

            Subscription::from_shared(subscriptions)
        })
    }
}

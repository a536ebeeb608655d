// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::cascade_mutex::Mutex;
use cascade_core::{
    CompositeDisposable, Disposable, Observable, Observer, Signal, StreamEvent, Subscription,
};
use cascade_runtime::Scheduler;
use core::time::Duration;
use std::sync::Arc;

/// Extension trait providing the `sample` operator.
pub trait SampleExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Emits the most recent value on every periodic tick.
    ///
    /// Ticks start one `interval` after subscription. A tick emits the latest value seen
    /// since the previous tick and forgets it, so a quiet period produces no emissions.
    /// Terminal events are forwarded immediately and stop the ticking; a value still waiting
    /// for a tick at that point is dropped.
    ///
    /// An `interval` below [`MIN_PERIOD`](cascade_runtime::scheduler::MIN_PERIOD), including
    /// `Duration::ZERO`, ticks every `MIN_PERIOD` instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cascade_stream_time::SampleExt;
    /// use cascade_test_utils::{record, test_subject, TestScheduler};
    /// use std::time::Duration;
    ///
    /// let scheduler = TestScheduler::new();
    /// let source = test_subject::<i32>();
    /// let (recorder, _subscription) =
    ///     record(&source.clone().sample(Duration::from_millis(100), scheduler.clone()));
    ///
    /// source.next(1).unwrap();
    /// source.next(2).unwrap();
    /// scheduler.advance(Duration::from_millis(100));
    /// scheduler.advance(Duration::from_millis(100));
    ///
    /// assert_eq!(recorder.values(), vec![2]);
    /// ```
    fn sample<S>(self, interval: Duration, scheduler: S) -> Signal<T, E>
    where
        S: Scheduler;
}

impl<O, T, E> SampleExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn sample<S>(self, interval: Duration, scheduler: S) -> Signal<T, E>
    where
        S: Scheduler,
    {
        let source = Arc::new(self);
        Signal::new(move |observer: Observer<T, E>| {
            let latest: Arc<Mutex<Option<T>>> = Arc::new(Mutex::new(None));
            let subscriptions = Arc::new(CompositeDisposable::new());

            let tick_latest = Arc::clone(&latest);
            let tick_observer = observer.clone();
            subscriptions.add(scheduler.schedule_periodic(interval, move || {
                let sampled = tick_latest.lock().take();
                if let Some(value) = sampled {
                    tick_observer.next(value);
                }
            }));

            let release = Arc::clone(&subscriptions);
            subscriptions.add(source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    *latest.lock() = Some(value);
                }
                terminal => {
                    release.dispose();
                    latest.lock().take();
                    observer.on(terminal);
                }
            })));

            Subscription::from_shared(subscriptions)
        })
    }
}

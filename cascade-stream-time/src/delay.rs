// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::debug;
use cascade_core::{
    CompositeDisposable, Disposable, Observable, Observer, SerialDisposable, Signal, StreamEvent,
    Subscription,
};
use cascade_runtime::Scheduler;
use core::time::Duration;
use std::sync::Arc;

/// Extension trait providing the `delay` operator.
pub trait DelayExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Re-emits every value, and the final `Completed`, `interval` after it arrived.
    ///
    /// Relative order is preserved. `Failed` is forwarded immediately and cancels every
    /// delivery still in flight.
    fn delay<S>(self, interval: Duration, scheduler: S) -> Signal<T, E>
    where
        S: Scheduler;
}

impl<O, T, E> DelayExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn delay<S>(self, interval: Duration, scheduler: S) -> Signal<T, E>
    where
        S: Scheduler,
    {
        let source = Arc::new(self);
        Signal::new(move |observer: Observer<T, E>| {
            let timers = Arc::new(CompositeDisposable::new());
            let upstream = Arc::new(SerialDisposable::new());

            let scheduler = scheduler.clone();
            let in_flight = Arc::clone(&timers);
            let release = Arc::clone(&upstream);
            let subscription = source.observe(Observer::new(move |event| match event {
                StreamEvent::Failed(error) => {
                    debug!("delay: failure cancels deliveries in flight");
                    in_flight.dispose();
                    release.dispose();
                    observer.failed(error);
                }
                event => {
                    let slot = Arc::new(SerialDisposable::new());
                    let fired = Arc::clone(&slot);
                    let downstream = observer.clone();
                    slot.set(scheduler.schedule_after(
                        interval,
                        Box::new(move || {
                            fired.dispose();
                            downstream.on(event);
                        }),
                    ));
                    in_flight.add(Subscription::from_shared(slot));
                }
            }));
            upstream.set(subscription);

            let subscriptions = CompositeDisposable::new();
            subscriptions.add(Subscription::from_shared(upstream));
            subscriptions.add(Subscription::from_shared(timers));
            Subscription::new(subscriptions)
        })
    }
}

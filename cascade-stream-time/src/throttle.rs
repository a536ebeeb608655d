// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::cascade_mutex::Mutex;
use cascade_core::{Observable, Observer, Signal, StreamEvent};
use cascade_runtime::Scheduler;
use core::time::Duration;
use std::sync::Arc;

/// Extension trait providing the `throttle` operator.
pub trait ThrottleExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Forwards a value iff at least `interval` has elapsed since the last *forwarded* value.
    ///
    /// The first value is always forwarded. Dropped values are discarded, not delayed, and
    /// do not restart the window. Terminal events pass through immediately.
    ///
    /// # Arguments
    ///
    /// * `interval` - The minimum spacing between forwarded values
    /// * `scheduler` - The clock the spacing is measured on
    fn throttle<S>(self, interval: Duration, scheduler: S) -> Signal<T, E>
    where
        S: Scheduler;
}

impl<O, T, E> ThrottleExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn throttle<S>(self, interval: Duration, scheduler: S) -> Signal<T, E>
    where
        S: Scheduler,
    {
        let source = Arc::new(self);
        Signal::new(move |observer: Observer<T, E>| {
            let scheduler = scheduler.clone();
            let last_forwarded: Mutex<Option<S::Instant>> = Mutex::new(None);
            source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    let now = scheduler.now();
                    let forward = {
                        let mut last = last_forwarded.lock();
                        match *last {
                            Some(previous) if now - previous < interval => false,
                            _ => {
                                *last = Some(now);
                                true
                            }
                        }
                    };
                    if forward {
                        observer.next(value);
                    }
                }
                terminal => observer.on(terminal),
            }))
        })
    }
}

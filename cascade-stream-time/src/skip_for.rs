// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{Observable, Observer, Signal, StreamEvent};
use cascade_runtime::Scheduler;
use core::time::Duration;
use std::sync::Arc;

/// Extension trait providing the `skip_for` operator.
pub trait SkipForExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Drops values until strictly more than `interval` has passed since subscription.
    ///
    /// A value arriving exactly at the cutoff is still dropped. Terminal events always pass.
    fn skip_for<S>(self, interval: Duration, scheduler: S) -> Signal<T, E>
    where
        S: Scheduler;
}

impl<O, T, E> SkipForExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn skip_for<S>(self, interval: Duration, scheduler: S) -> Signal<T, E>
    where
        S: Scheduler,
    {
        let source = Arc::new(self);
        Signal::new(move |observer: Observer<T, E>| {
            let scheduler = scheduler.clone();
            let cutoff = scheduler.now() + interval;
            source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    if scheduler.now() > cutoff {
                        observer.next(value);
                    }
                }
                terminal => observer.on(terminal),
            }))
        })
    }
}

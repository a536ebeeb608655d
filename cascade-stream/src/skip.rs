// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{Observable, Observer, Signal, StreamEvent};
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Extension trait providing the `skip` operator.
pub trait SkipExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Drops the first `count` values. Terminal events are always forwarded.
    fn skip(self, count: usize) -> Signal<T, E>;
}

impl<O, T, E> SkipExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn skip(self, count: usize) -> Signal<T, E> {
        let source = Arc::new(self);
        Signal::new(move |observer: Observer<T, E>| {
            let skipped = AtomicUsize::new(0);
            source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    let quota_exhausted = skipped
                        .fetch_update(Ordering::AcqRel, Ordering::Acquire, |skipped| {
                            (skipped < count).then_some(skipped + 1)
                        })
                        .is_err();
                    if quota_exhausted {
                        observer.next(value);
                    }
                }
                terminal => observer.on(terminal),
            }))
        })
    }
}

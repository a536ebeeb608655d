// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{
    Disposable, Observable, Observer, SerialDisposable, Signal, StreamEvent, Subscription,
};
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Extension trait providing the `element_at` operator.
pub trait ElementAtExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Forwards only the zero-based `index`th value, then completes and releases the source.
    ///
    /// If the source completes earlier, the result completes without a value. A failure before
    /// the index is reached is forwarded.
    fn element_at(self, index: usize) -> Signal<T, E>;
}

impl<O, T, E> ElementAtExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn element_at(self, index: usize) -> Signal<T, E> {
        let source = Arc::new(self);
        Signal::new(move |observer: Observer<T, E>| {
            let seen = AtomicUsize::new(0);
            let upstream = Arc::new(SerialDisposable::new());
            let release = Arc::clone(&upstream);

            let subscription = source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    if seen.fetch_add(1, Ordering::AcqRel) == index {
                        observer.next(value);
                        release.dispose();
                        observer.completed();
                    }
                }
                terminal => observer.on(terminal),
            }));

            upstream.set(subscription);
            Subscription::from_shared(upstream)
        })
    }
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{Observable, Observer, Signal, StreamEvent};
use std::sync::Arc;

/// Extension trait providing the `tap` operator.
pub trait TapExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Calls `f` with a reference to every event before forwarding it unchanged.
    ///
    /// Useful for logging and debugging pipelines without altering them.
    fn tap<F>(self, f: F) -> Signal<T, E>
    where
        F: Fn(&StreamEvent<T, E>) + Send + Sync + 'static;
}

impl<O, T, E> TapExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn tap<F>(self, f: F) -> Signal<T, E>
    where
        F: Fn(&StreamEvent<T, E>) + Send + Sync + 'static,
    {
        let source = Arc::new(self);
        let f = Arc::new(f);
        Signal::new(move |observer: Observer<T, E>| {
            let f = Arc::clone(&f);
            source.observe(Observer::new(move |event| {
                f(&event);
                observer.on(event);
            }))
        })
    }
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{Observable, Observer, Signal};
use std::sync::Arc;

/// Extension trait providing the `map` operator.
pub trait MapExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Transforms every value with `f`. Terminal events pass through unchanged.
    fn map<U, F>(self, f: F) -> Signal<U, E>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static;
}

impl<O, T, E> MapExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn map<U, F>(self, f: F) -> Signal<U, E>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let source = Arc::new(self);
        let f = Arc::new(f);
        Signal::new(move |observer: Observer<U, E>| {
            let f = Arc::clone(&f);
            source.observe(Observer::new(move |event| {
                observer.on(event.map(|value| f(value)));
            }))
        })
    }
}

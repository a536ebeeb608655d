// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operators.
//!
//! [`filter`](FilterExt::filter) forwards the values that satisfy a predicate.
//! [`ignore_elements`](FilterExt::ignore_elements) forwards none of them and only reports
//! how the source terminated.
//!
//! The asynchronous variant, where the predicate itself is a stream, lives in
//! `cascade-task` as `filter_async`.

use cascade_core::{Observable, Observer, Signal, StreamEvent};
use std::sync::Arc;

/// Extension trait providing the `filter` and `ignore_elements` operators.
pub trait FilterExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Forwards a value iff `predicate` returns `true` for it.
    fn filter<F>(self, predicate: F) -> Signal<T, E>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static;

    /// Drops every value; only the terminal event is forwarded.
    fn ignore_elements(self) -> Signal<T, E> {
        self.filter(|_| false)
    }
}

impl<O, T, E> FilterExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn filter<F>(self, predicate: F) -> Signal<T, E>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let source = Arc::new(self);
        let predicate = Arc::new(predicate);
        Signal::new(move |observer: Observer<T, E>| {
            let predicate = Arc::clone(&predicate);
            source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    if predicate(&value) {
                        observer.next(value);
                    }
                }
                terminal => observer.on(terminal),
            }))
        })
    }
}

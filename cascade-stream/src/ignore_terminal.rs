// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::trace;
use cascade_core::{Observable, Observer, Signal, StreamEvent};
use std::sync::Arc;

/// Extension trait providing the `ignore_terminal` operator.
pub trait IgnoreTerminalExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Forwards values but swallows `Failed` and `Completed`.
    ///
    /// The resulting signal never terminates on its own; dispose it to stop observing.
    fn ignore_terminal(self) -> Signal<T, E>;
}

impl<O, T, E> IgnoreTerminalExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn ignore_terminal(self) -> Signal<T, E> {
        let source = Arc::new(self);
        Signal::new(move |observer: Observer<T, E>| {
            source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => observer.next(value),
                StreamEvent::Failed(_) | StreamEvent::Completed => {
                    trace!("ignore_terminal: swallowed terminal event");
                }
            }))
        })
    }
}

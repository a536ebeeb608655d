// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::cascade_mutex::Mutex;
use cascade_core::{Observable, Observer, Signal, StreamEvent};
use std::collections::VecDeque;
use std::sync::Arc;

/// Extension trait providing the `skip_last` operator.
pub trait SkipLastExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Drops the last `count` values.
    ///
    /// Values are held back in a buffer of `count`; each arrival beyond that releases the
    /// oldest buffered value. On termination the buffer is discarded.
    fn skip_last(self, count: usize) -> Signal<T, E>;
}

impl<O, T, E> SkipLastExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn skip_last(self, count: usize) -> Signal<T, E> {
        let source = Arc::new(self);
        Signal::new(move |observer: Observer<T, E>| {
            let buffer = Mutex::new(VecDeque::with_capacity(count.saturating_add(1).min(1024)));
            source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    let released = {
                        let mut buffer = buffer.lock();
                        buffer.push_back(value);
                        if buffer.len() > count {
                            buffer.pop_front()
                        } else {
                            None
                        }
                    };
                    if let Some(value) = released {
                        observer.next(value);
                    }
                }
                terminal => {
                    buffer.lock().clear();
                    observer.on(terminal);
                }
            }))
        })
    }
}

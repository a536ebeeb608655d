// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::cascade_mutex::Mutex;
use cascade_core::{Observable, Observer, Signal, StreamEvent};
use std::collections::VecDeque;
use std::sync::Arc;

/// Extension trait providing the `take_last` and `last` operators.
pub trait TakeLastExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Keeps the last `count` values and emits them, in arrival order, when the source
    /// completes.
    ///
    /// A failure is forwarded without flushing the buffer.
    fn take_last(self, count: usize) -> Signal<T, E>;

    /// Emits the final value on completion; `take_last(1)`.
    fn last(self) -> Signal<T, E> {
        self.take_last(1)
    }
}

impl<O, T, E> TakeLastExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn take_last(self, count: usize) -> Signal<T, E> {
        let source = Arc::new(self);
        Signal::new(move |observer: Observer<T, E>| {
            let buffer = Mutex::new(VecDeque::with_capacity(count.min(1024)));
            source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    if count == 0 {
                        return;
                    }
                    let mut buffer = buffer.lock();
                    if buffer.len() == count {
                        buffer.pop_front();
                    }
                    buffer.push_back(value);
                }
                StreamEvent::Completed => {
                    let flushed = core::mem::take(&mut *buffer.lock());
                    for value in flushed {
                        observer.next(value);
                    }
                    observer.completed();
                }
                StreamEvent::Failed(error) => {
                    buffer.lock().clear();
                    observer.failed(error);
                }
            }))
        })
    }
}

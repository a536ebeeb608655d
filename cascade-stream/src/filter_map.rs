// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter-map operator: transforms values and drops those mapped to `None`.
//!
//! Also the idiomatic replacement for "unwrap optional values" helpers:
//! `source.filter_map(|value| value)` turns a stream of `Option<T>` into a stream of `T`.
//!
//! # Example
//!
//! ```
//! use cascade_core::{CascadeError, Signal};
//! use cascade_stream::FilterMapExt;
//! use cascade_test_utils::record;
//!
//! let source = Signal::<Option<i32>, CascadeError>::sequence([Some(1), None, Some(3)]);
//! let (recorder, _subscription) = record(&source.filter_map(|value| value));
//!
//! assert_eq!(recorder.values(), vec![1, 3]);
//! ```

use cascade_core::{Observable, Observer, Signal, StreamEvent};
use std::sync::Arc;

/// Extension trait providing the `filter_map` operator.
pub trait FilterMapExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Forwards `f(value)` for every value where it returns `Some`.
    fn filter_map<U, F>(self, f: F) -> Signal<U, E>
    where
        U: Send + 'static,
        F: Fn(T) -> Option<U> + Send + Sync + 'static;
}

impl<O, T, E> FilterMapExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn filter_map<U, F>(self, f: F) -> Signal<U, E>
    where
        U: Send + 'static,
        F: Fn(T) -> Option<U> + Send + Sync + 'static,
    {
        let source = Arc::new(self);
        let f = Arc::new(f);
        Signal::new(move |observer: Observer<U, E>| {
            let f = Arc::clone(&f);
            source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    if let Some(mapped) = f(value) {
                        observer.next(mapped);
                    }
                }
                StreamEvent::Failed(error) => observer.failed(error),
                StreamEvent::Completed => observer.completed(),
            }))
        })
    }
}

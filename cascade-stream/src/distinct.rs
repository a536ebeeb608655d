// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Distinct operators - suppress values based on the previously seen value.
//!
//! The first value is always forwarded. Every later value is compared against the value that
//! arrived immediately before it, whether or not that one was forwarded.
//!
//! # Examples
//!
//! ```rust
//! use cascade_core::{CascadeError, Signal};
//! use cascade_stream::DistinctExt;
//! use cascade_test_utils::record;
//!
//! let source = Signal::<i32, CascadeError>::sequence([1, 1, 2, 2, 2, 3, 1]);
//! let (recorder, _subscription) = record(&source.distinct());
//!
//! assert_eq!(recorder.values(), vec![1, 2, 3, 1]);
//! ```
//!
//! A custom predicate decides whether `current` is different enough from `previous`:
//!
//! ```rust
//! use cascade_core::{CascadeError, Signal};
//! use cascade_stream::DistinctExt;
//! use cascade_test_utils::record;
//!
//! // Only forward jumps of more than 5
//! let source = Signal::<i32, CascadeError>::sequence([0, 3, 10, 12, 20]);
//! let jumps = source.distinct_by(|previous, current| (current - previous).abs() > 5);
//! let (recorder, _subscription) = record(&jumps);
//!
//! assert_eq!(recorder.values(), vec![0, 10, 20]);
//! ```

use cascade_core::cascade_mutex::Mutex;
use cascade_core::{Observable, Observer, Signal, StreamEvent};
use std::sync::Arc;

/// Extension trait providing the `distinct` and `distinct_by` operators.
pub trait DistinctExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Forwards a value iff `predicate(previous, current)` returns `true`.
    ///
    /// The first value is always forwarded. `previous` is updated on every value.
    fn distinct_by<F>(self, predicate: F) -> Signal<T, E>
    where
        T: Clone,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static;

    /// Drops values equal to the one immediately before them.
    fn distinct(self) -> Signal<T, E>
    where
        T: Clone + PartialEq,
    {
        self.distinct_by(|previous, current| previous != current)
    }
}

impl<O, T, E> DistinctExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn distinct_by<F>(self, predicate: F) -> Signal<T, E>
    where
        T: Clone,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        let source = Arc::new(self);
        let predicate = Arc::new(predicate);
        Signal::new(move |observer: Observer<T, E>| {
            let predicate = Arc::clone(&predicate);
            let previous: Arc<Mutex<Option<T>>> = Arc::new(Mutex::new(None));
            source.observe(Observer::new(move |event: StreamEvent<T, E>| match event {
                StreamEvent::Next(value) => {
                    let before = previous.lock().replace(value.clone());
                    let forward = before.map_or(true, |before| predicate(&before, &value));
                    if forward {
                        observer.next(value);
                    }
                }
                terminal => {
                    previous.lock().take();
                    observer.on(terminal);
                }
            }))
        })
    }
}

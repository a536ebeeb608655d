// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take operator - forwards the first N values, then completes.
//!
//! Once the `count`th value has been forwarded, the source subscription is released *before*
//! `Completed` is delivered, so a synchronous source stops producing immediately.
//!
//! # Arguments
//!
//! * `count` - The number of values to forward. `0` completes without observing the source.
//!
//! # Examples
//!
//! ```rust
//! use cascade_stream::TakeExt;
//! use cascade_test_utils::{record, test_subject};
//!
//! let subject = test_subject::<i32>();
//! let (recorder, _subscription) = record(&subject.clone().take(2));
//!
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//!
//! assert_eq!(recorder.values(), vec![1, 2]);
//! assert!(recorder.is_completed());
//! assert_eq!(subject.subscriber_count(), 0);
//! ```
//!
//! # See Also
//!
//! - [`SkipExt::skip`](crate::SkipExt::skip) - Drop the first n values
//! - [`TakeLastExt::take_last`](crate::TakeLastExt::take_last) - Keep the last n values

use cascade_core::{
    Disposable, Observable, Observer, SerialDisposable, Signal, StreamEvent, Subscription,
};
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Extension trait providing the `take` and `first` operators.
pub trait TakeExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Forwards up to `count` values, then completes and releases the source.
    ///
    /// See the [module-level documentation](crate::take) for details.
    fn take(self, count: usize) -> Signal<T, E>;

    /// Forwards the first value and completes; `take(1)`.
    fn first(self) -> Signal<T, E> {
        self.take(1)
    }
}

impl<O, T, E> TakeExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn take(self, count: usize) -> Signal<T, E> {
        let source = Arc::new(self);
        Signal::new(move |observer: Observer<T, E>| {
            if count == 0 {
                observer.completed();
                return Subscription::disposed();
            }

            let taken = AtomicUsize::new(0);
            let upstream = Arc::new(SerialDisposable::new());
            let release = Arc::clone(&upstream);

            let subscription = source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    let position = taken.fetch_add(1, Ordering::AcqRel);
                    if position >= count {
                        return;
                    }
                    observer.next(value);
                    if position + 1 == count {
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

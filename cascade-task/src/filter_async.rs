// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::SwitchToLatestExt;
use cascade_core::{Observable, Signal};
use cascade_stream::{FilterMapExt, MapExt, TakeExt};

/// Extension trait providing the `filter_async` operator.
pub trait FilterAsyncExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Keeps the values for which an asynchronous predicate answers `true`.
    ///
    /// For every value, `predicate` returns a stream whose first `Next` is the verdict. A value
    /// arriving while an earlier verdict is still pending abandons that evaluation, so only
    /// the latest value can still pass. The result completes once the source completed and
    /// the pending evaluation, if any, finished. A failure of the source or of a predicate
    /// stream fails the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cascade_core::{CascadeError, Signal};
    /// use cascade_task::FilterAsyncExt;
    /// use cascade_test_utils::record;
    ///
    /// let usernames = Signal::<&'static str, CascadeError>::sequence(["ada", "root", "grace"]);
    /// let available = usernames.filter_async(|name| Signal::just(*name != "root"));
    /// let (recorder, _subscription) = record(&available);
    ///
    /// assert_eq!(recorder.values(), vec!["ada", "grace"]);
    /// assert!(recorder.is_completed());
    /// ```
    fn filter_async<P, F>(self, predicate: F) -> Signal<T, E>
    where
        T: Clone + Sync,
        P: Observable<Item = bool, Error = E> + 'static,
        F: Fn(&T) -> P + Send + Sync + 'static;
}

impl<O, T, E> FilterAsyncExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn filter_async<P, F>(self, predicate: F) -> Signal<T, E>
    where
        T: Clone + Sync,
        P: Observable<Item = bool, Error = E> + 'static,
        F: Fn(&T) -> P + Send + Sync + 'static,
    {
        self.map(move |value: T| {
            predicate(&value)
                .take(1)
                .filter_map(move |keep| keep.then(|| value.clone()))
        })
        .switch_to_latest()
        .into_signal()
    }
}

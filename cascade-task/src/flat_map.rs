// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ConcatExt, MergeExt, SwitchToLatestExt};
use cascade_core::{Observable, Task};
use cascade_stream::MapExt;

/// How [`flat_map`](FlatMapExt::flat_map) combines the inner tasks it creates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlattenStrategy {
    /// Observe every inner task concurrently. See [`MergeExt::merge`].
    #[default]
    Merge,
    /// Follow only the most recent inner task. See [`SwitchToLatestExt::switch_to_latest`].
    Latest,
    /// Observe inner tasks one at a time, in order. See [`ConcatExt::concat`].
    Concat,
}

/// Extension trait providing the `flat_map` operator.
pub trait FlatMapExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Maps every value to an inner task with `transform`, then flattens with `strategy`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cascade_core::{CascadeError, Signal, Task};
    /// use cascade_task::{FlatMapExt, FlattenStrategy};
    /// use cascade_test_utils::record;
    ///
    /// let ids = Signal::<u32, CascadeError>::sequence([1, 2, 3]);
    /// let names = ids.flat_map(FlattenStrategy::Concat, |id| Task::just(format!("user-{id}")));
    /// let (recorder, _subscription) = record(&names);
    ///
    /// assert_eq!(recorder.values(), vec!["user-1", "user-2", "user-3"]);
    /// assert!(recorder.is_completed());
    /// ```
    fn flat_map<I, U, F>(self, strategy: FlattenStrategy, transform: F) -> Task<U, E>
    where
        I: Observable<Item = U, Error = E> + Send + 'static,
        U: Send + 'static,
        F: Fn(T) -> I + Send + Sync + 'static;
}

impl<O, T, E> FlatMapExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn flat_map<I, U, F>(self, strategy: FlattenStrategy, transform: F) -> Task<U, E>
    where
        I: Observable<Item = U, Error = E> + Send + 'static,
        U: Send + 'static,
        F: Fn(T) -> I + Send + Sync + 'static,
    {
        let inners = self.map(transform);
        match strategy {
            FlattenStrategy::Merge => inners.merge(),
            FlattenStrategy::Latest => inners.switch_to_latest(),
            FlattenStrategy::Concat => inners.concat(),
        }
    }
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flattening strategies for streams whose values are themselves observables.
//!
//! An *outer* stream emits *inner* tasks; a flattening strategy decides which inner tasks are
//! observed, and when, and folds their progress values into a single [`Task`](cascade_core::Task):
//!
//! | Strategy | Inner tasks observed | Succeeds when |
//! |---|---|---|
//! | [`merge`](MergeExt::merge) | all, concurrently | outer completed and every inner succeeded |
//! | [`switch_to_latest`](SwitchToLatestExt::switch_to_latest) | only the newest | outer completed and the newest inner succeeded |
//! | [`concat`](ConcatExt::concat) | one at a time, in arrival order | outer completed and the queue drained |
//!
//! All three fail immediately, and release everything, on the first failure from the outer
//! stream or any observed inner task.
//!
//! [`flat_map`](FlatMapExt::flat_map) maps each value to a task and flattens with a chosen
//! [`FlattenStrategy`]. [`filter_async`](FilterAsyncExt::filter_async) keeps values whose
//! asynchronous predicate answers `true`, abandoning a pending verdict when a newer value
//! arrives.
//!
//! # Example
//!
//! ```rust
//! use cascade_core::{CascadeError, Signal, Task};
//! use cascade_task::prelude::*;
//! use cascade_test_utils::record;
//!
//! let uploads = Signal::<Task<u8, CascadeError>, CascadeError>::sequence([
//!     Task::just(1),
//!     Task::just(2),
//! ]);
//! let (recorder, _subscription) = record(&uploads.concat());
//!
//! assert_eq!(recorder.values(), vec![1, 2]);
//! assert!(recorder.is_completed());
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod concat;
pub mod filter_async;
pub mod flat_map;
pub(crate) mod logging;
pub mod merge;
pub mod prelude;
pub mod switch_to_latest;

pub use self::concat::ConcatExt;
pub use self::filter_async::FilterAsyncExt;
pub use self::flat_map::{FlatMapExt, FlattenStrategy};
pub use self::merge::MergeExt;
pub use self::switch_to_latest::SwitchToLatestExt;

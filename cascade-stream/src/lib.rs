// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators over cascade observables that do not depend on time.
//!
//! Every operator is an extension trait implemented for all [`Observable`]s and returns a
//! [`Signal`]. Operators are cold: nothing happens until the returned signal is observed,
//! and each observation gets its own operator state.
//!
//! ## Operator Categories
//!
//! ### Transformation
//!
//! - **[`map`](MapExt::map)**, **[`filter_map`](FilterMapExt::filter_map)**,
//!   **[`tap`](TapExt::tap)**
//!
//! ### Filtering
//!
//! - **[`filter`](FilterExt::filter)**, **[`ignore_elements`](FilterExt::ignore_elements)**
//! - **[`distinct`](DistinctExt::distinct)**, **[`distinct_by`](DistinctExt::distinct_by)**
//! - **[`element_at`](ElementAtExt::element_at)**
//! - **[`skip`](SkipExt::skip)**, **[`skip_last`](SkipLastExt::skip_last)**
//! - **[`take`](TakeExt::take)**, **[`first`](TakeExt::first)**
//! - **[`take_last`](TakeLastExt::take_last)**, **[`last`](TakeLastExt::last)**
//! - **[`ignore_terminal`](IgnoreTerminalExt::ignore_terminal)**
//!
//! ### Gating
//!
//! - **[`pausable`](PausableExt::pausable)**: drops values while a boolean gate is closed
//! - **[`take_until`](TakeUntilExt::take_until)**: completes when a notifier fires
//!
//! ### Combination
//!
//! - **[`combine_latest`]**: N homogeneous sources, emitting the latest value of each
//! - **[`combine_latest_with`](CombineLatestExt::combine_latest_with)**: pairwise form
//!
//! # Example
//!
//! ```
//! use cascade_core::{CascadeError, Signal};
//! use cascade_stream::prelude::*;
//! use cascade_test_utils::record;
//!
//! let source = Signal::<i32, CascadeError>::sequence([1, 1, 2, 3, 3, 4]);
//! let pipeline = source.distinct().filter(|value| value % 2 == 0).map(|value| value * 10);
//!
//! let (recorder, _subscription) = record(&pipeline);
//! assert_eq!(recorder.values(), vec![20, 40]);
//! assert!(recorder.is_completed());
//! ```
//!
//! [`Observable`]: cascade_core::Observable
//! [`Signal`]: cascade_core::Signal

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod combine_latest;
pub mod distinct;
pub mod element_at;
pub mod filter;
pub mod filter_map;
pub mod ignore_terminal;
pub(crate) mod logging;
pub mod map;
pub mod pausable;
pub mod prelude;
pub mod skip;
pub mod skip_last;
pub mod take;
pub mod take_last;
pub mod take_until;
pub mod tap;

pub use self::combine_latest::{combine_latest, CombineLatestExt};
pub use self::distinct::DistinctExt;
pub use self::element_at::ElementAtExt;
pub use self::filter::FilterExt;
pub use self::filter_map::FilterMapExt;
pub use self::ignore_terminal::IgnoreTerminalExt;
pub use self::map::MapExt;
pub use self::pausable::PausableExt;
pub use self::skip::SkipExt;
pub use self::skip_last::SkipLastExt;
pub use self::take::TakeExt;
pub use self::take_last::TakeLastExt;
pub use self::take_until::TakeUntilExt;
pub use self::tap::TapExt;

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all flattening traits.

pub use crate::concat::ConcatExt;
pub use crate::filter_async::FilterAsyncExt;
pub use crate::flat_map::{FlatMapExt, FlattenStrategy};
pub use crate::merge::MergeExt;
pub use crate::switch_to_latest::SwitchToLatestExt;

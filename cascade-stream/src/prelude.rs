// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all operator traits.
//!
//! ```
//! use cascade_stream::prelude::*;
//! ```

pub use crate::combine_latest::{combine_latest, CombineLatestExt};
pub use crate::distinct::DistinctExt;
pub use crate::element_at::ElementAtExt;
pub use crate::filter::FilterExt;
pub use crate::filter_map::FilterMapExt;
pub use crate::ignore_terminal::IgnoreTerminalExt;
pub use crate::map::MapExt;
pub use crate::pausable::PausableExt;
pub use crate::skip::SkipExt;
pub use crate::skip_last::SkipLastExt;
pub use crate::take::TakeExt;
pub use crate::take_last::TakeLastExt;
pub use crate::take_until::TakeUntilExt;
pub use crate::tap::TapExt;

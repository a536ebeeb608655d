// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all time-based operator traits and the scheduler trait.

pub use crate::debounce::DebounceExt;
pub use crate::delay::DelayExt;
pub use crate::sample::SampleExt;
pub use crate::skip_for::SkipForExt;
pub use crate::throttle::ThrottleExt;
pub use crate::timeout::TimeoutExt;
pub use cascade_runtime::Scheduler;

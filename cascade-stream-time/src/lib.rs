// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators for cascade observables.
//!
//! Every operator takes the [`Scheduler`](cascade_runtime::Scheduler) it runs on as an
//! explicit argument. Production code passes a runtime scheduler such as `TokioScheduler`;
//! tests pass the virtual-time `TestScheduler` and step the clock by hand.
//!
//! # Overview
//!
//! - **`DebounceExt`** - `.debounce(interval, scheduler)`: emit after a quiet period
//! - **`ThrottleExt`** - `.throttle(interval, scheduler)`: at most one value per interval
//! - **`SampleExt`** - `.sample(interval, scheduler)`: latest value on each periodic tick
//! - **`SkipForExt`** - `.skip_for(interval, scheduler)`: drop values during a warm-up window
//! - **`DelayExt`** - `.delay(interval, scheduler)`: shift every value and completion in time
//! - **`TimeoutExt`** - `.timeout(interval, scheduler, error)`: fail on silence
//!
//! Disposing a derived subscription cancels every timer the operator scheduled.
//!
//! # Example
//!
//! ```rust
//! use cascade_stream_time::prelude::*;
//! use cascade_test_utils::{record, test_subject, TestScheduler};
//! use std::time::Duration;
//!
//! let scheduler = TestScheduler::new();
//! let search = test_subject::<&'static str>();
//! let debounced = search.clone().debounce(Duration::from_millis(300), scheduler.clone());
//! let (recorder, _subscription) = record(&debounced);
//!
//! search.next("r").unwrap();
//! search.next("ru").unwrap();
//! search.next("rust").unwrap();
//! scheduler.advance(Duration::from_millis(300));
//!
//! assert_eq!(recorder.values(), vec!["rust"]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod debounce;
pub mod delay;
pub(crate) mod logging;
pub mod prelude;
pub mod sample;
pub mod skip_for;
pub mod throttle;
pub mod timeout;

pub use self::debounce::DebounceExt;
pub use self::delay::DelayExt;
pub use self::sample::SampleExt;
pub use self::skip_for::SkipForExt;
pub use self::throttle::ThrottleExt;
pub use self::timeout::TimeoutExt;

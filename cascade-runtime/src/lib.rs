// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scheduling capability for cascade's timing operators.
//!
//! Timing operators never reach for a global clock. They receive a [`Scheduler`] value and
//! only use it to read the current instant and to run a callback after a delay. This crate
//! defines that trait and ships adapters for the Tokio and smol executors.
//!
//! | Feature | Scheduler |
//! |---|---|
//! | `runtime-tokio` (default) | [`TokioScheduler`] |
//! | `runtime-smol` | [`SmolScheduler`] |
//!
//! Tests use the virtual-time `TestScheduler` from `cascade-test-utils` instead.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod impls;
pub(crate) mod logging;
pub mod scheduler;

pub use self::scheduler::{Scheduler, MIN_PERIOD};

#[cfg(feature = "runtime-smol")]
pub use self::impls::smol::SmolScheduler;
#[cfg(feature = "runtime-tokio")]
pub use self::impls::tokio::TokioScheduler;

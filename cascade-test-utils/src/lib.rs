// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the cascade reactive combinator library.
//!
//! This crate provides the virtual clock, event recording and test data used across the
//! workspace's test suites. It is designed for use in development and testing only, not for
//! production code.
//!
//! # Key Types
//!
//! ## `TestScheduler`
//!
//! A [`Scheduler`](cascade_runtime::Scheduler) whose clock only moves when the test says so.
//! Timers fire synchronously inside [`TestScheduler::advance`], in deadline order.
//!
//! ```rust
//! use cascade_runtime::Scheduler;
//! use cascade_test_utils::TestScheduler;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let scheduler = TestScheduler::new();
//! let fired = Arc::new(AtomicBool::new(false));
//! let flag = fired.clone();
//!
//! scheduler.schedule_after(Duration::from_millis(10), Box::new(move || flag.store(true, Ordering::SeqCst)));
//! assert_eq!(scheduler.pending_count(), 1);
//!
//! scheduler.advance(Duration::from_millis(10));
//! assert!(fired.load(Ordering::SeqCst));
//! assert_eq!(scheduler.pending_count(), 0);
//! ```
//!
//! ## `Recorder`
//!
//! Collects every event delivered to an observer so tests can assert on the full sequence:
//!
//! ```rust
//! use cascade_core::{CascadeError, Signal};
//! use cascade_test_utils::record;
//!
//! let (recorder, _subscription) = record(&Signal::<i32, CascadeError>::sequence([1, 2]));
//! assert_eq!(recorder.values(), vec![1, 2]);
//! assert!(recorder.is_completed());
//! ```
//!
//! ## Test Fixtures
//!
//! [`TestData`] with `Person`, `Animal` and `Plant` variants and pre-built values such as
//! [`person_alice`](test_data::person_alice).

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod recorder;
pub mod test_data;
pub mod test_scheduler;

pub use self::helpers::{record, subject_task, test_subject};
pub use self::recorder::Recorder;
pub use self::test_data::{Animal, Person, Plant, TestData};
pub use self::test_scheduler::{TestScheduler, VirtualInstant};

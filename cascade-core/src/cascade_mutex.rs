// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Synchronization primitive used for all per-subscription operator state.

pub use parking_lot::{Mutex, MutexGuard};

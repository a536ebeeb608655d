// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::trace;
use crate::scheduler::{ScheduledAction, Scheduler};
use cascade_core::{BooleanDisposable, Disposable, Subscription};
use core::time::Duration;
use std::sync::Arc;

/// Scheduler backed by the ambient Tokio runtime.
///
/// Each scheduled action is a spawned task racing a `tokio::time::sleep` against the
/// cancellation flag. Uses `tokio::time::Instant`, so paused-clock tests
/// (`#[tokio::test(start_paused = true)]`) drive it deterministically.
///
/// # Panics
///
/// `schedule_after` must be called from within a Tokio runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    type Instant = tokio::time::Instant;

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }

    fn schedule_after(&self, delay: Duration, action: ScheduledAction) -> Subscription {
        let cancel = Arc::new(BooleanDisposable::new());
        let token = Arc::clone(&cancel);

        tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(delay) => {
                    if !token.is_disposed() {
                        action();
                    }
                }
                () = token.disposed() => {
                    trace!("tokio scheduler: timer cancelled");
                }
            }
        });

        Subscription::from_shared(cancel)
    }
}

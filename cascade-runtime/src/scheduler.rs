// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{Disposable, SerialDisposable, Subscription};
use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;
use std::sync::Arc;

/// A one-shot deferred call.
pub type ScheduledAction = Box<dyn FnOnce() + Send>;

type PeriodicAction = Arc<dyn Fn() + Send + Sync>;

/// Shortest period [`Scheduler::schedule_periodic`] will tick at.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Deferred-call capability used by every timing operator.
///
/// Implementations run `action` once, no earlier than `delay` after the call, unless the
/// returned subscription is disposed first. Actions run outside any operator lock and may
/// schedule further actions.
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// Returns the current instant of this scheduler's clock.
    fn now(&self) -> Self::Instant;

    /// Runs `action` after `delay`. Disposing the returned handle cancels it.
    fn schedule_after(&self, delay: Duration, action: ScheduledAction) -> Subscription;

    /// Runs `action` every `period`, starting one period from now, until disposed.
    ///
    /// Built from repeated [`schedule_after`](Scheduler::schedule_after) calls, so at most one
    /// timer is pending at a time. A `period` shorter than [`MIN_PERIOD`] is raised to it.
    fn schedule_periodic<F>(&self, period: Duration, action: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let serial = Arc::new(SerialDisposable::new());
        schedule_tick(self.clone(), period, Arc::new(action), Arc::clone(&serial));
        Subscription::from_shared(serial)
    }
}

fn schedule_tick<S: Scheduler>(
    scheduler: S,
    period: Duration,
    action: PeriodicAction,
    serial: Arc<SerialDisposable>,
) {
    let next_scheduler = scheduler.clone();
    let next_serial = Arc::clone(&serial);
    let handle = scheduler.schedule_after(
        period,
        Box::new(move || {
            if next_serial.is_disposed() {
                return;
            }
            action();
            schedule_tick(next_scheduler, period, action, next_serial);
        }),
    );
    serial.set(handle);
}

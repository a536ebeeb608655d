// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::Subscription;
use cascade_runtime::scheduler::{ScheduledAction, Scheduler};
use core::fmt;
use core::ops::{Add, Sub};
use core::time::Duration;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

/// A point on the [`TestScheduler`]'s virtual clock, measured from its creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualInstant(Duration);

impl VirtualInstant {
    /// Time elapsed since the scheduler was created.
    #[must_use]
    pub const fn since_start(self) -> Duration {
        self.0
    }
}

impl Add<Duration> for VirtualInstant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs)
    }
}

impl Sub<VirtualInstant> for VirtualInstant {
    type Output = Duration;

    fn sub(self, rhs: VirtualInstant) -> Duration {
        self.0.saturating_sub(rhs.0)
    }
}

type TimerKey = (VirtualInstant, u64);

#[derive(Default)]
struct SchedulerState {
    now: VirtualInstant,
    next_id: u64,
    queue: BTreeMap<TimerKey, ScheduledAction>,
}

/// Deterministic scheduler driven by an explicit virtual clock.
///
/// Nothing happens until [`advance`](TestScheduler::advance) is called. Due timers then run
/// one at a time in `(deadline, scheduling order)` order, with the clock set to each timer's
/// deadline while it runs. Actions may schedule or cancel other timers; newly scheduled timers
/// that fall inside the advanced window run in the same call.
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct TestScheduler {
    state: Arc<Mutex<SchedulerState>>,
}

impl TestScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `by`, running every timer that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.state.lock().now + by;
        self.advance_to(target);
    }

    /// Moves the clock forward to `target`, running every timer that falls due.
    ///
    /// Targets in the past leave the clock where it is.
    pub fn advance_to(&self, target: VirtualInstant) {
        loop {
            let due = {
                let mut state = self.state.lock();
                let next_key = state
                    .queue
                    .keys()
                    .next()
                    .copied()
                    .filter(|(deadline, _)| *deadline <= target);

                match next_key {
                    Some(key) => {
                        state.now = state.now.max(key.0);
                        state.queue.remove(&key)
                    }
                    None => {
                        state.now = state.now.max(target);
                        None
                    }
                }
            };

            match due {
                Some(action) => action(),
                None => break,
            }
        }
    }

    /// Runs timers that are due at the current instant without moving the clock.
    pub fn run_due(&self) {
        self.advance(Duration::ZERO);
    }

    /// Number of timers scheduled and neither fired nor cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.state.lock().now.since_start()
    }
}

impl Scheduler for TestScheduler {
    type Instant = VirtualInstant;

    fn now(&self) -> VirtualInstant {
        self.state.lock().now
    }

    fn schedule_after(&self, delay: Duration, action: ScheduledAction) -> Subscription {
        let key = {
            let mut state = self.state.lock();
            let key = (state.now + delay, state.next_id);
            state.next_id += 1;
            state.queue.insert(key, action);
            key
        };

        let state: Weak<Mutex<SchedulerState>> = Arc::downgrade(&self.state);
        Subscription::from_fn(move || {
            if let Some(state) = state.upgrade() {
                let cancelled = state.lock().queue.remove(&key);
                // Dropped outside the lock: the action may own handles that re-enter it.
                drop(cancelled);
            }
        })
    }
}

impl fmt::Debug for TestScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("TestScheduler")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}

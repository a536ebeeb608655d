// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::trace;
use crate::scheduler::{ScheduledAction, Scheduler};
use cascade_core::{BooleanDisposable, Disposable, Subscription};
use core::time::Duration;
use futures::future::{select, Either};
use std::sync::Arc;
use std::time::Instant;

/// Scheduler backed by smol's global executor and `async-io` timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmolScheduler;

impl Scheduler for SmolScheduler {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn schedule_after(&self, delay: Duration, action: ScheduledAction) -> Subscription {
        let cancel = Arc::new(BooleanDisposable::new());
        let token = Arc::clone(&cancel);

        smol::spawn(async move {
            let sleep = async_io::Timer::after(delay);
            let cancelled = token.disposed();
            futures::pin_mut!(cancelled);

            match select(sleep, cancelled).await {
                Either::Left(_) => {
                    if !token.is_disposed() {
                        action();
                    }
                }
                Either::Right(_) => {
                    trace!("smol scheduler: timer cancelled");
                }
            }
        })
        .detach();

        Subscription::from_shared(cancel)
    }
}

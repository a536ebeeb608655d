// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pausable operator - gates values with a boolean stream.
//!
//! The gate starts open. Every `true` from the gate source opens it, every `false` closes it.
//! While closed, values from the source are dropped, not buffered. Terminal events from the
//! source always pass and tear down both subscriptions.
//!
//! The gate source's own terminal events are ignored: the gate keeps its last state and the
//! result keeps running until the source terminates or the subscription is disposed.
//!
//! # Examples
//!
//! ```rust
//! use cascade_stream::PausableExt;
//! use cascade_test_utils::{record, test_subject};
//!
//! let source = test_subject::<i32>();
//! let gate = test_subject::<bool>();
//! let (recorder, _subscription) = record(&source.clone().pausable(gate.clone()));
//!
//! source.next(1).unwrap();
//! gate.next(false).unwrap();
//! source.next(2).unwrap();
//! gate.next(true).unwrap();
//! source.next(3).unwrap();
//!
//! assert_eq!(recorder.values(), vec![1, 3]);
//! ```

use crate::logging::trace;
use cascade_core::{
    CompositeDisposable, Disposable, Observable, Observer, Signal, StreamEvent, Subscription,
};
use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Extension trait providing the `pausable` operator.
pub trait PausableExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Drops values while the latest value of `gate` is `false`.
    ///
    /// See the [module-level documentation](crate::pausable) for details.
    fn pausable<G>(self, gate: G) -> Signal<T, E>
    where
        G: Observable<Item = bool> + 'static,
        G::Error: Send + 'static;
}

impl<O, T, E> PausableExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn pausable<G>(self, gate: G) -> Signal<T, E>
    where
        G: Observable<Item = bool> + 'static,
        G::Error: Send + 'static,
    {
        let source = Arc::new(self);
        let gate = Arc::new(gate);
        Signal::new(move |observer: Observer<T, E>| {
            let open = Arc::new(AtomicBool::new(true));
            let subscriptions = Arc::new(CompositeDisposable::new());

            let switch = Arc::clone(&open);
            subscriptions.add(gate.observe(Observer::new(
                move |event: StreamEvent<bool, G::Error>| {
                    if let StreamEvent::Next(value) = event {
                        switch.store(value, Ordering::Release);
                    }
                },
            )));

            let release = Arc::clone(&subscriptions);
            subscriptions.add(source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(value) => {
                    if open.load(Ordering::Acquire) {
                        observer.next(value);
                    } else {
                        trace!("pausable: dropped value while paused");
                    }
                }
                terminal => {
                    release.dispose();
                    observer.on(terminal);
                }
            })));

            Subscription::from_shared(subscriptions)
        })
    }
}

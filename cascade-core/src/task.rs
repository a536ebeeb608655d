// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Asynchronous tasks: streams whose `Next` values are progress updates and whose outcome is
//! carried by a single terminal `Success` or `Failure`.
//!
//! A [`Task`] is an [`Observable`] like any other, so every stream operator applies to it. The
//! task-specific surface is [`Task::observe_task`], which reports [`TaskEvent`]s.
//!
//! # Example
//!
//! ```
//! use cascade_core::{CascadeError, Task, TaskEvent};
//! use std::sync::{Arc, Mutex};
//!
//! let upload = Task::<u8, CascadeError>::new(|observer| {
//!     observer.next(50);
//!     observer.next(100);
//!     observer.success();
//!     cascade_core::Subscription::empty()
//! });
//!
//! let events = Arc::new(Mutex::new(Vec::new()));
//! let sink = events.clone();
//! upload.observe_task(move |event| sink.lock().unwrap().push(event));
//!
//! let events = events.lock().unwrap();
//! assert!(matches!(events[..], [TaskEvent::Next(50), TaskEvent::Next(100), TaskEvent::Success]));
//! ```

use crate::{Observable, Observer, Signal, Subscription, TaskEvent};
use core::fmt;

/// A stream of progress values ending in `Success` or `Failure`.
pub struct Task<T, E> {
    signal: Signal<T, E>,
}

impl<T, E> Task<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Creates a task from a producer run once per subscription.
    ///
    /// The producer reports progress with `observer.next` and finishes with
    /// `observer.success()` or `observer.failure(error)`.
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn(Observer<T, E>) -> Subscription + Send + Sync + 'static,
    {
        Self {
            signal: Signal::new(producer),
        }
    }

    pub fn from_signal(signal: Signal<T, E>) -> Self {
        Self { signal }
    }

    pub fn into_signal(self) -> Signal<T, E> {
        self.signal
    }

    /// A task that succeeds immediately without progress.
    pub fn success() -> Self {
        Self::from_signal(Signal::completed())
    }

    /// A task that reports one value and succeeds.
    pub fn just(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_signal(Signal::just(value))
    }

    /// A task that fails immediately.
    pub fn failure(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::from_signal(Signal::failed(error))
    }

    /// Observes the task through its task-event reading.
    pub fn observe_task<F>(&self, on_event: F) -> Subscription
    where
        F: Fn(TaskEvent<T, E>) + Send + Sync + 'static,
    {
        self.signal
            .observe(Observer::new(move |event| on_event(event.into())))
    }
}

impl<T, E> Observable for Task<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    type Item = T;
    type Error = E;

    fn observe(&self, observer: Observer<T, E>) -> Subscription {
        self.signal.observe(observer)
    }
}

impl<T, E> From<Signal<T, E>> for Task<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn from(signal: Signal<T, E>) -> Self {
        Self::from_signal(signal)
    }
}

impl<T, E> Clone for Task<T, E> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal.clone(),
        }
    }
}

impl<T, E> fmt::Debug for Task<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").finish_non_exhaustive()
    }
}

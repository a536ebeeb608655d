// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::trace;
use crate::{StreamEvent, TaskEvent};
use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type EventHandler<T, E> = dyn Fn(StreamEvent<T, E>) + Send + Sync;

struct ObserverInner<T, E> {
    on_event: Box<EventHandler<T, E>>,
    stopped: AtomicBool,
}

/// The receiving end of a subscription.
///
/// An `Observer` wraps an event callback and enforces the stream grammar: after the first
/// terminal event, or after [`stop`](Observer::stop), every further event is dropped. Clones
/// share the same callback and the same stopped flag.
pub struct Observer<T, E> {
    inner: Arc<ObserverInner<T, E>>,
}

impl<T, E> Observer<T, E> {
    /// Creates an observer from an event callback.
    pub fn new<F>(on_event: F) -> Self
    where
        F: Fn(StreamEvent<T, E>) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(ObserverInner {
                on_event: Box::new(on_event),
                stopped: AtomicBool::new(false),
            }),
        }
    }

    /// Delivers an event unless the observer already stopped.
    pub fn on(&self, event: StreamEvent<T, E>) {
        let dropped = if event.is_terminal() {
            self.inner.stopped.swap(true, Ordering::AcqRel)
        } else {
            self.is_stopped()
        };

        if dropped {
            trace!("observer: dropping event delivered after termination");
            return;
        }

        (self.inner.on_event)(event);
    }

    pub fn next(&self, value: T) {
        self.on(StreamEvent::Next(value));
    }

    pub fn failed(&self, error: E) {
        self.on(StreamEvent::Failed(error));
    }

    pub fn completed(&self) {
        self.on(StreamEvent::Completed);
    }

    /// Delivers a task event through its stream-event mapping.
    pub fn on_task(&self, event: TaskEvent<T, E>) {
        self.on(event.into());
    }

    /// Task-flavoured alias for [`completed`](Observer::completed).
    pub fn success(&self) {
        self.completed();
    }

    /// Task-flavoured alias for [`failed`](Observer::failed).
    pub fn failure(&self, error: E) {
        self.failed(error);
    }

    /// Stops the observer without delivering anything.
    pub fn stop(&self) {
        self.inner.stopped.store(true, Ordering::Release);
    }

    /// Returns `true` after a terminal event was delivered or after [`stop`](Observer::stop).
    pub fn is_stopped(&self) -> bool {
        self.inner.stopped.load(Ordering::Acquire)
    }
}

impl<T, E> Clone for Observer<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, E> fmt::Debug for Observer<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

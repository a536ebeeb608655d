// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{Observer, StreamEvent};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects every event delivered to its observers, in delivery order.
///
/// Clones share the same log.
pub struct Recorder<T, E> {
    events: Arc<Mutex<Vec<StreamEvent<T, E>>>>,
}

impl<T, E> Recorder<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// An observer that appends to this recorder.
    #[must_use]
    pub fn observer(&self) -> Observer<T, E> {
        let events = Arc::clone(&self.events);
        Observer::new(move |event| events.lock().push(event))
    }

    /// Every event recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<StreamEvent<T, E>> {
        self.events.lock().clone()
    }

    /// The `Next` values recorded so far.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| event.as_value().cloned())
            .collect()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.events.lock().iter().any(StreamEvent::is_completed)
    }

    /// The failure, if one was recorded.
    #[must_use]
    pub fn failure(&self) -> Option<E> {
        self.events
            .lock()
            .iter()
            .find_map(|event| event.as_error().cloned())
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.events.lock().iter().any(StreamEvent::is_terminal)
    }

    /// Number of terminal events recorded. Anything above one is a grammar violation.
    #[must_use]
    pub fn terminal_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| event.is_terminal())
            .count()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl<T, E> Default for Recorder<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for Recorder<T, E> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

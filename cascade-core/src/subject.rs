// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber subject.
//!
//! A [`Subject`] broadcasts each event pushed into it to every observer registered at that
//! moment.
//!
//! ## Characteristics
//!
//! - **Hot**: Late observers do not receive past values, only events pushed after observing.
//! - **Terminal replay**: once terminated, late observers immediately receive the terminal
//!   event.
//! - **Thread-safe**: Cheap to clone; all clones share the same state.
//! - **Re-entrant**: observers are called outside the subject's lock, so an observer may
//!   dispose its own subscription or push into the subject from its callback.
//!
//! ## Example
//!
//! ```
//! use cascade_core::{CascadeError, ObservableExt, Subject};
//!
//! let subject = Subject::<i32, CascadeError>::new();
//! let subscription = subject.observe_next(|value| assert_eq!(value, 1));
//! assert_eq!(subject.subscriber_count(), 1);
//!
//! subject.next(1).unwrap();
//! subscription.dispose();
//! assert_eq!(subject.subscriber_count(), 0);
//!
//! subject.completed().unwrap();
//! assert!(subject.next(2).is_err());
//! ```

use crate::cascade_mutex::Mutex;
use crate::logging::debug;
use crate::{Observable, Observer, StreamEvent, SubjectError, Subscription};
use core::fmt;
use std::sync::{Arc, Weak};

struct SubjectState<T, E> {
    terminal: Option<StreamEvent<T, E>>,
    next_id: u64,
    observers: Vec<(u64, Observer<T, E>)>,
}

/// A hot source that can be pushed into imperatively.
pub struct Subject<T, E> {
    state: Arc<Mutex<SubjectState<T, E>>>,
}

impl<T, E> Subject<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// Creates a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                terminal: None,
                next_id: 0,
                observers: Vec::new(),
            })),
        }
    }

    /// Broadcasts an event to all current observers.
    ///
    /// A terminal event closes the subject and releases every observer.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already delivered a terminal event.
    pub fn send(&self, event: StreamEvent<T, E>) -> Result<(), SubjectError> {
        let targets = {
            let mut state = self.state.lock();
            if state.terminal.is_some() {
                debug!("subject: event pushed after close");
                return Err(SubjectError::Closed);
            }

            if event.is_terminal() {
                state.terminal = Some(event.clone());
                core::mem::take(&mut state.observers)
            } else {
                state.observers.clone()
            }
        };

        for (_, observer) in targets {
            observer.on(event.clone());
        }
        Ok(())
    }

    /// Broadcasts a value.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already delivered a terminal event.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        self.send(StreamEvent::Next(value))
    }

    /// Fails every observer and closes the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already delivered a terminal event.
    pub fn failed(&self, error: E) -> Result<(), SubjectError> {
        self.send(StreamEvent::Failed(error))
    }

    /// Completes every observer and closes the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already delivered a terminal event.
    pub fn completed(&self) -> Result<(), SubjectError> {
        self.send(StreamEvent::Completed)
    }

    /// Returns `true` once a terminal event was pushed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().terminal.is_some()
    }

    /// Returns the number of currently registered observers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().observers.len()
    }
}

impl<T, E> Observable for Subject<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    type Item = T;
    type Error = E;

    fn observe(&self, observer: Observer<T, E>) -> Subscription {
        let id = {
            let mut state = self.state.lock();
            let terminal = state.terminal.clone();
            if let Some(terminal) = terminal {
                drop(state);
                observer.on(terminal);
                return Subscription::disposed();
            }

            let id = state.next_id;
            state.next_id += 1;
            state.observers.push((id, observer));
            id
        };

        let state: Weak<Mutex<SubjectState<T, E>>> = Arc::downgrade(&self.state);
        Subscription::from_fn(move || {
            if let Some(state) = state.upgrade() {
                state.lock().observers.retain(|(existing, _)| *existing != id);
            }
        })
    }
}

impl<T, E> Default for Subject<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for Subject<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T, E> fmt::Debug for Subject<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Subject")
            .field("closed", &state.terminal.is_some())
            .field("subscribers", &state.observers.len())
            .finish()
    }
}

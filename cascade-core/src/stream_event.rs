// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A single event delivered by a stream.
///
/// `Failed` and `Completed` are terminal: once either is observed on a subscription, nothing
/// else is delivered on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent<T, E> {
    /// A value
    Next(T),
    /// The stream failed; terminal
    Failed(E),
    /// The stream finished successfully; terminal
    Completed,
}

impl<T, E> StreamEvent<T, E> {
    /// Returns `true` if this is a `Next`.
    pub const fn is_next(&self) -> bool {
        matches!(self, StreamEvent::Next(_))
    }

    /// Returns `true` for `Failed` and `Completed`.
    pub const fn is_terminal(&self) -> bool {
        !self.is_next()
    }

    /// Returns `true` if this is a `Failed`.
    pub const fn is_failed(&self) -> bool {
        matches!(self, StreamEvent::Failed(_))
    }

    /// Returns `true` if this is `Completed`.
    pub const fn is_completed(&self) -> bool {
        matches!(self, StreamEvent::Completed)
    }

    /// Converts into the carried value, discarding terminal events.
    pub fn value(self) -> Option<T> {
        match self {
            StreamEvent::Next(value) => Some(value),
            _ => None,
        }
    }

    /// Converts into the carried error, discarding everything else.
    pub fn error(self) -> Option<E> {
        match self {
            StreamEvent::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub const fn as_value(&self) -> Option<&T> {
        match self {
            StreamEvent::Next(value) => Some(value),
            _ => None,
        }
    }

    pub const fn as_error(&self) -> Option<&E> {
        match self {
            StreamEvent::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Maps the value of a `Next`, terminal events are carried over unchanged.
    pub fn map<U, F>(self, f: F) -> StreamEvent<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            StreamEvent::Next(value) => StreamEvent::Next(f(value)),
            StreamEvent::Failed(error) => StreamEvent::Failed(error),
            StreamEvent::Completed => StreamEvent::Completed,
        }
    }

    /// Maps the error of a `Failed`.
    pub fn map_err<F2, F>(self, f: F) -> StreamEvent<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            StreamEvent::Next(value) => StreamEvent::Next(value),
            StreamEvent::Failed(error) => StreamEvent::Failed(f(error)),
            StreamEvent::Completed => StreamEvent::Completed,
        }
    }

    /// Re-types a terminal event. Returns the value back for a `Next`.
    pub fn into_terminal<U>(self) -> Result<StreamEvent<U, E>, T> {
        match self {
            StreamEvent::Next(value) => Err(value),
            StreamEvent::Failed(error) => Ok(StreamEvent::Failed(error)),
            StreamEvent::Completed => Ok(StreamEvent::Completed),
        }
    }
}

impl<T, E> From<Result<T, E>> for StreamEvent<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => StreamEvent::Next(value),
            Err(error) => StreamEvent::Failed(error),
        }
    }
}

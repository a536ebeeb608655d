// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::StreamEvent;

/// An event delivered by a [`Task`](crate::Task).
///
/// `Next` values are progress updates. The outcome of the task is carried only by the terminal
/// case: `Success` (no value) or `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent<T, E> {
    /// A progress value
    Next(T),
    /// The task finished successfully; terminal
    Success,
    /// The task failed; terminal
    Failure(E),
}

impl<T, E> TaskEvent<T, E> {
    /// Returns `true` for `Success` and `Failure`.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, TaskEvent::Next(_))
    }

    /// Returns `true` if this is `Success`.
    pub const fn is_success(&self) -> bool {
        matches!(self, TaskEvent::Success)
    }

    /// Returns `true` if this is a `Failure`.
    pub const fn is_failure(&self) -> bool {
        matches!(self, TaskEvent::Failure(_))
    }

    /// Maps the progress value, terminal events are carried over unchanged.
    pub fn map<U, F>(self, f: F) -> TaskEvent<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            TaskEvent::Next(value) => TaskEvent::Next(f(value)),
            TaskEvent::Success => TaskEvent::Success,
            TaskEvent::Failure(error) => TaskEvent::Failure(error),
        }
    }
}

impl<T, E> From<StreamEvent<T, E>> for TaskEvent<T, E> {
    fn from(event: StreamEvent<T, E>) -> Self {
        match event {
            StreamEvent::Next(value) => TaskEvent::Next(value),
            StreamEvent::Failed(error) => TaskEvent::Failure(error),
            StreamEvent::Completed => TaskEvent::Success,
        }
    }
}

impl<T, E> From<TaskEvent<T, E>> for StreamEvent<T, E> {
    fn from(event: TaskEvent<T, E>) -> Self {
        match event {
            TaskEvent::Next(value) => StreamEvent::Next(value),
            TaskEvent::Failure(error) => StreamEvent::Failed(error),
            TaskEvent::Success => StreamEvent::Completed,
        }
    }
}

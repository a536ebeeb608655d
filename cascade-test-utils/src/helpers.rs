// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recorder::Recorder;
use cascade_core::{
    CascadeError, EventStream, Observable, ObservableExt, StreamEvent, Subject, Subscription, Task,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::timeout;

/// Subscribes a fresh [`Recorder`] to `source`.
pub fn record<O>(source: &O) -> (Recorder<O::Item, O::Error>, Subscription)
where
    O: Observable,
    O::Item: Clone + Send + 'static,
    O::Error: Clone + Send + 'static,
{
    let recorder = Recorder::new();
    let subscription = source.observe(recorder.observer());
    (recorder, subscription)
}

/// A hot source failing with [`CascadeError`].
#[must_use]
pub fn test_subject<T>() -> Subject<T, CascadeError>
where
    T: Clone + Send + 'static,
{
    Subject::new()
}

/// Reads a subject as a task, so a test can drive an inner task by hand.
pub fn subject_task<T>(subject: &Subject<T, CascadeError>) -> Task<T, CascadeError>
where
    T: Clone + Send + 'static,
{
    Task::from_signal(subject.clone().into_signal())
}

/// Waits up to `timeout_ms` for the next event, panicking if none arrives.
pub async fn unwrap_event<T, E>(stream: &mut EventStream<T, E>, timeout_ms: u64) -> StreamEvent<T, E> {
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(event)) => event,
        Ok(None) => panic!("Event stream ended, expected an event"),
        Err(_) => panic!("No event emitted within {timeout_ms}ms"),
    }
}

/// Asserts that no event arrives within `timeout_ms`.
pub async fn assert_no_event_emitted<T, E>(stream: &mut EventStream<T, E>, timeout_ms: u64) {
    if let Ok(Some(_)) = timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        panic!("Unexpected event emitted, expected no output.");
    }
}

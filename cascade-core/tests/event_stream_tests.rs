// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{IntoEventStream, StreamEvent, Subject};
use futures::StreamExt;

#[tokio::test]
async fn test_event_stream_yields_events_until_terminal() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32, String>::new();
    let mut events = subject.clone().into_event_stream();

    // Act
    subject.next(1)?;
    subject.failed("boom".to_string())?;

    // Assert
    assert_eq!(events.next().await, Some(StreamEvent::Next(1)));
    assert_eq!(events.next().await, Some(StreamEvent::Failed("boom".to_string())));
    assert_eq!(events.next().await, None);

    Ok(())
}

#[tokio::test]
async fn test_dropping_event_stream_unsubscribes() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32, String>::new();
    let events = subject.clone().into_event_stream();
    assert_eq!(subject.subscriber_count(), 1);

    // Act
    drop(events);

    // Assert
    assert_eq!(subject.subscriber_count(), 0);

    Ok(())
}

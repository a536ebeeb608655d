// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use cascade_core::{IntoEventStream, StreamEvent};
use cascade_runtime::TokioScheduler;
use cascade_stream_time::DebounceExt;
use cascade_test_utils::helpers::{assert_no_event_emitted, unwrap_event};
use cascade_test_utils::test_subject;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_debounce_on_tokio_scheduler() -> anyhow::Result<()> {
    // Arrange
    let source = test_subject::<i32>();
    let mut events = source
        .clone()
        .debounce(Duration::from_millis(200), TokioScheduler)
        .into_event_stream();

    // Act
    source.next(1)?;
    source.next(2)?;

    // Assert
    assert_no_event_emitted(&mut events, 100).await;
    assert_eq!(unwrap_event(&mut events, 500).await, StreamEvent::Next(2));

    Ok(())
}

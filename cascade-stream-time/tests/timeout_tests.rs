// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{CascadeError, Signal};
use cascade_stream_time::TimeoutExt;
use cascade_test_utils::{record, test_subject, TestScheduler};
use std::time::Duration;

const INTERVAL: Duration = Duration::from_millis(100);

fn timeout_error() -> CascadeError {
    CascadeError::timeout_error("no heartbeat")
}

#[test]
fn test_timeout_fails_when_source_stays_silent() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TestScheduler::new();
    let source = test_subject::<i32>();
    let guarded = source
        .clone()
        .timeout(INTERVAL, scheduler.clone(), timeout_error());
    let (recorder, _subscription) = record(&guarded);

    // Act
    scheduler.advance(Duration::from_millis(99));
    assert!(recorder.events().is_empty());
    scheduler.advance(Duration::from_millis(1));

    // Assert
    assert!(recorder.failure().is_some_and(|error| error.is_timeout()));
    assert_eq!(source.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_timeout_window_restarts_after_each_value() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TestScheduler::new();
    let source = test_subject::<i32>();
    let guarded = source
        .clone()
        .timeout(INTERVAL, scheduler.clone(), timeout_error());
    let (recorder, _subscription) = record(&guarded);

    // Act
    scheduler.advance(Duration::from_millis(80));
    source.next(1)?;
    scheduler.advance(Duration::from_millis(80));
    source.next(2)?;
    scheduler.advance(Duration::from_millis(80));

    // Assert
    assert_eq!(recorder.values(), vec![1, 2]);
    assert!(!recorder.is_terminated());

    scheduler.advance(Duration::from_millis(20));
    assert!(recorder.failure().is_some());
    assert_eq!(recorder.terminal_count(), 1);

    Ok(())
}

#[test]
fn test_timeout_completion_cancels_timer() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TestScheduler::new();
    let source = test_subject::<i32>();
    let guarded = source
        .clone()
        .timeout(INTERVAL, scheduler.clone(), timeout_error());
    let (recorder, _subscription) = record(&guarded);

    // Act
    source.next(1)?;
    source.completed()?;
    scheduler.advance(INTERVAL * 2);

    // Assert
    assert!(recorder.is_completed());
    assert!(recorder.failure().is_none());
    assert_eq!(scheduler.pending_count(), 0);

    Ok(())
}

#[test]
fn test_timeout_synchronous_source_never_times_out() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TestScheduler::new();
    let source = Signal::<i32, CascadeError>::sequence([1, 2, 3]);

    // Act
    let (recorder, _subscription) =
        record(&source.timeout(INTERVAL, scheduler.clone(), timeout_error()));
    scheduler.advance(INTERVAL);

    // Assert
    assert_eq!(recorder.values(), vec![1, 2, 3]);
    assert!(recorder.is_completed());
    assert_eq!(scheduler.pending_count(), 0);

    Ok(())
}

#[test]
fn test_timeout_dispose_cancels_timer() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TestScheduler::new();
    let source = test_subject::<i32>();
    let guarded = source
        .clone()
        .timeout(INTERVAL, scheduler.clone(), timeout_error());
    let (recorder, subscription) = record(&guarded);

    // Act
    subscription.dispose();
    scheduler.advance(INTERVAL);

    // Assert
    assert!(recorder.events().is_empty());
    assert_eq!(scheduler.pending_count(), 0);

    Ok(())
}

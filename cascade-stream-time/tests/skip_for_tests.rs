// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_stream_time::SkipForExt;
use cascade_test_utils::{record, test_subject, TestScheduler};
use std::time::Duration;

#[test]
fn test_skip_for_drops_values_during_warmup() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TestScheduler::new();
    let source = test_subject::<i32>();
    let skipped = source
        .clone()
        .skip_for(Duration::from_millis(200), scheduler.clone());
    let (recorder, _subscription) = record(&skipped);

    // Act
    source.next(1)?;
    scheduler.advance(Duration::from_millis(200));
    source.next(2)?;
    scheduler.advance(Duration::from_millis(1));
    source.next(3)?;

    // Assert
    assert_eq!(recorder.values(), vec![3]);

    Ok(())
}

#[test]
fn test_skip_for_window_starts_at_subscription() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TestScheduler::new();
    let source = test_subject::<i32>();
    let skipped = source
        .clone()
        .skip_for(Duration::from_millis(100), scheduler.clone());
    scheduler.advance(Duration::from_millis(500));
    let (recorder, _subscription) = record(&skipped);

    // Act
    source.next(1)?;
    scheduler.advance(Duration::from_millis(101));
    source.next(2)?;

    // Assert
    assert_eq!(recorder.values(), vec![2]);

    Ok(())
}

#[test]
fn test_skip_for_forwards_completion_during_warmup() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TestScheduler::new();
    let source = test_subject::<i32>();
    let skipped = source
        .clone()
        .skip_for(Duration::from_millis(100), scheduler.clone());
    let (recorder, _subscription) = record(&skipped);

    // Act
    source.next(1)?;
    source.completed()?;

    // Assert
    assert!(recorder.values().is_empty());
    assert!(recorder.is_completed());

    Ok(())
}

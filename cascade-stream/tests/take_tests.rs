// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{CascadeError, Signal, StreamEvent};
use cascade_stream::prelude::*;
use cascade_test_utils::test_data::{person_alice, person_bob, person_charlie};
use cascade_test_utils::{record, test_subject};

#[test]
fn test_take_forwards_first_n_then_completes() -> anyhow::Result<()> {
    // Arrange
    let subject = test_subject();
    let (recorder, _subscription) = record(&subject.clone().take(2));

    // Act
    subject.next(person_alice())?;
    subject.next(person_bob())?;

    // Assert
    assert_eq!(recorder.values(), vec![person_alice(), person_bob()]);
    assert!(recorder.is_completed());
    assert_eq!(subject.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_take_more_than_available_forwards_all() -> anyhow::Result<()> {
    // Arrange
    let source = Signal::<i32, CascadeError>::sequence([1, 2, 3]);

    // Act
    let (recorder, _subscription) = record(&source.take(10));

    // Assert
    assert_eq!(recorder.values(), vec![1, 2, 3]);
    assert_eq!(recorder.terminal_count(), 1);

    Ok(())
}

#[test]
fn test_take_ignores_rest_of_synchronous_source() -> anyhow::Result<()> {
    // Arrange
    let source = Signal::<i32, CascadeError>::sequence(0..1000);

    // Act
    let (recorder, _subscription) = record(&source.take(3));

    // Assert
    assert_eq!(recorder.values(), vec![0, 1, 2]);
    assert_eq!(recorder.events().len(), 4);
    assert_eq!(recorder.terminal_count(), 1);

    Ok(())
}

#[test]
fn test_take_zero_completes_without_subscribing() -> anyhow::Result<()> {
    // Arrange
    let subject = test_subject::<i32>();

    // Act
    let (recorder, _subscription) = record(&subject.clone().take(0));

    // Assert
    assert_eq!(recorder.events(), vec![StreamEvent::Completed]);
    assert_eq!(subject.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_take_forwards_failure() -> anyhow::Result<()> {
    // Arrange
    let subject = test_subject::<i32>();
    let (recorder, _subscription) = record(&subject.clone().take(5));

    // Act
    subject.next(1)?;
    subject.failed(CascadeError::stream_error("boom"))?;

    // Assert
    assert_eq!(recorder.values(), vec![1]);
    assert!(recorder.failure().is_some());

    Ok(())
}

#[test]
fn test_first_takes_one() -> anyhow::Result<()> {
    // Arrange
    let source = Signal::<i32, CascadeError>::sequence([7, 8, 9]);

    // Act
    let (recorder, _subscription) = record(&source.first());

    // Assert
    assert_eq!(recorder.values(), vec![7]);
    assert!(recorder.is_completed());

    Ok(())
}

#[test]
fn test_take_last_flushes_on_completion_in_order() -> anyhow::Result<()> {
    // Arrange
    let subject = test_subject();
    let (recorder, _subscription) = record(&subject.clone().take_last(2));

    // Act
    subject.next(person_alice())?;
    subject.next(person_bob())?;
    subject.next(person_charlie())?;
    assert!(recorder.values().is_empty());
    subject.completed()?;

    // Assert
    assert_eq!(recorder.values(), vec![person_bob(), person_charlie()]);
    assert!(recorder.is_completed());

    Ok(())
}

#[test]
fn test_take_last_does_not_flush_on_failure() -> anyhow::Result<()> {
    // Arrange
    let subject = test_subject::<i32>();
    let (recorder, _subscription) = record(&subject.clone().take_last(2));

    // Act
    subject.next(1)?;
    subject.failed(CascadeError::stream_error("boom"))?;

    // Assert
    assert!(recorder.values().is_empty());
    assert!(recorder.failure().is_some());

    Ok(())
}

#[test]
fn test_last_emits_final_value() -> anyhow::Result<()> {
    // Arrange
    let source = Signal::<i32, CascadeError>::sequence([1, 2, 3]);

    // Act
    let (recorder, _subscription) = record(&source.last());

    // Assert
    assert_eq!(recorder.values(), vec![3]);

    Ok(())
}

#[test]
fn test_take_last_then_skip_same_count_is_empty() -> anyhow::Result<()> {
    for (len, n) in [(3usize, 3usize), (5, 2), (10, 7), (4, 0)] {
        // Arrange
        let source = Signal::<usize, CascadeError>::sequence(0..len);

        // Act
        let (recorder, _subscription) = record(&source.take_last(n).skip(n));

        // Assert
        assert!(recorder.values().is_empty(), "len={len} n={n}");
        assert!(recorder.is_completed());
    }

    Ok(())
}

#[test]
fn test_take_until_completes_when_notifier_emits() -> anyhow::Result<()> {
    // Arrange
    let source = test_subject::<i32>();
    let notifier = test_subject::<()>();
    let (recorder, _subscription) = record(&source.clone().take_until(notifier.clone()));

    // Act
    source.next(1)?;
    notifier.next(())?;
    let _ = source.next(2);

    // Assert
    assert_eq!(recorder.values(), vec![1]);
    assert!(recorder.is_completed());
    assert_eq!(source.subscriber_count(), 0);
    assert_eq!(notifier.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_take_until_completes_when_notifier_completes() -> anyhow::Result<()> {
    // Arrange
    let source = test_subject::<i32>();
    let notifier = test_subject::<()>();
    let (recorder, _subscription) = record(&source.clone().take_until(notifier.clone()));

    // Act
    notifier.completed()?;

    // Assert
    assert!(recorder.is_completed());
    assert_eq!(source.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_take_until_completes_when_notifier_fails() -> anyhow::Result<()> {
    // Arrange
    let source = test_subject::<i32>();
    let notifier = test_subject::<()>();
    let (recorder, _subscription) = record(&source.clone().take_until(notifier.clone()));

    // Act
    source.next(1)?;
    notifier.failed(CascadeError::stream_error("notifier down"))?;

    // Assert
    assert_eq!(
        recorder.events(),
        vec![StreamEvent::Next(1), StreamEvent::Completed]
    );
    assert!(recorder.failure().is_none());
    assert_eq!(source.subscriber_count(), 0);
    assert_eq!(notifier.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_take_until_releases_notifier_when_source_ends() -> anyhow::Result<()> {
    // Arrange
    let source = test_subject::<i32>();
    let notifier = test_subject::<()>();
    let (recorder, _subscription) = record(&source.clone().take_until(notifier.clone()));

    // Act
    source.failed(CascadeError::stream_error("boom"))?;

    // Assert
    assert!(recorder.failure().is_some());
    assert_eq!(notifier.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_take_until_with_immediate_notifier_never_observes_source() -> anyhow::Result<()> {
    // Arrange
    let source = test_subject::<i32>();
    let notifier = Signal::<(), CascadeError>::just(());

    // Act
    let (recorder, _subscription) = record(&source.clone().take_until(notifier));

    // Assert
    assert_eq!(recorder.events(), vec![StreamEvent::Completed]);
    assert_eq!(source.subscriber_count(), 0);

    Ok(())
}

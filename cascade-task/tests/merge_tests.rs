// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{CascadeError, Signal, StreamEvent, Task};
use cascade_task::MergeExt;
use cascade_test_utils::test_data::{person_alice, person_bob, person_charlie};
use cascade_test_utils::{record, subject_task, test_subject};

#[test]
fn test_merge_forwards_inner_values_as_they_arrive() -> anyhow::Result<()> {
    // Arrange
    let outer = test_subject();
    let first = test_subject();
    let second = test_subject();
    let (recorder, _subscription) = record(&outer.clone().merge());

    // Act
    outer.next(subject_task(&first))?;
    outer.next(subject_task(&second))?;
    second.next(person_bob())?;
    first.next(person_alice())?;
    second.next(person_charlie())?;

    // Assert
    assert_eq!(
        recorder.values(),
        vec![person_bob(), person_alice(), person_charlie()]
    );
    assert!(!recorder.is_terminated());

    Ok(())
}

#[test]
fn test_merge_succeeds_after_outer_and_all_inner_complete() -> anyhow::Result<()> {
    // Arrange
    let outer = test_subject();
    let first = test_subject::<i32>();
    let second = test_subject::<i32>();
    let (recorder, _subscription) = record(&outer.clone().merge());

    // Act
    outer.next(subject_task(&first))?;
    outer.next(subject_task(&second))?;
    outer.completed()?;
    first.completed()?;

    // Assert
    assert!(!recorder.is_terminated());

    second.completed()?;
    assert!(recorder.is_completed());
    assert_eq!(recorder.terminal_count(), 1);

    Ok(())
}

#[test]
fn test_merge_succeeds_immediately_when_nothing_is_active() -> anyhow::Result<()> {
    // Arrange
    let outer = test_subject::<Task<i32, CascadeError>>();
    let (recorder, _subscription) = record(&outer.clone().merge());

    // Act
    outer.next(Task::just(1))?;
    outer.completed()?;

    // Assert
    assert_eq!(
        recorder.events(),
        vec![StreamEvent::Next(1), StreamEvent::Completed]
    );

    Ok(())
}

#[test]
fn test_merge_inner_failure_fails_immediately_without_late_success() -> anyhow::Result<()> {
    // Arrange
    let outer = test_subject();
    let healthy = test_subject::<i32>();
    let failing = test_subject::<i32>();
    let (recorder, _subscription) = record(&outer.clone().merge());
    outer.next(subject_task(&healthy))?;
    outer.next(subject_task(&failing))?;

    // Act
    failing.failed(CascadeError::stream_error("disk full"))?;
    outer.completed()?;

    // Assert
    assert_eq!(
        recorder.failure(),
        Some(CascadeError::stream_error("disk full"))
    );
    assert_eq!(recorder.terminal_count(), 1);
    assert_eq!(healthy.subscriber_count(), 0);
    assert_eq!(outer.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_merge_outer_failure_disposes_inner_tasks() -> anyhow::Result<()> {
    // Arrange
    let outer = test_subject();
    let inner = test_subject::<i32>();
    let (recorder, _subscription) = record(&outer.clone().merge());
    outer.next(subject_task(&inner))?;

    // Act
    outer.failed(CascadeError::stream_error("outer"))?;
    inner.next(1)?;

    // Assert
    assert!(recorder.values().is_empty());
    assert!(recorder.failure().is_some());
    assert_eq!(inner.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_merge_synchronous_inner_tasks() -> anyhow::Result<()> {
    // Arrange
    let outer = Signal::<Task<i32, CascadeError>, CascadeError>::sequence([
        Task::just(1),
        Task::success(),
        Task::just(2),
    ]);

    // Act
    let (recorder, _subscription) = record(&outer.merge());

    // Assert
    assert_eq!(recorder.values(), vec![1, 2]);
    assert!(recorder.is_completed());

    Ok(())
}

#[test]
fn test_merge_dispose_releases_all_subscriptions() -> anyhow::Result<()> {
    // Arrange
    let outer = test_subject();
    let first = test_subject::<i32>();
    let second = test_subject::<i32>();
    let (recorder, subscription) = record(&outer.clone().merge());
    outer.next(subject_task(&first))?;
    outer.next(subject_task(&second))?;

    // Act
    subscription.dispose();
    first.next(1)?;

    // Assert
    assert!(recorder.events().is_empty());
    assert_eq!(outer.subscriber_count(), 0);
    assert_eq!(first.subscriber_count(), 0);
    assert_eq!(second.subscriber_count(), 0);

    Ok(())
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{Observable, ObservableExt, Observer, StreamEvent, Subject, SubjectError};
use parking_lot::Mutex;
use std::sync::Arc;

type Log = Arc<Mutex<Vec<StreamEvent<i32, String>>>>;

fn observe(subject: &Subject<i32, String>) -> (Log, cascade_core::Subscription) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    let subscription = subject.observe(Observer::new(move |event| sink.lock().push(event)));
    (log, subscription)
}

#[test]
fn test_broadcasts_to_multiple_subscribers() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32, String>::new();
    let (a, _sa) = observe(&subject);
    let (b, _sb) = observe(&subject);

    // Act
    subject.next(1)?;

    // Assert
    assert_eq!(*a.lock(), vec![StreamEvent::Next(1)]);
    assert_eq!(*b.lock(), vec![StreamEvent::Next(1)]);

    Ok(())
}

#[test]
fn test_failure_is_propagated_and_closes() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32, String>::new();
    let (log, _subscription) = observe(&subject);

    // Act
    subject.failed("boom".to_string())?;

    // Assert
    assert_eq!(*log.lock(), vec![StreamEvent::Failed("boom".to_string())]);
    assert!(subject.is_closed());
    assert_eq!(subject.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_send_after_close_returns_error() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32, String>::new();
    subject.completed()?;

    // Act
    let result = subject.next(1);

    // Assert
    assert_eq!(result, Err(SubjectError::Closed));

    Ok(())
}

#[test]
fn test_late_observer_receives_terminal_replay() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32, String>::new();
    subject.next(1)?;
    subject.completed()?;

    // Act
    let (log, subscription) = observe(&subject);

    // Assert
    assert_eq!(*log.lock(), vec![StreamEvent::Completed]);
    assert!(subscription.is_disposed());

    Ok(())
}

#[test]
fn test_dispose_unregisters_observer() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32, String>::new();
    let (log, subscription) = observe(&subject);
    let (_other, _keep) = observe(&subject);
    assert_eq!(subject.subscriber_count(), 2);

    // Act
    subscription.dispose();
    subject.next(1)?;

    // Assert
    assert_eq!(subject.subscriber_count(), 1);
    assert!(log.lock().is_empty());

    Ok(())
}

#[test]
fn test_observer_may_dispose_itself_during_delivery() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32, String>::new();
    let slot: Arc<Mutex<Option<cascade_core::Subscription>>> = Arc::new(Mutex::new(None));
    let handle = slot.clone();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let subscription = subject.observe_next(move |value| {
        sink.lock().push(value);
        if let Some(subscription) = handle.lock().take() {
            subscription.dispose();
        }
    });
    *slot.lock() = Some(subscription);

    // Act
    subject.next(1)?;
    subject.next(2)?;

    // Assert
    assert_eq!(*seen.lock(), vec![1]);
    assert_eq!(subject.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_observer_may_push_reentrantly() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32, String>::new();
    let feedback = subject.clone();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _subscription = subject.observe_next(move |value| {
        sink.lock().push(value);
        if value < 3 {
            let _ = feedback.next(value + 1);
        }
    });

    // Act
    subject.next(1)?;

    // Assert
    assert_eq!(*seen.lock(), vec![1, 2, 3]);

    Ok(())
}

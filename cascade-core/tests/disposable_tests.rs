// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{
    ActionDisposable, BooleanDisposable, CompositeDisposable, Disposable, SerialDisposable,
    Subscription,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn counting_subscription() -> (Subscription, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let sink = count.clone();
    let subscription = Subscription::from_fn(move || {
        sink.fetch_add(1, Ordering::SeqCst);
    });
    (subscription, count)
}

#[test]
fn test_action_runs_exactly_once() -> anyhow::Result<()> {
    // Arrange
    let (subscription, count) = counting_subscription();

    // Act
    subscription.dispose();
    subscription.dispose();
    subscription.clone().dispose();

    // Assert
    assert!(subscription.is_disposed());
    assert_eq!(count.load(Ordering::SeqCst), 1);

    Ok(())
}

#[test]
fn test_action_disposable_reports_state() -> anyhow::Result<()> {
    // Arrange
    let disposable = ActionDisposable::new(|| {});

    // Act
    let before = disposable.is_disposed();
    disposable.dispose();

    // Assert
    assert!(!before);
    assert!(disposable.is_disposed());

    Ok(())
}

#[test]
fn test_guard_disposes_on_drop() -> anyhow::Result<()> {
    // Arrange
    let (subscription, count) = counting_subscription();

    // Act
    {
        let _guard = subscription.clone().guard();
    }

    // Assert
    assert!(subscription.is_disposed());
    assert_eq!(count.load(Ordering::SeqCst), 1);

    Ok(())
}

#[test]
fn test_composite_disposes_all_children() -> anyhow::Result<()> {
    // Arrange
    let composite = CompositeDisposable::new();
    let (first, first_count) = counting_subscription();
    let (second, second_count) = counting_subscription();
    composite.add(first);
    composite.add(second);
    assert_eq!(composite.len(), 2);

    // Act
    composite.dispose();
    composite.dispose();

    // Assert
    assert!(composite.is_disposed());
    assert_eq!(first_count.load(Ordering::SeqCst), 1);
    assert_eq!(second_count.load(Ordering::SeqCst), 1);

    Ok(())
}

#[test]
fn test_composite_disposes_late_child_immediately() -> anyhow::Result<()> {
    // Arrange
    let composite = CompositeDisposable::new();
    composite.dispose();
    let (late, count) = counting_subscription();

    // Act
    composite.add(late.clone());

    // Assert
    assert!(late.is_disposed());
    assert_eq!(count.load(Ordering::SeqCst), 1);

    Ok(())
}

#[test]
fn test_composite_prunes_disposed_children() -> anyhow::Result<()> {
    // Arrange
    let composite = CompositeDisposable::new();
    let finished = Subscription::empty();
    composite.add(finished.clone());
    finished.dispose();

    // Act
    composite.add(Subscription::empty());

    // Assert
    assert_eq!(composite.len(), 1);

    Ok(())
}

#[test]
fn test_child_may_reenter_parent_while_disposed() -> anyhow::Result<()> {
    // Arrange
    let composite = Arc::new(CompositeDisposable::new());
    let parent = composite.clone();
    composite.add(Subscription::from_fn(move || {
        // Re-entering must not deadlock
        let _ = parent.len();
    }));

    // Act
    composite.dispose();

    // Assert
    assert!(composite.is_empty());

    Ok(())
}

#[test]
fn test_serial_disposes_outgoing_child() -> anyhow::Result<()> {
    // Arrange
    let serial = SerialDisposable::new();
    let (first, first_count) = counting_subscription();
    let (second, second_count) = counting_subscription();

    // Act
    serial.set(first);
    serial.set(second);

    // Assert
    assert_eq!(first_count.load(Ordering::SeqCst), 1);
    assert_eq!(second_count.load(Ordering::SeqCst), 0);

    serial.dispose();
    assert_eq!(second_count.load(Ordering::SeqCst), 1);

    Ok(())
}

#[test]
fn test_serial_disposes_incoming_child_when_disposed() -> anyhow::Result<()> {
    // Arrange
    let serial = SerialDisposable::new();
    serial.dispose();
    let (incoming, count) = counting_subscription();

    // Act
    serial.set(incoming);

    // Assert
    assert_eq!(count.load(Ordering::SeqCst), 1);

    Ok(())
}

#[test]
fn test_serial_clear_keeps_handle_usable() -> anyhow::Result<()> {
    // Arrange
    let serial = SerialDisposable::new();
    let (first, first_count) = counting_subscription();
    serial.set(first);

    // Act
    serial.clear();
    let (second, second_count) = counting_subscription();
    serial.set(second);

    // Assert
    assert!(!serial.is_disposed());
    assert_eq!(first_count.load(Ordering::SeqCst), 1);
    assert_eq!(second_count.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test]
async fn test_boolean_disposable_wakes_waiter() -> anyhow::Result<()> {
    // Arrange
    let flag = Arc::new(BooleanDisposable::new());
    let waiter = flag.clone();
    let handle = tokio::spawn(async move {
        waiter.disposed().await;
    });

    // Act
    tokio::task::yield_now().await;
    flag.dispose();

    // Assert
    handle.await?;
    assert!(flag.is_disposed());

    Ok(())
}

#[tokio::test]
async fn test_boolean_disposable_resolves_when_already_disposed() -> anyhow::Result<()> {
    // Arrange
    let flag = BooleanDisposable::new();
    flag.dispose();

    // Act & Assert
    flag.disposed().await;

    Ok(())
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use cascade_runtime::{Scheduler, TokioScheduler};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::sleep;

fn counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    (count.clone(), count)
}

#[tokio::test(start_paused = true)]
async fn test_schedule_after_runs_action_once_delay_elapsed() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler;
    let (fired, sink) = counter();

    // Act
    let _timer = scheduler.schedule_after(
        Duration::from_millis(100),
        Box::new(move || {
            sink.fetch_add(1, Ordering::SeqCst);
        }),
    );
    yield_now().await;

    // Assert
    sleep(Duration::from_millis(50)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    sleep(Duration::from_millis(100)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_disposed_timer_never_fires() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler;
    let (fired, sink) = counter();
    let timer = scheduler.schedule_after(
        Duration::from_millis(100),
        Box::new(move || {
            sink.fetch_add(1, Ordering::SeqCst);
        }),
    );
    yield_now().await;

    // Act
    sleep(Duration::from_millis(50)).await;
    timer.dispose();
    sleep(Duration::from_millis(200)).await;

    // Assert
    assert!(timer.is_disposed());
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_schedule_periodic_ticks_until_disposed() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler;
    let (ticks, sink) = counter();

    // Act
    let periodic = scheduler.schedule_periodic(Duration::from_millis(100), move || {
        sink.fetch_add(1, Ordering::SeqCst);
    });
    yield_now().await;
    sleep(Duration::from_millis(350)).await;
    periodic.dispose();
    sleep(Duration::from_millis(500)).await;

    // Assert
    assert_eq!(ticks.load(Ordering::SeqCst), 3);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_now_follows_tokio_clock() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler;
    let start = scheduler.now();

    // Act
    sleep(Duration::from_millis(250)).await;

    // Assert
    assert!(scheduler.now() - start >= Duration::from_millis(250));

    Ok(())
}

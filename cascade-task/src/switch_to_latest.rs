// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::debug;
use cascade_core::cascade_mutex::Mutex;
use cascade_core::{
    CompositeDisposable, Disposable, Observable, Observer, SerialDisposable, StreamEvent,
    Subscription, Task,
};
use std::sync::Arc;

#[derive(Default)]
struct SwitchState {
    generation: u64,
    inner_active: bool,
    outer_completed: bool,
    terminated: bool,
}

impl SwitchState {
    fn is_current(&self, generation: u64) -> bool {
        !self.terminated && self.generation == generation
    }
}

/// Extension trait providing the `switch_to_latest` flattening strategy.
pub trait SwitchToLatestExt<I, T, E>: Observable<Item = I, Error = E> + Sized
where
    I: Observable<Item = T, Error = E>,
{
    /// Follows only the most recent inner task.
    ///
    /// Each inner task emitted by the outer stream disposes the previously active one before
    /// it is observed, so values from a superseded task never reach downstream. The result
    /// succeeds when the outer stream completed and the active inner task succeeded. Any
    /// failure, outer or from the active inner task, fails the result immediately.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cascade_core::{CascadeError, ObservableExt, Task};
    /// use cascade_task::SwitchToLatestExt;
    /// use cascade_test_utils::{record, test_subject};
    ///
    /// let queries = test_subject::<Task<&'static str, CascadeError>>();
    /// let first = test_subject::<&'static str>();
    /// let second = test_subject::<&'static str>();
    /// let (recorder, _subscription) = record(&queries.clone().switch_to_latest());
    ///
    /// queries.next(Task::from_signal(first.clone().into_signal())).unwrap();
    /// queries.next(Task::from_signal(second.clone().into_signal())).unwrap();
    /// first.next("stale").unwrap();
    /// second.next("fresh").unwrap();
    ///
    /// assert_eq!(recorder.values(), vec!["fresh"]);
    /// ```
    fn switch_to_latest(self) -> Task<T, E>;
}

impl<O, I, T, E> SwitchToLatestExt<I, T, E> for O
where
    O: Observable<Item = I, Error = E> + 'static,
    I: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn switch_to_latest(self) -> Task<T, E> {
        let source = Arc::new(self);
        Task::new(move |observer: Observer<T, E>| {
            let state = Arc::new(Mutex::new(SwitchState::default()));
            let current = Arc::new(SerialDisposable::new());
            let subscriptions = Arc::new(CompositeDisposable::new());
            subscriptions.add(Subscription::from_shared(Arc::clone(&current)));

            let release = Arc::clone(&subscriptions);
            let outer = source.observe(Observer::new(move |event: StreamEvent<I, E>| match event {
                StreamEvent::Next(inner) => {
                    let (generation, superseded) = {
                        let mut state = state.lock();
                        if state.terminated {
                            return;
                        }
                        state.generation += 1;
                        let superseded = core::mem::replace(&mut state.inner_active, true);
                        (state.generation, superseded)
                    };
                    if superseded {
                        debug!("switch_to_latest: newer inner task supersedes the active one");
                    }

                    let slot = Arc::new(SerialDisposable::new());
                    current.set(Subscription::from_shared(Arc::clone(&slot)));

                    let state = Arc::clone(&state);
                    let release = Arc::clone(&release);
                    let observer = observer.clone();
                    slot.set(inner.observe(Observer::new(move |event| match event {
                        StreamEvent::Next(value) => {
                            let current = state.lock().is_current(generation);
                            if current {
                                observer.next(value);
                            }
                        }
                        StreamEvent::Completed => {
                            let succeeded = {
                                let mut state = state.lock();
                                if !state.is_current(generation) {
                                    return;
                                }
                                state.inner_active = false;
                                state.terminated = state.outer_completed;
                                state.terminated
                            };
                            if succeeded {
                                release.dispose();
                                observer.completed();
                            }
                        }
                        StreamEvent::Failed(error) => {
                            let failed = {
                                let mut state = state.lock();
                                let current = state.is_current(generation);
                                state.terminated |= current;
                                current
                            };
                            if failed {
                                debug!("switch_to_latest: inner failure fails the result");
                                release.dispose();
                                observer.failed(error);
                            }
                        }
                    })));
                }
                StreamEvent::Completed => {
                    let succeeded = {
                        let mut state = state.lock();
                        state.outer_completed = true;
                        let succeeded = !state.terminated && !state.inner_active;
                        state.terminated |= succeeded;
                        succeeded
                    };
                    if succeeded {
                        release.dispose();
                        observer.completed();
                    }
                }
                StreamEvent::Failed(error) => {
                    let failed = !core::mem::replace(&mut state.lock().terminated, true);
                    if failed {
                        release.dispose();
                        observer.failed(error);
                    }
                }
            }));
            subscriptions.add(outer);

            Subscription::from_shared(subscriptions)
        })
    }
}

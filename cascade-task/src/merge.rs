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
struct MergeState {
    active: usize,
    outer_completed: bool,
    terminated: bool,
}

impl MergeState {
    /// Marks the merge terminated if it was not already; returns whether this call did it.
    fn terminate(&mut self) -> bool {
        !core::mem::replace(&mut self.terminated, true)
    }

    fn try_succeed(&mut self) -> bool {
        self.outer_completed && self.active == 0 && self.terminate()
    }
}

/// Extension trait providing the `merge` flattening strategy.
pub trait MergeExt<I, T, E>: Observable<Item = I, Error = E> + Sized
where
    I: Observable<Item = T, Error = E>,
{
    /// Observes every inner task as soon as the outer stream emits it.
    ///
    /// Progress values from all inner tasks are forwarded as they arrive. The merged task
    /// succeeds once the outer stream completed and every observed inner task succeeded; if
    /// nothing is active when the outer stream completes, it succeeds right away. The first
    /// failure, from the outer stream or any inner task, fails the merged task and disposes
    /// every subscription.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cascade_core::{CascadeError, Signal, Task};
    /// use cascade_task::MergeExt;
    /// use cascade_test_utils::{record, test_subject};
    ///
    /// let downloads = test_subject::<Task<&'static str, CascadeError>>();
    /// let (recorder, _subscription) = record(&downloads.clone().merge());
    ///
    /// downloads.next(Task::just("a.txt")).unwrap();
    /// downloads.next(Task::just("b.txt")).unwrap();
    /// downloads.completed().unwrap();
    ///
    /// assert_eq!(recorder.values(), vec!["a.txt", "b.txt"]);
    /// assert!(recorder.is_completed());
    /// ```
    fn merge(self) -> Task<T, E>;
}

impl<O, I, T, E> MergeExt<I, T, E> for O
where
    O: Observable<Item = I, Error = E> + 'static,
    I: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn merge(self) -> Task<T, E> {
        let source = Arc::new(self);
        Task::new(move |observer: Observer<T, E>| {
            let state = Arc::new(Mutex::new(MergeState::default()));
            let subscriptions = Arc::new(CompositeDisposable::new());

            let release = Arc::clone(&subscriptions);
            let outer = source.observe(Observer::new(move |event: StreamEvent<I, E>| match event {
                StreamEvent::Next(inner) => {
                    {
                        let mut state = state.lock();
                        if state.terminated {
                            return;
                        }
                        state.active += 1;
                    }

                    let slot = Arc::new(SerialDisposable::new());
                    release.add(Subscription::from_shared(Arc::clone(&slot)));

                    let state = Arc::clone(&state);
                    let release = Arc::clone(&release);
                    let observer = observer.clone();
                    let finished = Arc::clone(&slot);
                    slot.set(inner.observe(Observer::new(move |event| match event {
                        StreamEvent::Next(value) => observer.next(value),
                        StreamEvent::Completed => {
                            let succeeded = {
                                let mut state = state.lock();
                                state.active = state.active.saturating_sub(1);
                                state.try_succeed()
                            };
                            finished.dispose();
                            if succeeded {
                                release.dispose();
                                observer.completed();
                            }
                        }
                        StreamEvent::Failed(error) => {
                            if state.lock().terminate() {
                                debug!("merge: inner failure fails the merged task");
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
                        state.try_succeed()
                    };
                    if succeeded {
                        release.dispose();
                        observer.completed();
                    }
                }
                StreamEvent::Failed(error) => {
                    if state.lock().terminate() {
                        debug!("merge: outer failure fails the merged task");
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

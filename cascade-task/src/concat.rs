// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::debug;
use cascade_core::cascade_mutex::Mutex;
use cascade_core::{
    CompositeDisposable, Disposable, Observable, Observer, SerialDisposable, StreamEvent,
    Subscription, Task,
};
use std::collections::VecDeque;
use std::sync::Arc;

struct ConcatState<I> {
    queue: VecDeque<I>,
    active: bool,
    outer_completed: bool,
    terminated: bool,
    /// Set while a drain loop owns the queue.
    draining: bool,
    /// Set when the inner started by the drain loop succeeded before `start` returned.
    inner_done: bool,
}

/// Per-subscription context shared by the outer observer and every inner observer.
struct ConcatRun<I, T, E> {
    state: Mutex<ConcatState<I>>,
    current: SerialDisposable,
    release: Arc<CompositeDisposable>,
    observer: Observer<T, E>,
}

impl<I, T, E> ConcatRun<I, T, E>
where
    I: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn start(self: &Arc<Self>, inner: I) {
        let slot = Arc::new(SerialDisposable::new());
        self.current.set(Subscription::from_shared(Arc::clone(&slot)));

        let run = Arc::clone(self);
        slot.set(inner.observe(Observer::new(move |event| match event {
            StreamEvent::Next(value) => run.observer.next(value),
            StreamEvent::Completed => run.advance(),
            StreamEvent::Failed(error) => run.fail(error),
        })));
    }

    /// Starts `first` and keeps starting queued inners for as long as each one succeeds
    /// synchronously. The caller must have set `active` and `draining`.
    fn drain(self: &Arc<Self>, first: I) {
        let mut next = first;
        loop {
            self.start(next);

            let mut state = self.state.lock();
            let finished = core::mem::take(&mut state.inner_done);
            if state.terminated || !finished || self.release.is_disposed() {
                state.draining = false;
                return;
            }
            match state.queue.pop_front() {
                Some(queued) => next = queued,
                None => {
                    state.draining = false;
                    state.active = false;
                    state.terminated = state.outer_completed;
                    let succeeded = state.terminated;
                    drop(state);
                    if succeeded {
                        self.release.dispose();
                        self.observer.completed();
                    }
                    return;
                }
            }
        }
    }

    /// Called when the active inner succeeds: starts the next queued inner, or succeeds if
    /// the outer stream is done.
    fn advance(self: &Arc<Self>) {
        let (next, succeeded) = {
            let mut state = self.state.lock();
            if state.terminated {
                return;
            }
            if state.draining {
                state.inner_done = true;
                return;
            }
            match state.queue.pop_front() {
                Some(next) => {
                    state.draining = true;
                    (Some(next), false)
                }
                None => {
                    state.active = false;
                    state.terminated = state.outer_completed;
                    (None, state.terminated)
                }
            }
        };

        if let Some(next) = next {
            self.drain(next);
        } else if succeeded {
            self.release.dispose();
            self.observer.completed();
        }
    }

    fn fail(&self, error: E) {
        let abandoned = {
            let mut state = self.state.lock();
            if core::mem::replace(&mut state.terminated, true) {
                return;
            }
            core::mem::take(&mut state.queue)
        };

        if !abandoned.is_empty() {
            debug!("concat: failure abandons {} queued inner tasks", abandoned.len());
        }
        drop(abandoned);
        self.release.dispose();
        self.observer.failed(error);
    }
}

/// Extension trait providing the `concat` flattening strategy.
pub trait ConcatExt<I, T, E>: Observable<Item = I, Error = E> + Sized
where
    I: Observable<Item = T, Error = E>,
{
    /// Observes inner tasks one at a time, in the order the outer stream emitted them.
    ///
    /// Inner tasks arriving while another one is active wait in a FIFO queue and are not
    /// observed until every earlier task succeeded. The result succeeds when the outer stream
    /// completed, the queue is empty and the last inner task succeeded. A failure fails the
    /// result immediately and the queued tasks are never started.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cascade_core::{CascadeError, Task};
    /// use cascade_task::ConcatExt;
    /// use cascade_test_utils::{record, test_subject};
    ///
    /// let migrations = test_subject::<Task<u32, CascadeError>>();
    /// let (recorder, _subscription) = record(&migrations.clone().concat());
    ///
    /// migrations.next(Task::just(1)).unwrap();
    /// migrations.next(Task::just(2)).unwrap();
    /// migrations.completed().unwrap();
    ///
    /// assert_eq!(recorder.values(), vec![1, 2]);
    /// assert!(recorder.is_completed());
    /// ```
    fn concat(self) -> Task<T, E>;
}

impl<O, I, T, E> ConcatExt<I, T, E> for O
where
    O: Observable<Item = I, Error = E> + 'static,
    I: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn concat(self) -> Task<T, E> {
        let source = Arc::new(self);
        Task::new(move |observer: Observer<T, E>| {
            let subscriptions = Arc::new(CompositeDisposable::new());
            let run = Arc::new(ConcatRun {
                state: Mutex::new(ConcatState {
                    queue: VecDeque::new(),
                    active: false,
                    outer_completed: false,
                    terminated: false,
                    draining: false,
                    inner_done: false,
                }),
                current: SerialDisposable::new(),
                release: Arc::clone(&subscriptions),
                observer,
            });

            let inner_run = Arc::clone(&run);
            subscriptions.add(Subscription::from_fn(move || inner_run.current.dispose()));

            let outer_run = Arc::clone(&run);
            let outer = source.observe(Observer::new(move |event| match event {
                StreamEvent::Next(inner) => {
                    let start = {
                        let mut state = outer_run.state.lock();
                        if state.terminated {
                            return;
                        }
                        if state.active {
                            state.queue.push_back(inner);
                            None
                        } else {
                            state.active = true;
                            state.draining = true;
                            Some(inner)
                        }
                    };
                    if let Some(inner) = start {
                        outer_run.drain(inner);
                    }
                }
                StreamEvent::Completed => {
                    let succeeded = {
                        let mut state = outer_run.state.lock();
                        state.outer_completed = true;
                        let succeeded = !state.terminated && !state.active;
                        state.terminated |= succeeded;
                        succeeded
                    };
                    if succeeded {
                        outer_run.release.dispose();
                        outer_run.observer.completed();
                    }
                }
                StreamEvent::Failed(error) => outer_run.fail(error),
            }));
            subscriptions.add(outer);

            Subscription::from_shared(subscriptions)
        })
    }
}

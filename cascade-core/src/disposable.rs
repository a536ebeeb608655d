// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellation handles for subscriptions and timers.
//!
//! Every handle is idempotent: the first `dispose()` releases the resource, later calls are
//! no-ops. Parent handles never hold their internal lock while disposing a child, so a child's
//! dispose action may freely re-enter the parent.
//!
//! # Example
//!
//! ```
//! use cascade_core::{CompositeDisposable, Disposable, SerialDisposable, Subscription};
//!
//! let composite = CompositeDisposable::new();
//! let timer = Subscription::empty();
//! composite.add(timer.clone());
//!
//! composite.dispose();
//! assert!(timer.is_disposed());
//!
//! // Late additions are disposed on the spot
//! let late = Subscription::empty();
//! composite.add(late.clone());
//! assert!(late.is_disposed());
//!
//! let serial = SerialDisposable::new();
//! let first = Subscription::empty();
//! serial.set(first.clone());
//! serial.set(Subscription::empty());
//! assert!(first.is_disposed());
//! ```

use crate::cascade_mutex::Mutex;
use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use std::sync::Arc;

/// A releasable resource.
pub trait Disposable: Send + Sync {
    /// Releases the resource. Safe to call any number of times.
    fn dispose(&self);

    /// Returns `true` once `dispose` has been called.
    fn is_disposed(&self) -> bool;
}

/// Type-erased, cloneable handle to a [`Disposable`].
///
/// All clones refer to the same underlying resource. Dropping a `Subscription` does **not**
/// dispose it; use [`Subscription::guard`] for scope-bound disposal.
#[derive(Clone)]
pub struct Subscription {
    inner: Arc<dyn Disposable>,
}

impl Subscription {
    /// Wraps a disposable.
    pub fn new<D: Disposable + 'static>(disposable: D) -> Self {
        Self {
            inner: Arc::new(disposable),
        }
    }

    /// Wraps a disposable that is also referenced elsewhere.
    pub fn from_shared<D: Disposable + 'static>(disposable: Arc<D>) -> Self {
        Self { inner: disposable }
    }

    /// Runs `action` exactly once, on the first dispose.
    pub fn from_fn<F>(action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::new(ActionDisposable::new(action))
    }

    /// A handle with no resource attached; it only tracks its disposed flag.
    pub fn empty() -> Self {
        Self::new(BooleanDisposable::new())
    }

    /// A handle that is already disposed.
    pub fn disposed() -> Self {
        let disposable = BooleanDisposable::new();
        disposable.dispose();
        Self::new(disposable)
    }

    /// Releases the underlying resource.
    pub fn dispose(&self) {
        self.inner.dispose();
    }

    /// Returns `true` once the underlying resource was released.
    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }

    /// Converts into a guard that disposes the subscription when dropped.
    pub fn guard(self) -> DisposeGuard {
        DisposeGuard { subscription: self }
    }
}

impl Disposable for Subscription {
    fn dispose(&self) {
        self.inner.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Disposes the wrapped subscription when dropped.
#[must_use = "dropping the guard disposes the subscription immediately"]
#[derive(Debug)]
pub struct DisposeGuard {
    subscription: Subscription,
}

impl DisposeGuard {
    /// Returns a handle to the guarded subscription.
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }
}

impl Drop for DisposeGuard {
    fn drop(&mut self) {
        self.subscription.dispose();
    }
}

/// A disposable flag whose disposal can also be awaited.
///
/// Runtime schedulers hand a clone of this to their spawned timer futures so a disposed timer
/// wakes up and exits instead of firing.
#[derive(Debug)]
pub struct BooleanDisposable {
    disposed: AtomicBool,
    event: Event,
}

impl BooleanDisposable {
    /// Create a new, not yet disposed flag.
    pub fn new() -> Self {
        Self {
            disposed: AtomicBool::new(false),
            event: Event::new(),
        }
    }

    /// Wait asynchronously until the flag is disposed.
    ///
    /// Resolves immediately if it already is.
    pub fn disposed(&self) -> Disposed<'_> {
        Disposed {
            flag: self,
            listener: None,
        }
    }
}

impl Default for BooleanDisposable {
    fn default() -> Self {
        Self::new()
    }
}

impl Disposable for BooleanDisposable {
    fn dispose(&self) {
        // Publish the flag before waking listeners
        self.disposed.store(true, Ordering::Release);
        self.event.notify(usize::MAX);
    }

    fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

/// Future returned by [`BooleanDisposable::disposed()`].
pub struct Disposed<'a> {
    flag: &'a BooleanDisposable,
    listener: Option<EventListener>,
}

impl Future for Disposed<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.flag.is_disposed() {
            return Poll::Ready(());
        }

        let listener = match self.listener.take() {
            Some(listener) => listener,
            None => {
                let listener = self.flag.event.listen();
                // dispose() may have run between the first check and listen()
                if self.flag.is_disposed() {
                    return Poll::Ready(());
                }
                listener
            }
        };

        let mut listener = listener;
        match Pin::new(&mut listener).poll(cx) {
            Poll::Ready(()) => Poll::Ready(()),
            Poll::Pending => {
                self.listener = Some(listener);
                Poll::Pending
            }
        }
    }
}

type Action = Box<dyn FnOnce() + Send>;

/// Runs a closure exactly once, on the first dispose.
pub struct ActionDisposable {
    action: Mutex<Option<Action>>,
}

impl ActionDisposable {
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            action: Mutex::new(Some(Box::new(action))),
        }
    }
}

impl Disposable for ActionDisposable {
    fn dispose(&self) {
        let action = self.action.lock().take();
        if let Some(action) = action {
            action();
        }
    }

    fn is_disposed(&self) -> bool {
        self.action.lock().is_none()
    }
}

impl fmt::Debug for ActionDisposable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDisposable")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

#[derive(Default)]
struct CompositeState {
    disposed: bool,
    children: Vec<Subscription>,
}

/// Owns a dynamic set of child handles and disposes all of them together.
#[derive(Default)]
pub struct CompositeDisposable {
    state: Mutex<CompositeState>,
}

impl CompositeDisposable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a child. If the composite is already disposed the child is disposed right away.
    pub fn add(&self, child: Subscription) {
        let rejected = {
            let mut state = self.state.lock();
            if state.disposed {
                Some(child)
            } else {
                state.children.retain(|existing| !existing.is_disposed());
                state.children.push(child);
                None
            }
        };

        if let Some(child) = rejected {
            child.dispose();
        }
    }

    /// Number of children that are still live.
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .children
            .iter()
            .filter(|child| !child.is_disposed())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Disposable for CompositeDisposable {
    fn dispose(&self) {
        let children = {
            let mut state = self.state.lock();
            if state.disposed {
                return;
            }
            state.disposed = true;
            core::mem::take(&mut state.children)
        };

        for child in children {
            child.dispose();
        }
    }

    fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }
}

impl fmt::Debug for CompositeDisposable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("CompositeDisposable")
            .field("disposed", &state.disposed)
            .field("children", &state.children.len())
            .finish()
    }
}

#[derive(Default)]
struct SerialState {
    disposed: bool,
    current: Option<Subscription>,
}

/// Holds at most one child; assigning a new one disposes the outgoing child.
#[derive(Default)]
pub struct SerialDisposable {
    state: Mutex<SerialState>,
}

impl SerialDisposable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current child, disposing the previous one.
    ///
    /// If this handle is already disposed, `next` is disposed immediately instead.
    pub fn set(&self, next: Subscription) {
        let outgoing = {
            let mut state = self.state.lock();
            if state.disposed {
                Some(next)
            } else {
                state.current.replace(next)
            }
        };

        if let Some(outgoing) = outgoing {
            outgoing.dispose();
        }
    }

    /// Disposes the current child without disposing this handle.
    pub fn clear(&self) {
        let outgoing = self.state.lock().current.take();
        if let Some(outgoing) = outgoing {
            outgoing.dispose();
        }
    }
}

impl Disposable for SerialDisposable {
    fn dispose(&self) {
        let outgoing = {
            let mut state = self.state.lock();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.current.take()
        };

        if let Some(outgoing) = outgoing {
            outgoing.dispose();
        }
    }

    fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }
}

impl fmt::Debug for SerialDisposable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("SerialDisposable")
            .field("disposed", &state.disposed)
            .field("has_current", &state.current.is_some())
            .finish()
    }
}

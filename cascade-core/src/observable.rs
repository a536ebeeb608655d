// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Observer, Signal, StreamEvent, Subscription};

/// The source interface every operator is written against.
///
/// `observe` registers an observer and returns the handle that ends the registration.
/// Implementations are expected to deliver events to a single observer one at a time.
pub trait Observable: Send + Sync {
    /// Type of the `Next` values.
    type Item;
    /// Type carried by `Failed`.
    type Error;

    fn observe(&self, observer: Observer<Self::Item, Self::Error>) -> Subscription;
}

/// Convenience methods available on every [`Observable`].
pub trait ObservableExt: Observable + Sized + 'static {
    /// Observes with a plain event callback.
    fn observe_with<F>(&self, on_event: F) -> Subscription
    where
        F: Fn(StreamEvent<Self::Item, Self::Error>) + Send + Sync + 'static,
    {
        self.observe(Observer::new(on_event))
    }

    /// Observes only the `Next` values.
    fn observe_next<F>(&self, on_next: F) -> Subscription
    where
        F: Fn(Self::Item) + Send + Sync + 'static,
    {
        self.observe(Observer::new(move |event| {
            if let StreamEvent::Next(value) = event {
                on_next(value);
            }
        }))
    }

    /// Erases the concrete source type.
    fn into_signal(self) -> Signal<Self::Item, Self::Error>
    where
        Self::Item: Send + 'static,
        Self::Error: Send + 'static,
    {
        Signal::new(move |observer| self.observe(observer))
    }
}

impl<O> ObservableExt for O where O: Observable + Sized + 'static {}

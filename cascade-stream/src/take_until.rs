// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::debug;
use cascade_core::{
    CompositeDisposable, Disposable, Observable, Observer, Signal, StreamEvent, Subscription,
};
use std::sync::Arc;

/// Extension trait providing the `take_until` operator.
pub trait TakeUntilExt<T, E>: Observable<Item = T, Error = E> + Sized {
    /// Forwards events until `notifier` produces any event, then completes.
    ///
    /// Any notifier event counts, including its own `Completed` or `Failed`. Both
    /// subscriptions are released when either side ends the result.
    fn take_until<N>(self, notifier: N) -> Signal<T, E>
    where
        N: Observable + 'static,
        N::Item: Send + 'static,
        N::Error: Send + 'static;
}

impl<O, T, E> TakeUntilExt<T, E> for O
where
    O: Observable<Item = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn take_until<N>(self, notifier: N) -> Signal<T, E>
    where
        N: Observable + 'static,
        N::Item: Send + 'static,
        N::Error: Send + 'static,
    {
        let source = Arc::new(self);
        let notifier = Arc::new(notifier);
        Signal::new(move |observer: Observer<T, E>| {
            let subscriptions = Arc::new(CompositeDisposable::new());

            let stop = Arc::clone(&subscriptions);
            let downstream = observer.clone();
            subscriptions.add(notifier.observe(Observer::new(
                move |_: StreamEvent<N::Item, N::Error>| {
                    debug!("take_until: notifier fired");
                    stop.dispose();
                    downstream.completed();
                },
            )));

            if !subscriptions.is_disposed() {
                let release = Arc::clone(&subscriptions);
                subscriptions.add(source.observe(Observer::new(move |event| {
                    if event.is_terminal() {
                        release.dispose();
                    }
                    observer.on(event);
                })));
            }

            Subscription::from_shared(subscriptions)
        })
    }
}

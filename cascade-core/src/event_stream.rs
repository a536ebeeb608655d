// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from push-based observables to pull-based `futures::Stream`s.
//!
//! [`IntoEventStream::into_event_stream`] subscribes to the source and buffers every event in
//! an unbounded channel. The stream yields the terminal event and then ends. Dropping the
//! stream disposes the underlying subscription.
//!
//! # Example
//!
//! ```
//! use cascade_core::{CascadeError, IntoEventStream, Signal, StreamEvent};
//! use futures::StreamExt;
//!
//! # futures::executor::block_on(async {
//! let mut events = Signal::<i32, CascadeError>::sequence([1, 2]).into_event_stream();
//!
//! assert_eq!(events.next().await, Some(StreamEvent::Next(1)));
//! assert_eq!(events.next().await, Some(StreamEvent::Next(2)));
//! assert!(matches!(events.next().await, Some(StreamEvent::Completed)));
//! assert!(events.next().await.is_none());
//! # });
//! ```

use crate::{DisposeGuard, Observable, Observer, StreamEvent};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::mpsc::{unbounded, UnboundedReceiver};
use futures::Stream;
use pin_project::pin_project;

/// A `Stream` of the events observed on a source.
#[pin_project]
pub struct EventStream<T, E> {
    #[pin]
    receiver: UnboundedReceiver<StreamEvent<T, E>>,
    guard: DisposeGuard,
}

impl<T, E> EventStream<T, E> {
    /// Returns `true` once the underlying subscription was released.
    pub fn is_disposed(&self) -> bool {
        self.guard.subscription().is_disposed()
    }
}

impl<T, E> Stream for EventStream<T, E> {
    type Item = StreamEvent<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().receiver.poll_next(cx)
    }
}

/// Converts any observable into an [`EventStream`].
pub trait IntoEventStream: Observable + Sized {
    fn into_event_stream(self) -> EventStream<Self::Item, Self::Error>
    where
        Self::Item: Send + 'static,
        Self::Error: Send + 'static,
    {
        let (sender, receiver) = unbounded();
        let subscription = self.observe(Observer::new(move |event: StreamEvent<_, _>| {
            let terminal = event.is_terminal();
            // The receiver may already be gone; nothing left to deliver to.
            let _ = sender.unbounded_send(event);
            if terminal {
                sender.close_channel();
            }
        }));

        EventStream {
            receiver,
            guard: subscription.guard(),
        }
    }
}

impl<O> IntoEventStream for O where O: Observable + Sized {}

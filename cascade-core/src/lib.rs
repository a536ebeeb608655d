// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core primitives for the cascade reactive combinator library.
//!
//! Everything in the other cascade crates is layered on the small set of types defined here:
//!
//! - [`StreamEvent`] and [`TaskEvent`] - the two closed event algebras
//! - [`Observer`] - a gated sink that drops everything after the first terminal event
//! - [`Observable`] - the source interface (`observe(observer) -> Subscription`)
//! - [`Signal`] and [`Task`] - type-erased, cloneable observables
//! - [`Subscription`], [`CompositeDisposable`], [`SerialDisposable`] - cancellation handles
//! - [`Subject`] - a hot, multi-subscriber source that can be pushed into imperatively
//!
//! # Example
//!
//! ```
//! use cascade_core::{CascadeError, Observable, ObservableExt, StreamEvent, Subject};
//! use std::sync::{Arc, Mutex};
//!
//! let subject = Subject::<i32, CascadeError>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = seen.clone();
//! let subscription = subject.observe_next(move |value| sink.lock().unwrap().push(value));
//!
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//! subscription.dispose();
//! subject.next(3).unwrap();
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cascade_mutex;
pub mod disposable;
pub mod error;
pub mod event_stream;
pub(crate) mod logging;
pub mod observable;
pub mod observer;
pub mod signal;
pub mod stream_event;
pub mod subject;
pub mod subject_error;
pub mod task;
pub mod task_event;

pub use self::disposable::{
    ActionDisposable, BooleanDisposable, CompositeDisposable, DisposeGuard, Disposable,
    SerialDisposable, Subscription,
};
pub use self::error::{CascadeError, IntoCascadeError, Result, ResultExt};
pub use self::event_stream::{EventStream, IntoEventStream};
pub use self::observable::{Observable, ObservableExt};
pub use self::observer::Observer;
pub use self::signal::Signal;
pub use self::stream_event::StreamEvent;
pub use self::subject::Subject;
pub use self::subject_error::SubjectError;
pub use self::task::Task;
pub use self::task_event::TaskEvent;

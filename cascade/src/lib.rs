// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Cascade
//!
//! Reactive event-stream combinators over push-based observables.
//!
//! ## Overview
//!
//! A source pushes a sequence of [`StreamEvent`]s (`Next`, then at most one terminal
//! `Failed` or `Completed`) into an [`Observer`]. Cascade layers three families of operators on
//! that primitive:
//!
//! - **Timing operators** (`debounce`, `throttle`, `sample`, `skip_for`, `delay`, `timeout`),
//!   each driven by an explicit [`Scheduler`]
//! - **Single-source and multi-source combinators** (`map`, `filter`, `take`, `distinct`,
//!   `pausable`, `combine_latest`, ...)
//! - **Flattening strategies** over streams of [`Task`]s (`merge`, `switch_to_latest`,
//!   `concat`, `flat_map`)
//!
//! Every derived stream is cold and returns a [`Subscription`]; disposing it releases every
//! upstream subscription and timer the pipeline created.
//!
//! ## Design Philosophy
//!
//! - **No hidden clock**: time-based operators take the scheduler as an argument. Production
//!   code passes `TokioScheduler` (feature `runtime-tokio`, default) or `SmolScheduler`
//!   (feature `runtime-smol`); tests pass a virtual clock.
//! - **One error channel**: the error type is chosen by the caller. [`CascadeError`] is
//!   provided for callers that do not want to define their own.
//! - **Async interop**: [`IntoEventStream`] turns any pipeline into a `futures::Stream`.
//!
//! ## Quick Start
//!
//! ```rust
//! use cascade::prelude::*;
//! use cascade::{CascadeError, Subject};
//!
//! let temperatures = Subject::<f64, CascadeError>::new();
//! let alerts = temperatures
//!     .clone()
//!     .filter(|celsius| *celsius > 30.0)
//!     .map(|celsius| format!("too hot: {celsius}"))
//!     .take(1);
//!
//! let _subscription = alerts.observe_next(|alert| println!("{alert}"));
//! temperatures.next(21.5).unwrap();
//! temperatures.next(31.0).unwrap();
//!
//! // `take(1)` completed and released the source
//! assert_eq!(temperatures.subscriber_count(), 0);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

// Re-export core types
pub use cascade_core::{
    ActionDisposable, BooleanDisposable, CascadeError, CompositeDisposable, DisposeGuard,
    Disposable, EventStream, IntoCascadeError, IntoEventStream, Observable, ObservableExt,
    Observer, Result, ResultExt, SerialDisposable, Signal, StreamEvent, Subject, SubjectError,
    Subscription, Task, TaskEvent,
};

// Re-export schedulers
pub use cascade_runtime::Scheduler;
#[cfg(feature = "runtime-smol")]
#[cfg_attr(docsrs, doc(cfg(feature = "runtime-smol")))]
pub use cascade_runtime::SmolScheduler;
#[cfg(feature = "runtime-tokio")]
#[cfg_attr(docsrs, doc(cfg(feature = "runtime-tokio")))]
pub use cascade_runtime::TokioScheduler;

// Re-export operators
pub use cascade_stream::combine_latest;
pub use cascade_task::FlattenStrategy;

/// Prelude module for convenient imports
pub mod prelude {
    pub use cascade_core::{IntoEventStream, Observable, ObservableExt};
    pub use cascade_runtime::Scheduler;
    pub use cascade_stream::prelude::*;
    pub use cascade_stream_time::prelude::*;
    pub use cascade_task::prelude::*;
}

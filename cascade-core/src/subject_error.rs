// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Errors specific to subject operations.
///
/// These describe misuse of the imperative push side of a [`Subject`](crate::Subject) and are
/// distinct from the failures a stream carries to its observers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The subject already delivered a terminal event and cannot accept new ones.
    #[error("Subject is closed")]
    Closed,
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ready-made error type for cascade streams.
//!
//! Every stream carries exactly one caller-chosen error type. [`CascadeError`] is provided for
//! callers that do not want to define their own; the operators themselves are generic over
//! the error type and never inspect it.
//!
//! # Examples
//!
//! ```
//! use cascade_core::{CascadeError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(CascadeError::stream_error("source not ready"))
//! }
//!
//! assert!(load().is_err());
//! ```

/// Root error type for cascade streams and tasks.
#[derive(Debug, thiserror::Error)]
pub enum CascadeError {
    /// Stream processing encountered an error
    ///
    /// General failure raised by a source or by user code that does not fit the other
    /// variants.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided sources and callbacks.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Timeout occurred
    ///
    /// Emitted by the `timeout` operator when no event arrives within the allowed interval.
    #[error("Timeout error: {context}")]
    TimeoutError {
        /// Context about the timeout (e.g. duration)
        context: String,
    },
}

impl CascadeError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a timeout error with the given context
    pub fn timeout_error(context: impl Into<String>) -> Self {
        Self::TimeoutError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns `true` for errors raised by the `timeout` operator.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::TimeoutError { .. })
    }
}

/// Specialized Result type for cascade operations
pub type Result<T> = std::result::Result<T, CascadeError>;

/// Extension trait for converting errors into `CascadeError`
pub trait IntoCascadeError {
    /// Convert this error into a `CascadeError` with additional context
    fn into_cascade_error(self, context: &str) -> CascadeError;

    /// Convert this error into a `CascadeError` without additional context
    fn into_cascade(self) -> CascadeError
    where
        Self: Sized,
    {
        self.into_cascade_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoCascadeError for E {
    fn into_cascade_error(self, context: &str) -> CascadeError {
        if context.is_empty() {
            CascadeError::user_error(self)
        } else {
            CascadeError::stream_error(format!("{context}: {self}"))
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(CascadeError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(CascadeError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CascadeError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e.into() {
            CascadeError::UserError(inner) => CascadeError::StreamProcessingError {
                context: format!("{}: {inner}", f()),
            },
            other => other,
        })
    }
}

impl From<crate::SubjectError> for CascadeError {
    fn from(error: crate::SubjectError) -> Self {
        Self::stream_error(error.to_string())
    }
}

impl Clone for CascadeError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed source cannot be cloned, keep its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
            Self::TimeoutError { context } => Self::TimeoutError {
                context: context.clone(),
            },
        }
    }
}

/// Errors compare equal when they are the same variant with the same message. Boxed user
/// errors are compared through their `Display` output.
impl PartialEq for CascadeError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::StreamProcessingError { context: left },
                Self::StreamProcessingError { context: right },
            )
            | (Self::TimeoutError { context: left }, Self::TimeoutError { context: right }) => {
                left == right
            }
            (Self::UserError(left), Self::UserError(right)) => {
                left.to_string() == right.to_string()
            }
            _ => false,
        }
    }
}

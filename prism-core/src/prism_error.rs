// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types carried on the error channel of prism streams.
//!
//! Operators never invent failures of their own: a [`PrismError`] either came
//! from upstream or wraps the error returned by a fallible mapper.
//!
//! # Examples
//!
//! ```
//! use prism_core::{PrismError, Result};
//!
//! fn read_field() -> Result<u32> {
//!     Err(PrismError::stream_error("source not ready"))
//! }
//!
//! assert!(read_field().is_err());
//! ```

/// Root error type for prism streams.
#[derive(Debug, thiserror::Error)]
pub enum PrismError {
    /// Error signalled by a source stream or raised while processing it.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Error returned by a user-supplied mapper.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PrismError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns `true` if the error came from a user-supplied mapper.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::UserError(_))
    }
}

/// Specialized Result type for prism operations
pub type Result<T> = std::result::Result<T, PrismError>;

/// Extension trait for converting arbitrary errors into [`PrismError`].
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoPrismError {
    /// Convert this error into a `PrismError`
    fn into_prism(self) -> PrismError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoPrismError for E {
    fn into_prism(self) -> PrismError {
        PrismError::user_error(self)
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(PrismError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(PrismError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e {
            PrismError::UserError(inner) => PrismError::StreamProcessingError {
                context: format!("{}: {inner}", f()),
            },
            other @ PrismError::StreamProcessingError { .. } => other,
        })
    }
}

impl Clone for PrismError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed source cannot be cloned, keep its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
        }
    }
}

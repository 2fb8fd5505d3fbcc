//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for collection operations
///
/// Batch-level failures are reported through summaries rather than errors;
/// anything surfacing as this type is unrecoverable for the invocation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CollectionsError {
    /// Authentication Error - the authenticate endpoint rejected the login
    #[error("Authentication error: {message}")]
    Auth { message: String },

    /// Api Error - the collections endpoint rejected a required operation
    #[error("API error: {message}")]
    Api { message: String },

    /// Input Error - invalid local input, detected before any network call
    #[error("Input error: {message}")]
    Input { message: String },

    /// Transport Error - the request never produced an HTTP response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl CollectionsError {
    /// Get the appropriate exit code for this error type
    ///
    /// The scripts this tool replaces exit 2 on every unrecoverable failure.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Auth { .. } | Self::Api { .. } | Self::Input { .. } | Self::Transport(_) => 2,
        }
    }

    /// Create an authentication error
    #[inline]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an API error
    #[inline]
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create an input error
    #[inline]
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }
}

#![warn(mismatched_lifetime_syntaxes)]
#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for clay
//!
//! The fluent builders never fail; these errors belong to the consumers of
//! the built records: validation, descriptor loading and configuration.

use std::borrow::Cow;

use thiserror::Error;

pub mod config;
pub mod model;

pub use config::ConfigError;
pub use model::ModelError;

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error at {}: {message}", path.display())]
    Io {
        kind: std::io::ErrorKind,
        message: String,
        path: std::path::PathBuf,
    },
}

impl Error {
    /// Create an Io error with an associated path
    pub fn io_with_path(err: &std::io::Error, path: impl Into<std::path::PathBuf>) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
            path: path.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(ConfigError::SerializeError {
            error: err.to_string(),
        })
    }
}

/// Result type alias for clay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Minimal interface for rendering user-facing error information without
/// requiring heavyweight envelopes.
pub trait UserFacingError {
    /// Short message suitable for CLI output.
    fn user_message(&self) -> Cow<'_, str>;

    /// Optional remediation hint.
    fn user_hint(&self) -> Option<&'static str> {
        None
    }

    /// Stable error code for analytics / structured reporting.
    fn user_code(&self) -> Option<&'static str> {
        None
    }
}

impl UserFacingError for Error {
    fn user_message(&self) -> Cow<'_, str> {
        match self {
            Error::Model(err) => err.user_message(),
            Error::Config(err) => err.user_message(),
            Error::Io { message, path, .. } => {
                Cow::Owned(format!("{}: {message}", path.display()))
            }
        }
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Error::Model(err) => err.user_hint(),
            Error::Config(err) => err.user_hint(),
            Error::Io { kind, .. } if *kind == std::io::ErrorKind::PermissionDenied => {
                Some("Check the permissions of the file.")
            }
            Error::Io { .. } => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Error::Model(err) => err.user_code(),
            Error::Config(err) => err.user_code(),
            Error::Io { .. } => Some("error.io"),
        }
    }
}

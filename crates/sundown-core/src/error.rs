//! Error types for the sundown core library.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all sundown operations.
///
/// Every message is plain text meant to be shown to the user as is.
#[derive(Error, Debug)]
pub enum SundownError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The external power command failed or could not be started
    #[error("{message}")]
    CommandFailed {
        message: String,
        exit_code: Option<i32>,
    },
    /// Cancel was requested while nothing is scheduled
    #[error("There is no scheduled shutdown to cancel.")]
    NothingScheduled,
    /// A password-gated action was requested before any password was set
    #[error("Set a password before attempting to cancel a shutdown.")]
    PasswordRequired,
    /// The supplied password did not match the stored one
    #[error("Incorrect password. Cancellation aborted.")]
    AuthenticationFailed,
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SundownError {
        SundownError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SundownError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a command failure with the captured message.
    pub fn command_failed(message: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::CommandFailed {
            message: message.into(),
            exit_code,
        }
    }

    /// Short heading suitable for a dialog or notification title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Validation",
            Self::CommandFailed { .. } => "Command failed",
            Self::NothingScheduled => "Nothing to cancel",
            Self::PasswordRequired => "Password required",
            Self::AuthenticationFailed => "Authentication failed",
            Self::FileSystem { .. } | Self::Serialization { .. } => "Storage error",
            Self::XdgDirectory(_) | Self::Configuration { .. } => "Configuration error",
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to SundownError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for file-system Results.
pub trait FsResultExt<T> {
    /// Attach the path that was being accessed.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| SundownError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> FsResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| SundownError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for sundown operations
pub type Result<T> = std::result::Result<T, SundownError>;

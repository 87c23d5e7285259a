//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ValidationError;

/// Application errors wrap domain errors and add file-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{}: {source}", path.display())]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// Attach the input path to a domain validation error.
    pub fn validation(path: impl Into<PathBuf>, source: ValidationError) -> Self {
        Self::Validation {
            path: path.into(),
            source,
        }
    }

    /// The underlying validation error, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

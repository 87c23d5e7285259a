//! Infrastructure-level errors: application errors plus failed writes

use thiserror::Error;

use crate::application::ApplicationError;

/// Wraps [`ApplicationError`] for reads and validation; `Io` covers writes
/// the CLI performs itself, such as the `config init` template.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;

//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::exitcode;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => exitcode::CANTCREAT,
                InfraError::Application(e) => match e {
                    ApplicationError::Validation { .. } => exitcode::DATAERR,
                    ApplicationError::InputNotFound(_) => exitcode::NOINPUT,
                    ApplicationError::Config { .. } => exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => exitcode::IOERR,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InputKind, ValidationError};
    use std::path::PathBuf;

    #[test]
    fn given_validation_failure_then_data_error_exit_code() {
        let err: CliError = ApplicationError::validation(
            "tree.txt",
            ValidationError::MalformedLine {
                input: InputKind::Tree,
                line: 1,
                content: "A".into(),
            },
        )
        .into();
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn given_missing_input_then_noinput_exit_code() {
        let err: CliError = ApplicationError::InputNotFound(PathBuf::from("graph.txt")).into();
        assert_eq!(err.exit_code(), exitcode::NOINPUT);
        assert_eq!(err.to_string(), "input file not found: graph.txt");
    }

    #[test]
    fn given_usage_error_then_usage_exit_code() {
        assert_eq!(CliError::Usage("x".into()).exit_code(), exitcode::USAGE);
    }
}

//! Error conversion helpers for file reads
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::ValidationError;

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(&graph_file)
    ///     .with_path_context("read graph", &graph_file)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::InputNotFound(path.to_path_buf()),
            _ => ApplicationError::OperationFailed {
                context: format!("{}: {}", action, path.display()),
                source: Box::new(e),
            },
        })
    }
}

/// Extension trait attaching the input path to domain validation errors.
pub trait ValidationResultExt<T> {
    fn in_file(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> ValidationResultExt<T> for Result<T, ValidationError> {
    fn in_file(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::validation(path, e))
    }
}

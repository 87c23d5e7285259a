//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::{InputKind, Vertex};

/// Validation errors name the violated invariant and the offending input line.
///
/// Every variant is fatal: a run either passes all checks or stops at the
/// first violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("malformed {input} line {line}: expected two vertices, got {content:?}")]
    MalformedLine {
        input: InputKind,
        line: usize,
        content: String,
    },

    #[error("duplicate child: {child} has another parent at line {line} (first at line {first_line})")]
    DuplicateChild {
        child: Vertex,
        line: usize,
        first_line: usize,
    },

    #[error("self loop: {vertex} is its own parent at line {line}")]
    SelfLoop { vertex: Vertex, line: usize },

    #[error("unknown edge: {parent} -> {child} at line {line} is not in the graph")]
    UnknownEdge {
        parent: Vertex,
        child: Vertex,
        line: usize,
    },
}

impl ValidationError {
    /// Source line number of the offending input.
    pub fn line(&self) -> usize {
        match self {
            ValidationError::MalformedLine { line, .. }
            | ValidationError::DuplicateChild { line, .. }
            | ValidationError::SelfLoop { line, .. }
            | ValidationError::UnknownEdge { line, .. } => *line,
        }
    }
}

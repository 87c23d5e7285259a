//! Domain entities: vertices and edges

use std::borrow::Borrow;
use std::fmt;

use crate::domain::error::ValidationError;

/// Opaque vertex identifier.
///
/// Two vertices are equal when their tokens are textually equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex(String);

impl Vertex {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Vertex {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Which input file a line was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Reference graph edge list
    Graph,
    /// Candidate tree edge list
    Tree,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Graph => f.write_str("graph"),
            InputKind::Tree => f.write_str("tree"),
        }
    }
}

/// Directed `parent -> child` edge of a candidate tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEdge {
    pub parent: Vertex,
    pub child: Vertex,
    /// 1-based line number in the tree input
    pub line: usize,
}

/// Take the first two whitespace-separated tokens of `content`.
///
/// Extra tokens are ignored. Fewer than two tokens is a malformed line.
pub fn split_pair(
    input: InputKind,
    line: usize,
    content: &str,
) -> Result<(Vertex, Vertex), ValidationError> {
    let mut tokens = content.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(first), Some(second)) => Ok((Vertex::from(first), Vertex::from(second))),
        _ => Err(ValidationError::MalformedLine {
            input,
            line,
            content: content.to_string(),
        }),
    }
}

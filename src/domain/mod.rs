//! Domain layer: graph loading and tree validation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod graph;
pub mod tree;

pub use entities::*;
pub use error::ValidationError;
pub use graph::{load_graph, AdjacencyMap};
pub use tree::{validate_tree, CandidateTree};

/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
///
/// Returns the input unchanged if expansion fails.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

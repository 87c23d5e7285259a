//! Validate a candidate tree, given as `parent child` edge lines, against an
//! undirected reference graph given as `u v` edge lines.
//!
//! Three local properties are checked: each vertex is a child at most once,
//! no edge is a self loop, and every edge exists in the graph.
//!
//! ```
//! use treecheck::domain::{load_graph, validate_tree};
//!
//! let graph = load_graph(["A B", "B C", "C D"]).unwrap();
//! assert!(validate_tree(["A B", "B C", "C D"], &graph).is_ok());
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

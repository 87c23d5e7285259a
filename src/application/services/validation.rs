//! Tree validation service
//!
//! Reads the reference graph and candidate tree through the filesystem
//! boundary and runs the domain checks on them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use termtree::Tree;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt, ValidationResultExt};
use crate::domain::{load_graph, AdjacencyMap, CandidateTree, Vertex};
use crate::infrastructure::traits::FileSystem;

/// Outcome of a successful validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub graph_file: PathBuf,
    pub tree_file: PathBuf,
    /// Number of tree edges that passed all checks
    pub edges_checked: usize,
    /// Number of distinct vertices in the reference graph
    pub graph_vertices: usize,
}

/// Size and degree overview of a reference graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Vertices in first-seen order with their degree
    pub degrees: Vec<(Vertex, usize)>,
}

/// Service for validating candidate trees against reference graphs.
pub struct ValidationService {
    fs: Arc<dyn FileSystem>,
}

impl ValidationService {
    /// Create a new validation service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    fn read(&self, action: &str, path: &Path) -> ApplicationResult<String> {
        self.fs.read_to_string(path).with_path_context(action, path)
    }

    /// Read and parse the reference graph file.
    #[instrument(level = "debug", skip(self))]
    pub fn load_graph(&self, path: &Path) -> ApplicationResult<AdjacencyMap> {
        let content = self.read("read graph", path)?;
        load_graph(content.lines()).in_file(path)
    }

    /// Read and parse the candidate tree file without validating it.
    #[instrument(level = "debug", skip(self))]
    pub fn load_tree(&self, path: &Path) -> ApplicationResult<CandidateTree> {
        let content = self.read("read tree", path)?;
        CandidateTree::parse(content.lines()).in_file(path)
    }

    /// Validate the tree in `tree_file` against the graph in `graph_file`.
    ///
    /// The graph is fully loaded before the tree is read.
    pub fn validate(&self, graph_file: &Path, tree_file: &Path) -> ApplicationResult<ValidationReport> {
        debug!(
            "validate: graph={}, tree={}",
            graph_file.display(),
            tree_file.display()
        );
        let graph = self.load_graph(graph_file)?;
        let tree = self.load_tree(tree_file)?;
        tree.validate(&graph).in_file(tree_file)?;

        info!("validate: {} edges valid", tree.len());
        Ok(ValidationReport {
            graph_file: graph_file.to_path_buf(),
            tree_file: tree_file.to_path_buf(),
            edges_checked: tree.len(),
            graph_vertices: graph.vertex_count(),
        })
    }

    /// Count vertices and edges of a graph file and list vertex degrees.
    pub fn summarize_graph(&self, graph_file: &Path) -> ApplicationResult<GraphSummary> {
        let graph = self.load_graph(graph_file)?;
        let degrees = graph
            .vertices()
            .map(|v| (v.clone(), graph.degree(v.as_str())))
            .collect();
        Ok(GraphSummary {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            degrees,
        })
    }

    /// Neighbors of `vertex` in read order; empty if the graph does not contain it.
    pub fn neighbors(&self, graph_file: &Path, vertex: &str) -> ApplicationResult<Vec<Vertex>> {
        let graph = self.load_graph(graph_file)?;
        Ok(graph.neighbors(vertex).to_vec())
    }

    /// Render the candidate tree as display trees, one per root.
    pub fn render_tree(&self, tree_file: &Path) -> ApplicationResult<Vec<Tree<String>>> {
        let tree = self.load_tree(tree_file)?;
        Ok(tree.to_forest())
    }
}

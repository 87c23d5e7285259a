//! Reference graph loading.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::domain::entities::{split_pair, InputKind, Vertex};
use crate::domain::error::ValidationError;

/// Undirected adjacency structure of the reference graph.
///
/// Neighbor lists keep the order in which edges were read. Parallel edges
/// produce repeated neighbors. Vertices never mentioned have no neighbors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    neighbors: HashMap<Vertex, Vec<Vertex>>,
    /// Vertices in first-seen order
    order: Vec<Vertex>,
    edge_count: usize,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_edge(&mut self, a: Vertex, b: Vertex) {
        self.entry(&a).push(b.clone());
        self.entry(&b).push(a);
        self.edge_count += 1;
    }

    fn entry(&mut self, vertex: &Vertex) -> &mut Vec<Vertex> {
        if !self.neighbors.contains_key(vertex) {
            self.order.push(vertex.clone());
        }
        self.neighbors.entry(vertex.clone()).or_default()
    }

    /// Neighbors of `vertex` in insertion order; empty for unknown vertices.
    pub fn neighbors(&self, vertex: &str) -> &[Vertex] {
        self.neighbors
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True if `a` and `b` are joined by at least one edge.
    ///
    /// Adjacency is symmetric, so looking in one list suffices.
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.neighbors(b).iter().any(|n| n.as_str() == a)
    }

    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.neighbors.contains_key(vertex)
    }

    /// Number of neighbor entries of `vertex`, counting parallel edges.
    pub fn degree(&self, vertex: &str) -> usize {
        self.neighbors(vertex).len()
    }

    /// Vertices in the order they first appeared in the input.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.order.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of edge lines read.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check that `v in graph[u]` iff `u in graph[v]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        self.neighbors.iter().all(|(u, vs)| {
            vs.iter()
                .all(|v| self.neighbors(v.as_str()).iter().any(|w| w == u))
        })
    }
}

/// Build the adjacency map from reference edge lines `u v`.
///
/// Each line contributes `v` to `u`'s list and `u` to `v`'s list. A line
/// without two tokens, empty lines included, is rejected.
#[instrument(level = "debug", skip(lines))]
pub fn load_graph<I>(lines: I) -> Result<AdjacencyMap, ValidationError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut graph = AdjacencyMap::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let (u, v) = split_pair(InputKind::Graph, idx + 1, line.as_ref())?;
        graph.add_edge(u, v);
    }
    debug!(
        "load_graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

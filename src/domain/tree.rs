//! Candidate tree parsing and validation.
//!
//! Validation checks three local properties, in this order:
//! 1. every vertex is the child of at most one edge
//! 2. no edge joins a vertex to itself
//! 3. every edge exists in the reference graph
//!
//! Connectivity, acyclicity and spanning are not checked.

use std::collections::{HashMap, HashSet};

use termtree::Tree;
use tracing::{debug, instrument};

use crate::domain::entities::{split_pair, InputKind, TreeEdge, Vertex};
use crate::domain::error::ValidationError;
use crate::domain::graph::AdjacencyMap;

/// Ordered `(parent, child)` edges of a candidate tree, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateTree {
    edges: Vec<TreeEdge>,
}

impl CandidateTree {
    /// Parse tree edge lines. Blank lines are skipped but still counted for
    /// line numbers.
    #[instrument(level = "debug", skip(lines))]
    pub fn parse<I>(lines: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut edges = Vec::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            let (parent, child) = split_pair(InputKind::Tree, idx + 1, line)?;
            edges.push(TreeEdge {
                parent,
                child,
                line: idx + 1,
            });
        }
        debug!("parse: {} tree edges", edges.len());
        Ok(Self { edges })
    }

    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Distinct child vertices.
    pub fn children(&self) -> HashSet<&Vertex> {
        self.edges.iter().map(|e| &e.child).collect()
    }

    /// Parents that never appear as a child, in first-seen order.
    pub fn roots(&self) -> Vec<&Vertex> {
        let children = self.children();
        let mut seen = HashSet::new();
        self.edges
            .iter()
            .map(|e| &e.parent)
            .filter(|p| !children.contains(p) && seen.insert(*p))
            .collect()
    }

    /// Run all checks against `graph`, reporting the first violation.
    #[instrument(level = "debug", skip_all)]
    pub fn validate(&self, graph: &AdjacencyMap) -> Result<(), ValidationError> {
        self.check_unique_children()?;
        self.check_no_self_loops()?;
        self.check_edges_exist(graph)?;
        debug!("validate: {} edges passed", self.edges.len());
        Ok(())
    }

    fn check_unique_children(&self) -> Result<(), ValidationError> {
        let mut first_seen: HashMap<&Vertex, usize> = HashMap::with_capacity(self.edges.len());
        for edge in &self.edges {
            if let Some(&first_line) = first_seen.get(&edge.child) {
                return Err(ValidationError::DuplicateChild {
                    child: edge.child.clone(),
                    line: edge.line,
                    first_line,
                });
            }
            first_seen.insert(&edge.child, edge.line);
        }
        Ok(())
    }

    fn check_no_self_loops(&self) -> Result<(), ValidationError> {
        match self.edges.iter().find(|e| e.parent == e.child) {
            Some(edge) => Err(ValidationError::SelfLoop {
                vertex: edge.child.clone(),
                line: edge.line,
            }),
            None => Ok(()),
        }
    }

    fn check_edges_exist(&self, graph: &AdjacencyMap) -> Result<(), ValidationError> {
        match self
            .edges
            .iter()
            .find(|e| !graph.contains_edge(e.parent.as_str(), e.child.as_str()))
        {
            Some(edge) => Err(ValidationError::UnknownEdge {
                parent: edge.parent.clone(),
                child: edge.child.clone(),
                line: edge.line,
            }),
            None => Ok(()),
        }
    }

    /// Render the edges as display trees, one per root.
    ///
    /// Edges not reachable from any root hang below an `(unrooted)` node.
    /// A vertex already on the current path is shown as `(cycle)`, one
    /// already drawn elsewhere as `(repeated)`; neither is expanded again.
    /// Branches deeper than [`MAX_RENDER_DEPTH`] end in a `(truncated)` leaf.
    pub fn to_forest(&self) -> Vec<Tree<String>> {
        let mut kids: Children = HashMap::new();
        for edge in &self.edges {
            kids.entry(&edge.parent).or_default().push(&edge.child);
        }

        let mut expanded = HashSet::new();
        let mut forest: Vec<Tree<String>> = self
            .roots()
            .into_iter()
            .map(|root| grow(root, &kids, &mut expanded))
            .collect();

        let mut unrooted = Vec::new();
        for edge in &self.edges {
            if !expanded.contains(&edge.parent) {
                unrooted.push(grow(&edge.parent, &kids, &mut expanded));
            }
        }
        if !unrooted.is_empty() {
            forest.push(Tree::new("(unrooted)".to_string()).with_leaves(unrooted));
        }
        forest
    }
}

/// Deepest level drawn by [`CandidateTree::to_forest`], root included.
pub const MAX_RENDER_DEPTH: usize = 64;

type Children<'a> = HashMap<&'a Vertex, Vec<&'a Vertex>>;

struct Frame<'a> {
    vertex: &'a Vertex,
    depth: usize,
    next: usize,
    leaves: Vec<Tree<String>>,
}

impl<'a> Frame<'a> {
    fn new(vertex: &'a Vertex, depth: usize) -> Self {
        Self {
            vertex,
            depth,
            next: 0,
            leaves: Vec::new(),
        }
    }
}

/// Depth-first build from `root` with an explicit stack.
fn grow<'a>(root: &'a Vertex, kids: &Children<'a>, expanded: &mut HashSet<&'a Vertex>) -> Tree<String> {
    let mut on_path: HashSet<&Vertex> = HashSet::from([root]);
    let mut stack = vec![Frame::new(root, 1)];
    let mut grown = None;
    expanded.insert(root);

    while let Some(frame) = stack.last_mut() {
        let child = kids
            .get(frame.vertex)
            .and_then(|children| children.get(frame.next))
            .copied();
        frame.next += 1;

        match child {
            Some(child) if on_path.contains(child) => {
                frame.leaves.push(Tree::new(format!("{child} (cycle)")));
            }
            Some(child) if expanded.contains(child) => {
                frame.leaves.push(Tree::new(format!("{child} (repeated)")));
            }
            Some(child) if frame.depth >= MAX_RENDER_DEPTH => {
                let hidden = hide(child, kids, expanded);
                debug!("to_forest: truncated {} vertices below {}", hidden, child);
                frame.leaves.push(Tree::new(format!("{child} (truncated)")));
            }
            Some(child) => {
                let depth = frame.depth + 1;
                expanded.insert(child);
                on_path.insert(child);
                stack.push(Frame::new(child, depth));
            }
            None => {
                let Some(done) = stack.pop() else { break };
                on_path.remove(done.vertex);
                let node = Tree::new(done.vertex.to_string()).with_leaves(done.leaves);
                match stack.last_mut() {
                    Some(parent) => parent.leaves.push(node),
                    None => grown = Some(node),
                }
            }
        }
    }

    grown.unwrap_or_else(|| Tree::new(root.to_string()))
}

/// Mark everything reachable from `vertex` as expanded without drawing it.
fn hide<'a>(vertex: &'a Vertex, kids: &Children<'a>, expanded: &mut HashSet<&'a Vertex>) -> usize {
    let mut hidden = 0;
    let mut stack = vec![vertex];
    while let Some(current) = stack.pop() {
        if expanded.insert(current) {
            hidden += 1;
            if let Some(children) = kids.get(current) {
                stack.extend(children.iter().copied());
            }
        }
    }
    hidden
}

/// Parse `tree_lines` and validate them against `graph`.
pub fn validate_tree<I>(tree_lines: I, graph: &AdjacencyMap) -> Result<(), ValidationError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    CandidateTree::parse(tree_lines)?.validate(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::load_graph;

    #[test]
    fn given_blank_lines_when_parsing_then_skipped_but_counted() {
        let tree = CandidateTree::parse(["A B", "", "   ", "B C"]).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.edges()[1].line, 4);
    }

    #[test]
    fn given_duplicate_and_self_loop_when_validating_then_duplicate_wins() {
        let graph = load_graph(["A B"]).unwrap();
        let tree = CandidateTree::parse(["X X", "A B", "C B"]).unwrap();

        let err = tree.validate(&graph).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateChild {
                child: Vertex::from("B"),
                line: 3,
                first_line: 2,
            }
        );
    }

    #[test]
    fn given_self_loop_and_unknown_edge_when_validating_then_self_loop_wins() {
        let graph = load_graph(["A B"]).unwrap();
        let tree = CandidateTree::parse(["A C", "X X"]).unwrap();

        let err = tree.validate(&graph).unwrap_err();
        assert_eq!(
            err,
            ValidationError::SelfLoop {
                vertex: Vertex::from("X"),
                line: 2,
            }
        );
    }

    #[test]
    fn given_reversed_edge_when_validating_then_accepted() {
        let graph = load_graph(["B A"]).unwrap();
        assert!(validate_tree(["A B"], &graph).is_ok());
    }

    #[test]
    fn given_edges_when_finding_roots_then_parents_without_parent() {
        let tree = CandidateTree::parse(["A B", "A C", "D E", "B F"]).unwrap();
        let roots: Vec<_> = tree.roots().into_iter().map(Vertex::as_str).collect();
        assert_eq!(roots, ["A", "D"]);
    }

    #[test]
    fn given_tree_when_rendering_then_children_in_file_order() {
        let tree = CandidateTree::parse(["A B", "A C", "B D"]).unwrap();
        let forest = tree.to_forest();

        assert_eq!(forest.len(), 1);
        let rendered = forest[0].to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "A");
        assert!(lines[1].ends_with("B"));
        assert!(lines[2].ends_with("D"));
        assert!(lines[3].ends_with("C"));
    }

    #[test]
    fn given_pure_cycle_when_rendering_then_unrooted_and_marked() {
        let tree = CandidateTree::parse(["A B", "B A"]).unwrap();
        let forest = tree.to_forest();

        assert_eq!(forest.len(), 1);
        let rendered = forest[0].to_string();
        assert!(rendered.starts_with("(unrooted)"));
        assert!(rendered.contains("A (cycle)"));
    }

    #[test]
    fn given_long_chain_when_rendering_then_truncated_at_max_depth() {
        let lines: Vec<String> = (0..100_000).map(|i| format!("v{} v{}", i, i + 1)).collect();
        let tree = CandidateTree::parse(&lines).unwrap();

        let forest = tree.to_forest();

        assert_eq!(forest.len(), 1);
        let rendered = forest[0].to_string();
        let last = rendered.lines().last().unwrap();
        assert_eq!(rendered.lines().count(), MAX_RENDER_DEPTH + 1);
        assert!(last.ends_with(&format!("v{MAX_RENDER_DEPTH} (truncated)")), "{last}");
        assert!(!rendered.contains("(unrooted)"));
    }
}

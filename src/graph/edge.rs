//! Edge identifiers and weighted edge records.
//!
//! This module provides [`EdgeId`], a strongly-typed handle for edges within a
//! [`WeightedGraph`](crate::graph::WeightedGraph), and [`Edge`], the directed weighted
//! connection it refers to.
//!
//! Parallel edges between the same ordered pair of vertices are allowed. Each one receives its
//! own `EdgeId`; the `(source, target)` display label is shared and must not be used for
//! identity.

use std::fmt;

use crate::graph::VertexId;

/// A strongly-typed handle for an edge within a weighted graph.
///
/// `EdgeId` wraps a `usize` index assigned sequentially from 0 as edges are added. It is the
/// only reliable edge identity: the display label produced by
/// [`WeightedGraph::edge_label`](crate::graph::WeightedGraph::edge_label) repeats for parallel
/// edges.
///
/// # Examples
///
/// ```rust,ignore
/// use pathscope::graph::{WeightedGraph, EdgeId};
///
/// let mut graph = WeightedGraph::new();
/// let a = graph.add_vertex("a")?;
/// let b = graph.add_vertex("b")?;
/// let first: EdgeId = graph.add_edge(a, b, 1)?;
/// let second: EdgeId = graph.add_edge(a, b, 2)?;
///
/// assert_ne!(first, second);
/// assert_eq!(graph.edge_label(first), graph.edge_label(second));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    ///
    /// Primarily intended for tests. Normal usage obtains handles from
    /// [`WeightedGraph::add_edge`](crate::graph::WeightedGraph::add_edge).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw 0-based index of this edge.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// A directed edge with a signed integer weight.
///
/// Both endpoints are handles into the owning graph and are validated when the edge is added.
/// Weights are unbounded and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: i32,
}

impl Edge {
    pub(crate) fn new(source: VertexId, target: VertexId, weight: i32) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    /// Returns the vertex this edge leaves.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the vertex this edge enters.
    #[must_use]
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Returns the weight of this edge.
    #[must_use]
    pub fn weight(&self) -> i32 {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_edge_id_index() {
        let edge = EdgeId::new(9);
        assert_eq!(edge.index(), 9);

        let raw: usize = edge.into();
        assert_eq!(raw, 9);
        assert_eq!(EdgeId::from(3), EdgeId::new(3));
    }

    #[test]
    fn test_edge_id_formatting() {
        let edge = EdgeId::new(42);
        assert_eq!(format!("{edge:?}"), "EdgeId(42)");
        assert_eq!(format!("{edge}"), "e42");
    }

    #[test]
    fn test_edge_id_as_map_key() {
        let mut weights: HashMap<EdgeId, i32> = HashMap::new();
        weights.insert(EdgeId::new(0), -4);
        weights.insert(EdgeId::new(1), 7);

        assert_eq!(weights.get(&EdgeId::new(0)), Some(&-4));
        assert_eq!(weights.get(&EdgeId::new(2)), None);
    }

    #[test]
    fn test_edge_accessors() {
        let edge = Edge::new(VertexId::new(0), VertexId::new(1), -3);
        assert_eq!(edge.source(), VertexId::new(0));
        assert_eq!(edge.target(), VertexId::new(1));
        assert_eq!(edge.weight(), -3);
    }

    #[test]
    fn test_parallel_edges_compare_equal_by_value() {
        // Value equality says nothing about identity; EdgeId does.
        let first = Edge::new(VertexId::new(0), VertexId::new(1), 5);
        let second = Edge::new(VertexId::new(0), VertexId::new(1), 5);
        assert_eq!(first, second);
    }
}

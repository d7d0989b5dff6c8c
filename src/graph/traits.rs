//! Trait definitions for graph abstractions.
//!
//! The traversal algorithms in [`crate::graph::algorithms`] are written against these traits
//! rather than against [`WeightedGraph`](crate::graph::WeightedGraph) directly, so they only
//! see the capability surface they need: vertex enumeration and forward adjacency.
//!
//! - [`GraphBase`] - Vertex count and vertex enumeration
//! - [`Successors`] - Forward edge traversal (outgoing edges)

use crate::graph::VertexId;

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust,ignore
/// use pathscope::graph::{WeightedGraph, GraphBase};
///
/// let mut graph = WeightedGraph::new();
/// graph.add_vertex("a")?;
/// graph.add_vertex("b")?;
///
/// assert_eq!(GraphBase::vertex_count(&graph), 2);
/// ```
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex handles in the graph.
    ///
    /// Implementations yield vertices in insertion order (ascending `VertexId` index);
    /// depth-first search relies on this to pick its roots deterministically.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId>;
}

/// Trait for graphs that support forward edge traversal.
///
/// For a directed edge `(u, v)`, vertex `v` is a successor of `u`. A vertex with parallel
/// edges to the same target yields that target once per edge.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor vertices of the given vertex, in edge
    /// insertion order.
    ///
    /// # Arguments
    ///
    /// * `vertex` - The vertex whose successors to iterate
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex in the graph.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal edge-list graph for trait testing
    struct TestGraph {
        vertex_count: usize,
        edges: Vec<(VertexId, VertexId)>,
    }

    impl GraphBase for TestGraph {
        fn vertex_count(&self) -> usize {
            self.vertex_count
        }

        fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
            (0..self.vertex_count).map(VertexId::new)
        }
    }

    impl Successors for TestGraph {
        fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
            self.edges
                .iter()
                .filter(move |(src, _)| *src == vertex)
                .map(|(_, dst)| *dst)
        }
    }

    #[test]
    fn test_graph_base() {
        let graph = TestGraph {
            vertex_count: 4,
            edges: vec![],
        };
        assert_eq!(graph.vertex_count(), 4);

        let ids: Vec<VertexId> = graph.vertex_ids().collect();
        assert_eq!(ids.first(), Some(&VertexId::new(0)));
        assert_eq!(ids.last(), Some(&VertexId::new(3)));
    }

    #[test]
    fn test_successors() {
        let graph = TestGraph {
            vertex_count: 3,
            edges: vec![
                (VertexId::new(0), VertexId::new(2)),
                (VertexId::new(0), VertexId::new(1)),
                (VertexId::new(1), VertexId::new(2)),
            ],
        };

        let succ: Vec<VertexId> = graph.successors(VertexId::new(0)).collect();
        assert_eq!(succ, vec![VertexId::new(2), VertexId::new(1)]);
        assert_eq!(graph.successors(VertexId::new(2)).count(), 0);
    }
}

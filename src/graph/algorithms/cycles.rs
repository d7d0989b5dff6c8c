//! Acyclicity check for directed graphs.
//!
//! The DAG shortest-path algorithm and topological sorting assume an acyclic input and do not
//! verify it themselves. [`is_acyclic`] lets callers check that precondition up front.

use crate::graph::{algorithms::depth_first_search, Successors};

/// Checks whether `graph` contains no directed cycle.
///
/// Runs a full depth-first search and then looks for a back edge: an edge (u, v) where v is
/// an ancestor of u (or u itself) in the DFS forest. A directed graph is acyclic if and only
/// if it has no back edge.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust,ignore
/// use pathscope::graph::{WeightedGraph, algorithms::is_acyclic};
///
/// let mut graph = WeightedGraph::new();
/// let a = graph.add_vertex("a")?;
/// let b = graph.add_vertex("b")?;
/// graph.add_edge(a, b, 1)?;
/// assert!(is_acyclic(&graph));
///
/// graph.add_edge(b, a, 1)?;
/// assert!(!is_acyclic(&graph));
/// ```
pub fn is_acyclic<G: Successors>(graph: &G) -> bool {
    let state = depth_first_search(graph, |_| {}, |_| {});

    graph.vertex_ids().all(|vertex| {
        graph
            .successors(vertex)
            .all(|successor| !state.is_ancestor(successor, vertex))
    })
}

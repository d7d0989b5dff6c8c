//! Single-source shortest paths in a directed acyclic graph.
//!
//! Relaxing every outgoing edge of each vertex in topological order settles all distances in
//! one pass, because every edge into a vertex is relaxed before that vertex's own edges are
//! looked at. This runs in O(V + E), against O(V * E) for Bellman-Ford, and needs no
//! negative-cycle check since a DAG has no cycles at all.

use log::debug;

use crate::{
    graph::{EdgeId, VertexId, VertexKey, WeightedGraph},
    shortest::relax::{initialize_single_source, relax, should_relax},
    Result,
};

/// Computes shortest paths from `source` in an acyclic `graph`.
///
/// Runs [`WeightedGraph::perform_topological_sort`], initializes the single source, then
/// relaxes the outgoing edges of each vertex in topological order. On return every vertex
/// carries its distance from `source` and its predecessor on a shortest path.
///
/// The graph must be acyclic; this is not verified. Check with
/// [`is_acyclic`](crate::graph::algorithms::is_acyclic) when the input is untrusted.
///
/// # Returns
///
/// The topological order that was used.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) or
/// [`Error::InvalidEndpoint`](crate::Error::InvalidEndpoint) if `source` is not a vertex of
/// the graph. The graph is left untouched in that case.
///
/// # Examples
///
/// ```rust,ignore
/// use pathscope::{graph::WeightedGraph, shortest::dag_shortest_paths};
///
/// let mut graph = WeightedGraph::new();
/// for id in ["r", "s", "t"] {
///     graph.add_vertex(id)?;
/// }
/// graph.add_edge("r", "s", 5)?;
/// graph.add_edge("r", "t", 3)?;
/// graph.add_edge("s", "t", -4)?;
///
/// dag_shortest_paths(&mut graph, "r")?;
/// assert_eq!(graph.get_vertex("t").unwrap().distance(), 1.0);
/// ```
pub fn dag_shortest_paths<'k>(
    graph: &mut WeightedGraph,
    source: impl Into<VertexKey<'k>>,
) -> Result<Vec<VertexId>> {
    let source = graph.resolve(source)?;

    let order = graph.perform_topological_sort();
    initialize_single_source(graph, source)?;
    debug!(
        "DAG shortest paths from {} over {} vertices",
        source,
        order.len()
    );

    for &vertex in &order {
        let outgoing: Vec<EdgeId> = graph.outgoing_edges(vertex).map(|(edge, _)| edge).collect();
        for edge in outgoing {
            if should_relax(graph, edge) {
                relax(graph, edge);
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{VertexId, WeightedGraph},
        shortest::{bellman_ford, dag::dag_shortest_paths},
        Error,
    };

    fn create_reference_dag() -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        for id in ["r", "s", "t", "x", "y", "z"] {
            graph.add_vertex(id).unwrap();
        }
        for (u, v, w) in [
            ("r", "s", 5),
            ("r", "t", 3),
            ("s", "t", 2),
            ("s", "x", 6),
            ("t", "x", 7),
            ("t", "y", 4),
            ("t", "z", 2),
            ("x", "z", 1),
            ("x", "y", -1),
            ("y", "z", -2),
        ] {
            graph.add_edge(u, v, w).unwrap();
        }
        graph
    }

    fn distances(graph: &WeightedGraph) -> Vec<(String, f64)> {
        graph
            .vertices()
            .map(|(_, v)| (v.id().to_string(), v.distance()))
            .collect()
    }

    #[test]
    fn test_reference_dag() {
        let mut graph = create_reference_dag();
        let order = dag_shortest_paths(&mut graph, "r").unwrap();

        assert_eq!(order.first(), graph.find_vertex("r").as_ref());

        let expected = [
            ("r", 0.0),
            ("s", 5.0),
            ("t", 3.0),
            ("x", 10.0),
            ("y", 7.0),
            ("z", 5.0),
        ];
        for (id, distance) in expected {
            assert_eq!(graph.get_vertex(id).unwrap().distance(), distance, "{id}");
        }
    }

    #[test]
    fn test_source_in_the_middle() {
        let mut graph = create_reference_dag();
        dag_shortest_paths(&mut graph, "s").unwrap();

        let r = graph.get_vertex("r").unwrap();
        assert_eq!(r.distance(), f64::INFINITY);
        assert_eq!(r.predecessor(), None);
        assert_eq!(graph.get_vertex("x").unwrap().distance(), 6.0);
        assert_eq!(graph.get_vertex("z").unwrap().distance(), 3.0);
    }

    #[test]
    fn test_matches_bellman_ford() {
        let mut dag = create_reference_dag();
        let mut general = create_reference_dag();

        dag_shortest_paths(&mut dag, "r").unwrap();
        assert!(bellman_ford(&mut general, "r").unwrap());

        assert_eq!(distances(&dag), distances(&general));
    }

    #[test]
    fn test_parallel_edges_use_cheapest() {
        let mut graph = WeightedGraph::new();
        let a = graph.add_vertex("a").unwrap();
        let b = graph.add_vertex("b").unwrap();
        graph.add_edge(a, b, 9).unwrap();
        graph.add_edge(a, b, -1).unwrap();

        dag_shortest_paths(&mut graph, a).unwrap();
        assert_eq!(graph.vertex(b).unwrap().distance(), -1.0);
    }

    #[test]
    fn test_unknown_source() {
        let mut graph = create_reference_dag();

        assert_eq!(
            dag_shortest_paths(&mut graph, "q"),
            Err(Error::VertexNotFound("q".to_string()))
        );
        // no traversal took place
        assert!(graph.vertices().all(|(_, v)| v.opened_at() == 0));
        assert!(dag_shortest_paths(&mut graph, VertexId::new(6)).is_err());
    }
}

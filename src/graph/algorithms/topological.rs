//! Topological ordering for directed acyclic graphs (DAGs).
//!
//! A topological ordering is a linear ordering of vertices such that for every directed edge
//! (u, v), vertex u comes before v. It is computed here as the reverse of the depth-first
//! finish order: in a DAG every edge (u, v) has v finishing before u.

use crate::graph::{algorithms::depth_first_search, Successors, VertexId};

/// Computes a topological ordering of all vertices of `graph`.
///
/// The graph must be acyclic. This function does not check that precondition: on a cyclic
/// graph it still returns every vertex exactly once, but the order does not satisfy the edge
/// constraint. Use [`is_acyclic`](crate::graph::algorithms::is_acyclic) first when the input
/// is untrusted.
///
/// Unlike [`WeightedGraph::perform_topological_sort`](crate::graph::WeightedGraph::perform_topological_sort)
/// this leaves the vertices' recorded state untouched.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust,ignore
/// use pathscope::graph::{WeightedGraph, algorithms::topological_sort};
///
/// // r -> s -> t, r -> t
/// let mut graph = WeightedGraph::new();
/// let t = graph.add_vertex("t")?;
/// let s = graph.add_vertex("s")?;
/// let r = graph.add_vertex("r")?;
/// graph.add_edge(r, s, 5)?;
/// graph.add_edge(s, t, 2)?;
/// graph.add_edge(r, t, 3)?;
///
/// assert_eq!(topological_sort(&graph), vec![r, s, t]);
/// ```
pub fn topological_sort<G: Successors>(graph: &G) -> Vec<VertexId> {
    let mut finished = Vec::with_capacity(graph.vertex_count());
    depth_first_search(graph, |_| {}, |vertex| finished.push(vertex));
    finished.reverse();
    finished
}

#[cfg(test)]
mod tests {
    use crate::graph::{algorithms::topological::topological_sort, VertexId, WeightedGraph};

    fn assert_topological(graph: &WeightedGraph, order: &[VertexId]) {
        assert_eq!(order.len(), graph.vertex_count());
        let pos = |v: VertexId| order.iter().position(|&x| x == v).unwrap();
        for (_, edge) in graph.edges() {
            assert!(
                pos(edge.source()) < pos(edge.target()),
                "edge {:?} violates the order",
                graph.edge_label(graph.find_edge(edge.source(), edge.target()).unwrap())
            );
        }
    }

    #[test]
    fn test_topological_sort_empty_graph() {
        let graph = WeightedGraph::new();
        assert!(topological_sort(&graph).is_empty());
    }

    #[test]
    fn test_topological_sort_single_vertex() {
        let mut graph = WeightedGraph::new();
        let a = graph.add_vertex("a").unwrap();
        assert_eq!(topological_sort(&graph), vec![a]);
    }

    #[test]
    fn test_topological_sort_linear() {
        let mut graph = WeightedGraph::new();
        let c = graph.add_vertex("c").unwrap();
        let b = graph.add_vertex("b").unwrap();
        let a = graph.add_vertex("a").unwrap();
        graph.add_edge(a, b, 1).unwrap();
        graph.add_edge(b, c, 1).unwrap();

        assert_eq!(topological_sort(&graph), vec![a, b, c]);
    }

    #[test]
    fn test_topological_sort_reference_dag() {
        let mut graph = WeightedGraph::new();
        for id in ["z", "y", "x", "t", "s", "r"] {
            graph.add_vertex(id).unwrap();
        }
        for (u, v, w) in [
            ("y", "z", -2),
            ("x", "z", 1),
            ("x", "y", -1),
            ("t", "x", 7),
            ("t", "y", 4),
            ("t", "z", 2),
            ("s", "t", 2),
            ("s", "x", 6),
            ("r", "s", 5),
            ("r", "t", 3),
        ] {
            graph.add_edge(u, v, w).unwrap();
        }

        let order = topological_sort(&graph);
        assert_topological(&graph, &order);

        let names: Vec<&str> = order
            .iter()
            .map(|&v| graph.vertex(v).unwrap().id())
            .collect();
        assert_eq!(names, vec!["r", "s", "t", "x", "y", "z"]);
    }

    #[test]
    fn test_topological_sort_disconnected() {
        let mut graph = WeightedGraph::new();
        for id in ["a", "b", "c", "d"] {
            graph.add_vertex(id).unwrap();
        }
        graph.add_edge("a", "b", 1).unwrap();
        graph.add_edge("c", "d", 1).unwrap();

        let order = topological_sort(&graph);
        assert_topological(&graph, &order);
    }

    #[test]
    fn test_topological_sort_leaves_vertices_untouched() {
        let mut graph = WeightedGraph::new();
        let a = graph.add_vertex("a").unwrap();
        let b = graph.add_vertex("b").unwrap();
        graph.add_edge(a, b, 1).unwrap();

        topological_sort(&graph);
        assert_eq!(graph.vertex(a).unwrap().opened_at(), 0);
        assert_eq!(graph.vertex(b).unwrap().predecessor(), None);
    }

    #[test]
    fn test_topological_sort_cyclic_graph_still_lists_every_vertex() {
        let mut graph = WeightedGraph::new();
        for id in ["a", "b", "c"] {
            graph.add_vertex(id).unwrap();
        }
        graph.add_edge("a", "b", 1).unwrap();
        graph.add_edge("b", "c", 1).unwrap();
        graph.add_edge("c", "a", 1).unwrap();

        let mut order = topological_sort(&graph);
        order.sort();
        assert_eq!(
            order,
            vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)]
        );
    }
}

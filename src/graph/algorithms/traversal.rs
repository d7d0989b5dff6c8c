//! Depth-first search with discovery and finish callbacks.
//!
//! The traversal covers the whole graph: it restarts from every vertex that is still
//! undiscovered, taking roots in vertex insertion order and successors in edge insertion
//! order. It is iterative, using an explicit stack of frames, so graphs with very long simple
//! paths do not exhaust the call stack.
//!
//! All run state (the timestamp counter, colors, discovery/finish stamps and DFS parents)
//! lives in a [`DfsState`] that is returned to the caller. The stamps are identical to the
//! ones produced by the textbook recursive formulation:
//!
//! - discovering a vertex increments the counter, stamps `opened_at`, colors it gray and
//!   invokes `on_started`
//! - once all of its successors have been explored the vertex turns black, the counter is
//!   incremented again, `closed_at` is stamped and `on_finished` is invoked

use crate::graph::{Successors, VertexColor, VertexId};

/// Run state of a depth-first search.
///
/// Indexed by [`VertexId`]; every vector has one slot per vertex of the traversed graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsState {
    time: usize,
    color: Vec<VertexColor>,
    opened_at: Vec<usize>,
    closed_at: Vec<usize>,
    parent: Vec<Option<VertexId>>,
}

impl DfsState {
    fn new(vertex_count: usize) -> Self {
        DfsState {
            time: 0,
            color: vec![VertexColor::White; vertex_count],
            opened_at: vec![0; vertex_count],
            closed_at: vec![0; vertex_count],
            parent: vec![None; vertex_count],
        }
    }

    fn open(&mut self, vertex: VertexId) {
        self.time += 1;
        self.opened_at[vertex.index()] = self.time;
        self.color[vertex.index()] = VertexColor::Gray;
    }

    fn close(&mut self, vertex: VertexId) {
        self.color[vertex.index()] = VertexColor::Black;
        self.time += 1;
        self.closed_at[vertex.index()] = self.time;
    }

    /// Returns the final value of the timestamp counter (twice the vertex count after a
    /// complete run).
    #[must_use]
    pub fn time(&self) -> usize {
        self.time
    }

    /// Returns the color of `vertex`, or white for handles outside the traversed graph.
    #[must_use]
    pub fn color(&self, vertex: VertexId) -> VertexColor {
        self.color
            .get(vertex.index())
            .copied()
            .unwrap_or(VertexColor::White)
    }

    /// Returns the discovery stamp of `vertex` (0 if it was never discovered).
    #[must_use]
    pub fn opened_at(&self, vertex: VertexId) -> usize {
        self.opened_at.get(vertex.index()).copied().unwrap_or(0)
    }

    /// Returns the finish stamp of `vertex` (0 if it was never finished).
    #[must_use]
    pub fn closed_at(&self, vertex: VertexId) -> usize {
        self.closed_at.get(vertex.index()).copied().unwrap_or(0)
    }

    /// Returns the vertex from which `vertex` was discovered; `None` for roots.
    #[must_use]
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parent.get(vertex.index()).copied().flatten()
    }

    /// Returns `true` if `ancestor` is an ancestor of `vertex` in the DFS forest, or the same
    /// vertex.
    ///
    /// Uses the parenthesis structure of the stamps: the interval of a descendant nests inside
    /// the interval of its ancestor.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: VertexId, vertex: VertexId) -> bool {
        self.opened_at(ancestor) <= self.opened_at(vertex)
            && self.closed_at(vertex) <= self.closed_at(ancestor)
    }
}

/// A vertex on the traversal stack with the successors it still has to look at.
struct Frame {
    vertex: VertexId,
    successors: Vec<VertexId>,
    next: usize,
}

impl Frame {
    fn new<G: Successors>(graph: &G, vertex: VertexId) -> Self {
        Frame {
            vertex,
            successors: graph.successors(vertex).collect(),
            next: 0,
        }
    }
}

/// Runs a depth-first search over every vertex of `graph`.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `on_started` - Invoked with each vertex right after it is discovered
/// * `on_finished` - Invoked with each vertex right after its exploration completes
///
/// # Returns
///
/// The complete traversal state.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) for the state and the stack frames
///
/// # Examples
///
/// ```rust,ignore
/// use pathscope::graph::{WeightedGraph, algorithms::depth_first_search};
///
/// let mut graph = WeightedGraph::new();
/// let a = graph.add_vertex("a")?;
/// let b = graph.add_vertex("b")?;
/// graph.add_edge(a, b, 1)?;
///
/// let mut finished = Vec::new();
/// let state = depth_first_search(&graph, |_| {}, |v| finished.push(v));
///
/// assert_eq!(finished, vec![b, a]);
/// assert_eq!(state.opened_at(a), 1);
/// assert_eq!(state.closed_at(a), 4);
/// ```
pub fn depth_first_search<G: Successors>(
    graph: &G,
    mut on_started: impl FnMut(VertexId),
    mut on_finished: impl FnMut(VertexId),
) -> DfsState {
    let mut state = DfsState::new(graph.vertex_count());
    let mut stack: Vec<Frame> = Vec::new();

    for root in graph.vertex_ids() {
        if state.color(root) != VertexColor::White {
            continue;
        }

        state.open(root);
        on_started(root);
        stack.push(Frame::new(graph, root));

        while let Some(frame) = stack.last_mut() {
            let current = frame.vertex;
            let next = frame.successors.get(frame.next).copied();

            match next {
                Some(successor) => {
                    frame.next += 1;
                    if state.color(successor) == VertexColor::White {
                        state.parent[successor.index()] = Some(current);
                        state.open(successor);
                        on_started(successor);
                        stack.push(Frame::new(graph, successor));
                    }
                }
                None => {
                    stack.pop();
                    state.close(current);
                    on_finished(current);
                }
            }
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::traversal::depth_first_search, VertexColor, VertexId, WeightedGraph,
    };

    fn create_tree_graph() -> WeightedGraph {
        //       a
        //      / \
        //     b   c
        //    / \   \
        //   d   e   f
        let mut graph = WeightedGraph::new();
        for id in ["a", "b", "c", "d", "e", "f"] {
            graph.add_vertex(id).unwrap();
        }
        graph.add_edge("a", "b", 1).unwrap();
        graph.add_edge("a", "c", 1).unwrap();
        graph.add_edge("b", "d", 1).unwrap();
        graph.add_edge("b", "e", 1).unwrap();
        graph.add_edge("c", "f", 1).unwrap();
        graph
    }

    fn create_cycle_graph() -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        for id in ["a", "b", "c"] {
            graph.add_vertex(id).unwrap();
        }
        graph.add_edge("a", "b", 1).unwrap();
        graph.add_edge("b", "c", 1).unwrap();
        graph.add_edge("c", "a", 1).unwrap();
        graph
    }

    fn ids(graph: &WeightedGraph, order: &[VertexId]) -> Vec<String> {
        order
            .iter()
            .map(|&v| graph.vertex(v).unwrap().id().to_string())
            .collect()
    }

    #[test]
    fn test_dfs_empty_graph() {
        let graph = WeightedGraph::new();
        let state = depth_first_search(&graph, |_| {}, |_| {});
        assert_eq!(state.time(), 0);
    }

    #[test]
    fn test_dfs_tree_order() {
        let graph = create_tree_graph();
        let mut started = Vec::new();
        let mut finished = Vec::new();

        let state = depth_first_search(&graph, |v| started.push(v), |v| finished.push(v));

        assert_eq!(ids(&graph, &started), vec!["a", "b", "d", "e", "c", "f"]);
        assert_eq!(ids(&graph, &finished), vec!["d", "e", "b", "f", "c", "a"]);
        assert_eq!(state.time(), 12);
    }

    #[test]
    fn test_dfs_timestamps_match_recursive_formulation() {
        let graph = create_tree_graph();
        let state = depth_first_search(&graph, |_| {}, |_| {});

        let stamps: Vec<(usize, usize)> = graph
            .vertex_ids()
            .map(|v| (state.opened_at(v), state.closed_at(v)))
            .collect();
        // a(1 b(2 d(3 4) e(5 6) 7) c(8 f(9 10) 11) 12)
        assert_eq!(
            stamps,
            vec![(1, 12), (2, 7), (8, 11), (3, 4), (5, 6), (9, 10)]
        );
    }

    #[test]
    fn test_dfs_parents() {
        let graph = create_tree_graph();
        let state = depth_first_search(&graph, |_| {}, |_| {});

        let a = graph.find_vertex("a").unwrap();
        let b = graph.find_vertex("b").unwrap();
        let e = graph.find_vertex("e").unwrap();
        assert_eq!(state.parent(a), None);
        assert_eq!(state.parent(e), Some(b));
        assert!(state.is_ancestor(a, e));
        assert!(!state.is_ancestor(e, a));
    }

    #[test]
    fn test_dfs_cycle_visits_each_vertex_once() {
        let graph = create_cycle_graph();
        let mut started = Vec::new();

        let state = depth_first_search(&graph, |v| started.push(v), |_| {});

        assert_eq!(started.len(), 3);
        assert_eq!(state.time(), 6);
        assert!(graph
            .vertex_ids()
            .all(|v| state.color(v) == VertexColor::Black));
    }

    #[test]
    fn test_dfs_restarts_on_disconnected_vertices() {
        let mut graph = WeightedGraph::new();
        for id in ["a", "b", "c", "d"] {
            graph.add_vertex(id).unwrap();
        }
        graph.add_edge("a", "b", 1).unwrap();
        graph.add_edge("d", "c", 1).unwrap();

        let mut roots = Vec::new();
        let state = depth_first_search(&graph, |_| {}, |_| {});
        for v in graph.vertex_ids() {
            if state.parent(v).is_none() {
                roots.push(v);
            }
        }

        assert_eq!(ids(&graph, &roots), vec!["a", "c", "d"]);
        assert_eq!(state.time(), 8);
    }

    #[test]
    fn test_dfs_long_path_does_not_recurse() {
        let mut graph = WeightedGraph::with_capacity(100_000, 99_999);
        for i in 0..100_000 {
            graph.add_vertex(format!("v{i}")).unwrap();
        }
        for i in 0..99_999 {
            graph
                .add_edge(VertexId::new(i), VertexId::new(i + 1), 1)
                .unwrap();
        }

        let state = depth_first_search(&graph, |_| {}, |_| {});
        assert_eq!(state.opened_at(VertexId::new(99_999)), 100_000);
        assert_eq!(state.closed_at(VertexId::new(0)), 200_000);
    }

    #[test]
    fn test_state_out_of_range_queries() {
        let graph = create_cycle_graph();
        let state = depth_first_search(&graph, |_| {}, |_| {});

        let foreign = VertexId::new(42);
        assert_eq!(state.color(foreign), VertexColor::White);
        assert_eq!(state.opened_at(foreign), 0);
        assert_eq!(state.parent(foreign), None);
    }
}

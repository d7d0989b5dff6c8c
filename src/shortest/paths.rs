//! Path reconstruction from recorded predecessors.

use crate::{
    graph::{VertexId, VertexKey, WeightedGraph},
    Result,
};

/// Reconstructs the shortest path to `target` recorded by the last shortest-path run.
///
/// Follows predecessor links back from `target` until a vertex without predecessor is
/// reached, and returns the vertices from that vertex (the source) to `target`. Every vertex
/// on the chain must be reached, and the chain must end at a vertex with distance 0.
///
/// # Returns
///
/// - `Some(path)` - the source first, `target` last; just `[target]` when `target` is the
///   source
/// - `None` - `target` was not reached (infinite distance), the predecessor chain loops
///   (a negative cycle was detected), or the predecessors no longer describe shortest paths,
///   e.g. after [`WeightedGraph::perform_dfs`] replaced them with DFS parents
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) or
/// [`Error::InvalidEndpoint`](crate::Error::InvalidEndpoint) if `target` is not a vertex of
/// the graph.
///
/// # Examples
///
/// ```rust,ignore
/// use pathscope::{graph::WeightedGraph, shortest::{bellman_ford, shortest_path}};
///
/// bellman_ford(&mut graph, "s")?;
/// let path = shortest_path(&graph, "z")?.unwrap_or_default();
/// let ids: Vec<&str> = path.iter().map(|&v| graph.vertex(v).unwrap().id()).collect();
/// assert_eq!(ids, vec!["s", "y", "x", "t", "z"]);
/// ```
pub fn shortest_path<'k>(
    graph: &WeightedGraph,
    target: impl Into<VertexKey<'k>>,
) -> Result<Option<Vec<VertexId>>> {
    let target = graph.resolve(target)?;

    let Some(vertex) = graph.vertex(target) else {
        return Ok(None);
    };
    if vertex.distance().is_infinite() {
        return Ok(None);
    }

    let mut path = vec![target];
    let mut current = vertex;
    while let Some(step) = current.predecessor() {
        if path.len() > graph.vertex_count() {
            return Ok(None);
        }
        let Some(next) = graph.vertex(step) else {
            return Ok(None);
        };
        if next.distance().is_infinite() {
            return Ok(None);
        }
        path.push(step);
        current = next;
    }

    // the chain must end at the source of the last run
    if current.distance() != 0.0 {
        return Ok(None);
    }

    path.reverse();
    Ok(Some(path))
}

//! Bellman-Ford single-source shortest paths.
//!
//! Handles negative edge weights and detects negative-weight cycles reachable from the
//! source. Runs `|V| - 1` relaxation passes over all edges in store order, then one
//! verification pass: any edge that can still be relaxed proves a reachable negative cycle.

use log::{debug, trace, warn};

use crate::{
    graph::{EdgeId, VertexKey, WeightedGraph},
    shortest::relax::{initialize_single_source, relax, should_relax},
    Result,
};

/// Observer hooks invoked by [`bellman_ford_with_observer`].
///
/// All methods have empty default implementations. Observers see the graph read-only and
/// cannot influence the run. `()` is the no-op observer.
///
/// # Examples
///
/// ```rust,ignore
/// use pathscope::{graph::{EdgeId, WeightedGraph}, shortest::{bellman_ford_with_observer, RelaxationObserver}};
///
/// #[derive(Default)]
/// struct CountRelaxations(usize);
///
/// impl RelaxationObserver for CountRelaxations {
///     fn on_relaxed(&mut self, _graph: &WeightedGraph, _edge: EdgeId) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = CountRelaxations::default();
/// bellman_ford_with_observer(&mut graph, "s", &mut counter)?;
/// println!("{} relaxations", counter.0);
/// ```
pub trait RelaxationObserver {
    /// Called once after every vertex has been initialized for the run.
    fn on_initialized(&mut self, _graph: &WeightedGraph) {}

    /// Called after `edge` has been relaxed.
    fn on_relaxed(&mut self, _graph: &WeightedGraph, _edge: EdgeId) {}

    /// Called for every edge that can still be relaxed in the verification pass.
    fn on_violation(&mut self, _graph: &WeightedGraph, _edge: EdgeId) {}
}

impl RelaxationObserver for () {}

/// Computes shortest paths from `source` with the Bellman-Ford algorithm.
///
/// On return every vertex carries its distance from `source` (`f64::INFINITY` if unreachable)
/// and its predecessor on a shortest path.
///
/// # Arguments
///
/// * `graph` - The graph; distances and predecessors are written onto its vertices
/// * `source` - The source vertex, by handle or identifier
///
/// # Returns
///
/// `Ok(true)` if all distances are final, `Ok(false)` if a negative-weight cycle reachable
/// from `source` exists. Distances of vertices affected by such a cycle are not meaningful.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) or
/// [`Error::InvalidEndpoint`](crate::Error::InvalidEndpoint) if `source` is not a vertex of
/// the graph. The graph is left untouched in that case.
///
/// # Complexity
///
/// - Time: O(V * E)
/// - Space: O(E) for the edge order snapshot
///
/// # Examples
///
/// ```rust,ignore
/// use pathscope::{graph::WeightedGraph, shortest::bellman_ford};
///
/// let mut graph = WeightedGraph::new();
/// for id in ["s", "t", "x"] {
///     graph.add_vertex(id)?;
/// }
/// graph.add_edge("s", "t", 6)?;
/// graph.add_edge("t", "x", -4)?;
///
/// assert!(bellman_ford(&mut graph, "s")?);
/// assert_eq!(graph.get_vertex("x").unwrap().distance(), 2.0);
/// ```
pub fn bellman_ford<'k>(graph: &mut WeightedGraph, source: impl Into<VertexKey<'k>>) -> Result<bool> {
    bellman_ford_with_observer(graph, source, &mut ())
}

/// Runs [`bellman_ford`], reporting initialization, every relaxation and every violating
/// edge of the verification pass to `observer`.
///
/// # Errors
///
/// Same as [`bellman_ford`].
pub fn bellman_ford_with_observer<'k, O>(
    graph: &mut WeightedGraph,
    source: impl Into<VertexKey<'k>>,
    observer: &mut O,
) -> Result<bool>
where
    O: RelaxationObserver + ?Sized,
{
    let source = initialize_single_source(graph, source)?;
    observer.on_initialized(graph);

    let edges: Vec<EdgeId> = graph.edge_ids().collect();
    let passes = graph.vertex_count().saturating_sub(1);
    debug!(
        "Bellman-Ford from {} over {} vertices and {} edges ({} passes)",
        source,
        graph.vertex_count(),
        edges.len(),
        passes
    );

    let mut relaxations = 0usize;
    for pass in 1..=passes {
        for &edge in &edges {
            if should_relax(graph, edge) {
                relax(graph, edge);
                relaxations += 1;
                trace!(
                    "pass {}: relaxed {}",
                    pass,
                    graph.edge_label(edge).unwrap_or_default()
                );
                observer.on_relaxed(graph, edge);
            }
        }
    }

    let mut consistent = true;
    for &edge in &edges {
        if should_relax(graph, edge) {
            consistent = false;
            warn!(
                "Edge {} can still be relaxed, negative cycle reachable from {}",
                graph.edge_label(edge).unwrap_or_default(),
                source
            );
            observer.on_violation(graph, edge);
        }
    }

    debug!(
        "Bellman-Ford finished after {} relaxations, consistent: {}",
        relaxations, consistent
    );
    Ok(consistent)
}

//! Single-source initialization and the edge relaxation primitive.
//!
//! Both shortest-path algorithms are built from the same three steps:
//!
//! - [`initialize_single_source`] resets every distance to infinity and every predecessor to
//!   none, then sets the source distance to 0
//! - [`should_relax`] tests whether an edge offers a shorter path to its target
//! - [`relax`] takes that shorter path unconditionally
//!
//! Distances are `f64` so that unreached vertices can hold `f64::INFINITY`. Edge weights are
//! `i32` and convert to `f64` losslessly. Adding a finite weight to infinity stays infinite,
//! and `inf > inf + w` is false, so an edge leaving an unreached vertex never relaxes.

use crate::{
    graph::{EdgeId, VertexId, VertexKey, WeightedGraph},
    Result,
};

/// Prepares every vertex of `graph` for a shortest-path run from `source`.
///
/// # Returns
///
/// The resolved handle of `source`.
///
/// # Errors
///
/// - [`Error::VertexNotFound`](crate::Error::VertexNotFound) if the source identifier is not
///   registered
/// - [`Error::InvalidEndpoint`](crate::Error::InvalidEndpoint) if the source handle does not
///   belong to the graph
///
/// No vertex is modified on error.
pub fn initialize_single_source<'k>(
    graph: &mut WeightedGraph,
    source: impl Into<VertexKey<'k>>,
) -> Result<VertexId> {
    let source = graph.resolve(source)?;

    for index in 0..graph.vertex_count() {
        if let Some(vertex) = graph.vertex_mut(VertexId::new(index)) {
            vertex.distance = f64::INFINITY;
            vertex.predecessor = None;
        }
    }

    if let Some(vertex) = graph.vertex_mut(source) {
        vertex.distance = 0.0;
    }

    Ok(source)
}

/// Returns `true` if going through `edge` shortens the best known path to its target.
///
/// That is `target.distance > source.distance + weight`. Returns `false` for edges that do
/// not belong to `graph`.
#[must_use]
pub fn should_relax(graph: &WeightedGraph, edge: EdgeId) -> bool {
    let Some(edge) = graph.edge(edge) else {
        return false;
    };
    let (Some(source), Some(target)) = (graph.vertex(edge.source()), graph.vertex(edge.target()))
    else {
        return false;
    };

    target.distance() > source.distance() + f64::from(edge.weight())
}

/// Routes the best known path to the target of `edge` through its source.
///
/// Sets `target.distance = source.distance + weight` and `target.predecessor = source`. There
/// is no internal guard: callers check [`should_relax`] first. Edges that do not belong to
/// `graph` are ignored.
pub fn relax(graph: &mut WeightedGraph, edge: EdgeId) {
    let Some(&edge) = graph.edge(edge) else {
        return;
    };
    let Some(source_distance) = graph.vertex(edge.source()).map(|v| v.distance()) else {
        return;
    };

    if let Some(target) = graph.vertex_mut(edge.target()) {
        target.distance = source_distance + f64::from(edge.weight());
        target.predecessor = Some(edge.source());
    }
}

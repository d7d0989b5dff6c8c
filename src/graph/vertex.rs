//! Vertex identifiers and per-vertex algorithm state.
//!
//! This module provides [`VertexId`], the strongly-typed handle used to address vertices
//! inside a [`WeightedGraph`](crate::graph::WeightedGraph), and [`Vertex`], which pairs the
//! user-visible identifier string with the state that traversal and shortest-path runs
//! write back (distance, predecessor, DFS color and timestamps).
//!
//! [`VertexKey`] lets the lookup-style graph operations accept either form of reference.

use std::fmt;

use strum::{Display, EnumString};

use crate::{Error, Result};

/// A strongly-typed handle for a vertex within a [`WeightedGraph`](crate::graph::WeightedGraph).
///
/// `VertexId` wraps a `usize` index. Handles are assigned sequentially starting from 0 when
/// vertices are added, so they double as indices into per-vertex vectors kept by the
/// algorithms.
///
/// Predecessor links are stored as `VertexId`s, which keeps the graph the sole owner of its
/// vertices.
///
/// # Examples
///
/// ```rust,ignore
/// use pathscope::graph::{WeightedGraph, VertexId};
///
/// let mut graph = WeightedGraph::new();
/// let s: VertexId = graph.add_vertex("s")?;
/// let t: VertexId = graph.add_vertex("t")?;
///
/// assert_ne!(s, t);
/// assert_eq!(t.index(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// Intended for tests and for callers that keep their own index-based tables. Normal
    /// usage obtains handles from [`WeightedGraph::add_vertex`](crate::graph::WeightedGraph::add_vertex).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw 0-based index of this vertex.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}

/// Depth-first search color of a vertex.
///
/// - `White` - not yet discovered
/// - `Gray` - discovered, its exploration is still in progress (on the traversal stack)
/// - `Black` - all of its descendants have been explored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum VertexColor {
    /// Undiscovered
    #[default]
    White,
    /// On the current traversal stack
    Gray,
    /// Fully explored
    Black,
}

/// A vertex of a weighted graph.
///
/// The identifier is fixed at construction. Everything else is per-run state owned by the
/// algorithms:
///
/// - `distance` - best known distance from the source of the last shortest-path run,
///   `f64::INFINITY` when unreached
/// - `predecessor` - the vertex preceding this one on the best known path (or the DFS parent
///   after a depth-first search)
/// - `color`, `opened_at`, `closed_at` - depth-first search color and discovery/finish stamps
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: String,
    pub(crate) distance: f64,
    pub(crate) predecessor: Option<VertexId>,
    pub(crate) color: VertexColor,
    pub(crate) opened_at: usize,
    pub(crate) closed_at: usize,
}

impl Vertex {
    /// Creates a vertex with the given identifier and fresh state.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier of the vertex, unique within its graph
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `id` is empty.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::InvalidIdentifier);
        }

        Ok(Vertex {
            id,
            distance: f64::INFINITY,
            predecessor: None,
            color: VertexColor::White,
            opened_at: 0,
            closed_at: 0,
        })
    }

    /// Returns the identifier of this vertex.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the best known distance from the source of the last run.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the predecessor recorded by the last run, if any.
    #[must_use]
    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    /// Returns the depth-first search color left by the last traversal.
    #[must_use]
    pub fn color(&self) -> VertexColor {
        self.color
    }

    /// Returns the discovery timestamp of the last depth-first search.
    #[must_use]
    pub fn opened_at(&self) -> usize {
        self.opened_at
    }

    /// Returns the finish timestamp of the last depth-first search.
    #[must_use]
    pub fn closed_at(&self) -> usize {
        self.closed_at
    }
}

/// A reference to a vertex, either by handle or by identifier string.
///
/// Graph operations that look vertices up accept `impl Into<VertexKey>`, so both
/// `graph.add_edge(s, t, 6)` and `graph.add_edge("s", "t", 6)` work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKey<'a> {
    /// A handle returned by [`WeightedGraph::add_vertex`](crate::graph::WeightedGraph::add_vertex)
    Handle(VertexId),
    /// The vertex identifier string
    Ident(&'a str),
}

impl From<VertexId> for VertexKey<'_> {
    fn from(vertex: VertexId) -> Self {
        VertexKey::Handle(vertex)
    }
}

impl<'a> From<&'a str> for VertexKey<'a> {
    fn from(ident: &'a str) -> Self {
        VertexKey::Ident(ident)
    }
}

impl<'a> From<&'a String> for VertexKey<'a> {
    fn from(ident: &'a String) -> Self {
        VertexKey::Ident(ident.as_str())
    }
}

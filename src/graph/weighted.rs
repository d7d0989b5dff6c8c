//! Weighted directed graph storage.
//!
//! This module provides [`WeightedGraph`], the graph store used by every algorithm in the
//! crate. It owns all vertices and edges, keeps a per-vertex outgoing adjacency list and an
//! identifier index, and exposes the construction, lookup and enumeration surface.
//!
//! The store only grows: there are no removal operations. Algorithm runs mutate the per-run
//! state carried by each [`Vertex`] and never add or remove vertices or edges.

use std::collections::HashMap;

use crate::{
    graph::{
        algorithms::{depth_first_search, DfsState},
        edge::{Edge, EdgeId},
        traits::{GraphBase, Successors},
        vertex::{Vertex, VertexId, VertexKey},
    },
    Error, Result,
};

/// A directed graph with string-identified vertices and integer-weighted edges.
///
/// `WeightedGraph` supports:
///
/// - Unique, non-empty vertex identifiers with O(1) lookup
/// - Parallel edges and self-loops (multigraph)
/// - Negative edge weights
/// - Per-vertex algorithm state (distance, predecessor, DFS color and timestamps)
///
/// # Memory Layout
///
/// - Vertices are stored in a vector indexed by [`VertexId`]
/// - Edges are stored in a vector indexed by [`EdgeId`]
/// - Outgoing adjacency lists store `EdgeId` references in insertion order
/// - An identifier index maps each vertex identifier to its handle
///
/// # Enumeration Order
///
/// Vertices enumerate in insertion order. Edges enumerate grouped by source vertex (in vertex
/// insertion order), then in per-source insertion order. Bellman-Ford relaxes edges in exactly
/// this order.
///
/// # Thread Safety
///
/// `WeightedGraph` is [`Send`] and [`Sync`]. Algorithm runs take `&mut self`, so concurrent
/// runs over the same instance are ruled out by the borrow checker.
///
/// # Examples
///
/// ```rust,ignore
/// use pathscope::graph::WeightedGraph;
///
/// let mut graph = WeightedGraph::new();
/// let s = graph.add_vertex("s")?;
/// let t = graph.add_vertex("t")?;
///
/// graph.add_edge(s, t, 6)?;
/// graph.add_edge("t", "s", -2)?;
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.contains_edge("s", "t"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    /// Vertex storage, indexed by `VertexId`
    vertices: Vec<Vertex>,
    /// Edge storage, indexed by `EdgeId`
    edges: Vec<Edge>,
    /// Outgoing edges per vertex
    outgoing: Vec<Vec<EdgeId>>,
    /// Identifier to handle
    index: HashMap<String, VertexId>,
}

impl WeightedGraph {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        WeightedGraph {
            vertices: Vec::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a new empty graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_capacity` - Expected number of vertices
    /// * `edge_capacity` - Expected number of edges
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        WeightedGraph {
            vertices: Vec::with_capacity(vertex_capacity),
            edges: Vec::with_capacity(edge_capacity),
            outgoing: Vec::with_capacity(vertex_capacity),
            index: HashMap::with_capacity(vertex_capacity),
        }
    }

    /// Adds a new vertex with the given identifier.
    ///
    /// The vertex is assigned the next sequential `VertexId`, starting from 0, and an empty
    /// outgoing edge list.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier of the new vertex
    ///
    /// # Returns
    ///
    /// The `VertexId` assigned to the new vertex.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidIdentifier`] if `id` is empty
    /// - [`Error::DuplicateVertex`] if a vertex with `id` already exists
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use pathscope::{Error, graph::{WeightedGraph, VertexId}};
    ///
    /// let mut graph = WeightedGraph::new();
    /// assert_eq!(graph.add_vertex("s")?, VertexId::new(0));
    /// assert_eq!(graph.add_vertex("s"), Err(Error::DuplicateVertex("s".into())));
    /// ```
    pub fn add_vertex(&mut self, id: impl Into<String>) -> Result<VertexId> {
        let vertex = Vertex::new(id)?;
        if self.index.contains_key(vertex.id()) {
            return Err(Error::DuplicateVertex(vertex.id().to_string()));
        }

        let handle = VertexId::new(self.vertices.len());
        self.index.insert(vertex.id().to_string(), handle);
        self.vertices.push(vertex);
        self.outgoing.push(Vec::new());

        Ok(handle)
    }

    /// Adds a directed edge from `source` to `target` with the given weight.
    ///
    /// The edge is appended to the outgoing list of `source`. Multiple edges between the same
    /// pair of vertices are allowed; no deduplication takes place.
    ///
    /// # Arguments
    ///
    /// * `source` - The source vertex, by handle or identifier
    /// * `target` - The target vertex, by handle or identifier
    /// * `weight` - Signed edge weight
    ///
    /// # Returns
    ///
    /// The `EdgeId` assigned to the new edge.
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] if an endpoint identifier is not registered
    /// - [`Error::InvalidEndpoint`] if an endpoint handle does not belong to this graph
    ///
    /// The graph is left unchanged on error.
    pub fn add_edge<'s, 't>(
        &mut self,
        source: impl Into<VertexKey<'s>>,
        target: impl Into<VertexKey<'t>>,
        weight: i32,
    ) -> Result<EdgeId> {
        let source = self.resolve_endpoint(source.into(), "source")?;
        let target = self.resolve_endpoint(target.into(), "target")?;

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(source, target, weight));
        self.outgoing[source.index()].push(id);

        Ok(id)
    }

    /// Resolves a vertex reference to its handle.
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] if the identifier is not registered
    /// - [`Error::InvalidEndpoint`] if the handle does not belong to this graph
    pub fn resolve<'k>(&self, key: impl Into<VertexKey<'k>>) -> Result<VertexId> {
        self.resolve_endpoint(key.into(), "vertex")
    }

    fn resolve_endpoint(&self, key: VertexKey<'_>, endpoint: &'static str) -> Result<VertexId> {
        match key {
            VertexKey::Handle(handle) if handle.index() < self.vertices.len() => Ok(handle),
            VertexKey::Handle(handle) => Err(Error::InvalidEndpoint {
                endpoint,
                vertex: handle.to_string(),
                vertex_count: self.vertices.len(),
            }),
            VertexKey::Ident(ident) => self
                .index
                .get(ident)
                .copied()
                .ok_or_else(|| Error::VertexNotFound(ident.to_string())),
        }
    }

    /// Looks up a vertex handle by identifier, returning `None` if it is not registered.
    #[must_use]
    pub fn find_vertex(&self, ident: &str) -> Option<VertexId> {
        self.index.get(ident).copied()
    }

    /// Returns the vertex referenced by `key`, or `None` if there is no such vertex.
    ///
    /// This is the non-failing lookup; use [`resolve`](Self::resolve) when a missing vertex is
    /// an error.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use pathscope::graph::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new();
    /// graph.add_vertex("s")?;
    ///
    /// assert_eq!(graph.get_vertex("s").map(|v| v.id()), Some("s"));
    /// assert!(graph.get_vertex("missing").is_none());
    /// ```
    #[must_use]
    pub fn get_vertex<'k>(&self, key: impl Into<VertexKey<'k>>) -> Option<&Vertex> {
        let handle = self.resolve(key).ok()?;
        self.vertices.get(handle.index())
    }

    /// Returns the vertex with the given handle.
    #[must_use]
    pub fn vertex(&self, vertex: VertexId) -> Option<&Vertex> {
        self.vertices.get(vertex.index())
    }

    pub(crate) fn vertex_mut(&mut self, vertex: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(vertex.index())
    }

    /// Returns `true` if `key` references a vertex of this graph.
    #[must_use]
    pub fn contains_vertex<'k>(&self, key: impl Into<VertexKey<'k>>) -> bool {
        self.resolve(key).is_ok()
    }

    /// Returns the edge with the given handle.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edges.get(edge.index())
    }

    /// Returns the first edge from `source` to `target`, in insertion order.
    ///
    /// Returns `None` if either vertex is unknown or no such edge exists. When parallel edges
    /// exist only the first one is reported; enumerate
    /// [`outgoing_edges`](Self::outgoing_edges) to see all of them.
    #[must_use]
    pub fn find_edge<'s, 't>(
        &self,
        source: impl Into<VertexKey<'s>>,
        target: impl Into<VertexKey<'t>>,
    ) -> Option<EdgeId> {
        let source = self.resolve(source).ok()?;
        let target = self.resolve(target).ok()?;

        self.outgoing[source.index()]
            .iter()
            .copied()
            .find(|edge| self.edges[edge.index()].target() == target)
    }

    /// Returns `true` if at least one edge leads from `source` to `target`.
    #[must_use]
    pub fn contains_edge<'s, 't>(
        &self,
        source: impl Into<VertexKey<'s>>,
        target: impl Into<VertexKey<'t>>,
    ) -> bool {
        self.find_edge(source, target).is_some()
    }

    /// Returns the display label `(sourceId, targetId)` of an edge.
    ///
    /// Labels are not unique when parallel edges exist.
    #[must_use]
    pub fn edge_label(&self, edge: EdgeId) -> Option<String> {
        let edge = self.edge(edge)?;
        Some(format!(
            "({}, {})",
            self.vertices[edge.source().index()].id(),
            self.vertices[edge.target().index()].id()
        ))
    }

    /// Returns an iterator over the vertices reachable from `key` by one outgoing edge.
    ///
    /// Targets are yielded in edge insertion order, once per edge.
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] if the identifier is not registered
    /// - [`Error::InvalidEndpoint`] if the handle does not belong to this graph
    pub fn adjacent<'k>(
        &self,
        key: impl Into<VertexKey<'k>>,
    ) -> Result<impl Iterator<Item = VertexId> + '_> {
        let vertex = self.resolve(key)?;
        Ok(self.successors(vertex))
    }

    /// Returns an iterator over the outgoing edges of `vertex`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex in the graph.
    pub fn outgoing_edges(&self, vertex: VertexId) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.outgoing[vertex.index()]
            .iter()
            .map(|&edge| (edge, &self.edges[edge.index()]))
    }

    /// Returns an iterator over the successors of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex in the graph.
    pub fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.outgoing[vertex.index()]
            .iter()
            .map(|&edge| self.edges[edge.index()].target())
    }

    /// Returns the number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns an iterator over all vertex handles, in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Returns an iterator over all vertices with their handles, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, vertex)| (VertexId::new(i), vertex))
    }

    /// Returns an iterator over all edge handles in store order.
    ///
    /// Store order groups edges by source vertex (vertex insertion order), then by per-source
    /// insertion order. This differs from ascending `EdgeId` order when edges were not added
    /// source by source.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.outgoing.iter().flatten().copied()
    }

    /// Returns an iterator over all edges with their handles, in store order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edge_ids().map(|edge| (edge, &self.edges[edge.index()]))
    }

    /// Runs a depth-first search over the whole graph and records the result on the vertices.
    ///
    /// Every vertex is visited: roots are taken in vertex insertion order, restarting from
    /// each vertex still white. After the traversal each vertex carries its final color
    /// (black), its discovery/finish stamps and its DFS parent as `predecessor` (roots have
    /// none).
    ///
    /// # Arguments
    ///
    /// * `on_started` - Called when a vertex is discovered
    /// * `on_finished` - Called when a vertex's exploration completes
    ///
    /// # Returns
    ///
    /// The traversal state, identical to what was written onto the vertices.
    pub fn perform_dfs(
        &mut self,
        on_started: impl FnMut(VertexId),
        on_finished: impl FnMut(VertexId),
    ) -> DfsState {
        let state = depth_first_search(&*self, on_started, on_finished);

        for (index, vertex) in self.vertices.iter_mut().enumerate() {
            let handle = VertexId::new(index);
            vertex.color = state.color(handle);
            vertex.opened_at = state.opened_at(handle);
            vertex.closed_at = state.closed_at(handle);
            vertex.predecessor = state.parent(handle);
        }

        state
    }

    /// Computes a topological order of the vertices.
    ///
    /// Runs [`perform_dfs`](Self::perform_dfs), collects vertices as they finish and returns
    /// them in reverse finish order.
    ///
    /// The graph must be acyclic. No cycle check is performed; on a cyclic graph the order
    /// is meaningless. See [`is_acyclic`](crate::graph::algorithms::is_acyclic).
    pub fn perform_topological_sort(&mut self) -> Vec<VertexId> {
        let mut finished = Vec::with_capacity(self.vertices.len());
        self.perform_dfs(|_| {}, |vertex| finished.push(vertex));
        finished.reverse();
        finished
    }
}

impl GraphBase for WeightedGraph {
    fn vertex_count(&self) -> usize {
        WeightedGraph::vertex_count(self)
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        WeightedGraph::vertex_ids(self)
    }
}

impl Successors for WeightedGraph {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        WeightedGraph::successors(self, vertex)
    }
}

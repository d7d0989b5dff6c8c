use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant describes a misuse of the graph construction or lookup surface. These are
/// raised at the offending call and never recovered internally; a failed call leaves the graph
/// unchanged.
///
/// A negative-weight cycle found by Bellman-Ford is *not* an error. It is reported as a normal
/// outcome (`Ok(false)`) of [`crate::shortest::bellman_ford`].
///
/// # Error Categories
///
/// ## Construction Errors
/// - [`Error::InvalidIdentifier`] - Vertex created with an empty identifier
/// - [`Error::DuplicateVertex`] - Vertex identifier already registered
///
/// ## Lookup Errors
/// - [`Error::VertexNotFound`] - Identifier string not registered in the graph
/// - [`Error::InvalidEndpoint`] - Vertex handle that does not belong to the graph
///
/// # Examples
///
/// ```rust
/// use pathscope::{Error, graph::WeightedGraph};
///
/// let mut graph = WeightedGraph::new();
/// graph.add_vertex("s")?;
///
/// match graph.add_edge("s", "t", 3) {
///     Err(Error::VertexNotFound(id)) => assert_eq!(id, "t"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// # Ok::<(), pathscope::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex was constructed with an empty identifier.
    #[error("Vertex identifier must not be empty")]
    InvalidIdentifier,

    /// A vertex with this identifier is already registered in the graph.
    ///
    /// The associated value is the rejected identifier.
    #[error("Vertex [{0}] already exists")]
    DuplicateVertex(String),

    /// The identifier does not name a vertex of the graph.
    ///
    /// Raised by edge creation, adjacency lookup and algorithm entry points when they are
    /// handed an identifier string that was never registered.
    #[error("Vertex [{0}] not found")]
    VertexNotFound(String),

    /// A vertex handle does not belong to the graph.
    ///
    /// Handles are plain indices, so a handle obtained from a different (larger) graph can be
    /// passed by mistake. The error names the offending side of the edge.
    ///
    /// # Fields
    ///
    /// * `endpoint` - Which side was invalid (`"source"`, `"target"` or `"vertex"`)
    /// * `vertex` - Display form of the rejected handle
    /// * `vertex_count` - Number of vertices the graph actually holds
    #[error("{endpoint} vertex {vertex} does not exist in graph with {vertex_count} vertices")]
    InvalidEndpoint {
        /// Which endpoint was rejected
        endpoint: &'static str,
        /// The rejected vertex handle, formatted
        vertex: String,
        /// Number of vertices in the graph
        vertex_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidIdentifier.to_string(),
            "Vertex identifier must not be empty"
        );
        assert_eq!(
            Error::DuplicateVertex("s".into()).to_string(),
            "Vertex [s] already exists"
        );
        assert_eq!(
            Error::VertexNotFound("q".into()).to_string(),
            "Vertex [q] not found"
        );

        let err = Error::InvalidEndpoint {
            endpoint: "target",
            vertex: "v9".into(),
            vertex_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "target vertex v9 does not exist in graph with 3 vertices"
        );
    }
}

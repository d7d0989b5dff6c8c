//! # pathscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! from the pathscope library. Import it to build a graph and run a shortest-path algorithm
//! with a single `use`.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all pathscope operations
pub use crate::Error;

/// The result type used throughout pathscope
pub use crate::Result;

// ================================================================================================
// Graph Store
// ================================================================================================

/// The graph store and its element types
pub use crate::graph::{Edge, EdgeId, Vertex, VertexColor, VertexId, VertexKey, WeightedGraph};

/// Capability traits the traversal algorithms are written against
pub use crate::graph::{GraphBase, Successors};

/// Traversal algorithms
pub use crate::graph::algorithms::{depth_first_search, is_acyclic, topological_sort, DfsState};

// ================================================================================================
// Shortest Paths
// ================================================================================================

/// Shortest-path algorithms and path reconstruction
pub use crate::shortest::{
    bellman_ford, bellman_ford_with_observer, dag_shortest_paths, shortest_path,
    RelaxationObserver,
};

/// Relaxation primitives
pub use crate::shortest::{initialize_single_source, relax, should_relax};

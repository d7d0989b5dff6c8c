//! Weighted directed graph infrastructure.
//!
//! This module provides the graph store the shortest-path algorithms operate on, together
//! with the traversal algorithms they build upon.
//!
//! # Architecture
//!
//! - **Core Types**: [`VertexId`], [`EdgeId`], [`Vertex`], [`Edge`] and [`WeightedGraph`]
//! - **Traits**: [`GraphBase`] and [`Successors`], the capability surface the traversal
//!   algorithms are written against
//! - **Algorithms**: depth-first search, topological sort and the acyclicity check in
//!   [`algorithms`]
//!
//! # Design Principles
//!
//! ## Strongly-Typed Handles
//!
//! Vertices and edges are addressed by newtype index handles. Predecessor links are handles
//! too, so the graph stays the only owner of its vertices.
//!
//! ## Append-Only Storage
//!
//! Vertices and edges are added once and never removed. Algorithm runs only update the
//! per-run state stored on each vertex.
//!
//! # Usage Examples
//!
//! ```rust,ignore
//! use pathscope::graph::{WeightedGraph, algorithms};
//!
//! let mut graph = WeightedGraph::new();
//! let r = graph.add_vertex("r")?;
//! let s = graph.add_vertex("s")?;
//! let t = graph.add_vertex("t")?;
//! graph.add_edge(r, s, 5)?;
//! graph.add_edge(s, t, 2)?;
//!
//! assert!(algorithms::is_acyclic(&graph));
//! assert_eq!(algorithms::topological_sort(&graph), vec![r, s, t]);
//! ```

mod edge;
mod traits;
mod vertex;
mod weighted;

pub mod algorithms;

pub use edge::{Edge, EdgeId};
pub use traits::{GraphBase, Successors};
pub use vertex::{Vertex, VertexColor, VertexId, VertexKey};
pub use weighted::WeightedGraph;

//! Single-source shortest paths over a [`WeightedGraph`](crate::graph::WeightedGraph).
//!
//! Two algorithms share one relaxation core:
//!
//! - [`bellman_ford`] works on any graph, accepts negative weights and reports whether a
//!   negative-weight cycle is reachable from the source
//! - [`dag_shortest_paths`] works on acyclic graphs only and settles all distances in a single
//!   sweep over a topological order
//!
//! Both write their results onto the vertices of the graph: [`Vertex::distance`] holds the
//! shortest known distance from the source (`f64::INFINITY` if unreachable), and
//! [`Vertex::predecessor`] the previous vertex on that path. [`shortest_path`] turns the
//! predecessor chain back into a vertex sequence.
//!
//! A new run resets the state of the previous one. Running from an unknown source fails
//! before anything is reset.
//!
//! [`Vertex::distance`]: crate::graph::Vertex::distance
//! [`Vertex::predecessor`]: crate::graph::Vertex::predecessor
//!
//! # Examples
//!
//! ```rust,ignore
//! use pathscope::prelude::*;
//!
//! let mut graph = WeightedGraph::new();
//! for id in ["s", "t", "x"] {
//!     graph.add_vertex(id)?;
//! }
//! graph.add_edge("s", "t", 6)?;
//! graph.add_edge("s", "x", 9)?;
//! graph.add_edge("t", "x", -4)?;
//!
//! if bellman_ford(&mut graph, "s")? {
//!     let path = shortest_path(&graph, "x")?.unwrap_or_default();
//!     assert_eq!(path.len(), 3);
//! }
//! ```

mod bellman_ford;
mod dag;
mod paths;
mod relax;

pub use bellman_ford::{bellman_ford, bellman_ford_with_observer, RelaxationObserver};
pub use dag::dag_shortest_paths;
pub use paths::shortest_path;
pub use relax::{initialize_single_source, relax, should_relax};

// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # pathscope
//!
//! Single-source shortest paths over small, explicitly constructed weighted directed graphs.
//!
//! `pathscope` keeps an in-memory graph of named vertices and weighted edges, and runs two
//! classic algorithms over it:
//!
//! - **Bellman-Ford** for general graphs with negative weights, including detection of
//!   negative-weight cycles reachable from the source
//! - **DAG shortest paths** for acyclic graphs, relaxing edges in topological order
//!
//! Both are built on a shared depth-first search that stamps every vertex with discovery and
//! finish times, a topological sort derived from it, and the usual single-source relaxation
//! primitives.
//!
//! ## Quick Start
//!
//! ```rust
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
//! assert!(bellman_ford(&mut graph, "s")?);
//! assert_eq!(graph.get_vertex("x").map(|v| v.distance()), Some(2.0));
//! # Ok::<(), pathscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and functions
//! - [`graph`] - The graph store, vertex and edge types, DFS and topological sort
//! - [`shortest`] - Relaxation, Bellman-Ford, DAG shortest paths and path reconstruction
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Misuse of the graph surface (empty or duplicate identifiers, unknown vertices, handles
//! from another graph) is reported through [`Error`]. A negative-weight cycle is not an
//! error; Bellman-Ford returns `Ok(false)` for it.
//!
//! ```rust
//! use pathscope::{graph::WeightedGraph, Error};
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_vertex("s")?;
//!
//! match graph.add_vertex("s") {
//!     Err(Error::DuplicateVertex(id)) => println!("{id} is already taken"),
//!     Err(e) => println!("Other error: {e}"),
//!     Ok(_) => unreachable!(),
//! }
//! # Ok::<(), pathscope::Error>(())
//! ```
//!
//! ## Logging
//!
//! Algorithm runs emit `debug` and `trace` records through the [`log`](https://docs.rs/log)
//! facade, and a `warn` record for every edge that proves a negative cycle. Install any
//! logger to see them.
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//!
//! # Compare Bellman-Ford and DAG shortest paths on random acyclic graphs
//! cargo +nightly fuzz run shortest_paths --release
//! ```

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use pathscope::prelude::*;
///
/// let mut graph = WeightedGraph::new();
/// let r = graph.add_vertex("r")?;
/// let order = dag_shortest_paths(&mut graph, r)?;
/// assert_eq!(order, vec![r]);
/// # Ok::<(), pathscope::Error>(())
/// ```
pub mod prelude;

/// Weighted directed graph storage and traversal.
pub mod graph;

/// Single-source shortest-path algorithms.
pub mod shortest;

/// `pathscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
///
/// # Example
///
/// ```rust
/// use pathscope::{graph::{VertexId, WeightedGraph}, Result};
///
/// fn build() -> Result<(WeightedGraph, VertexId)> {
///     let mut graph = WeightedGraph::new();
///     let s = graph.add_vertex("s")?;
///     Ok((graph, s))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `pathscope` Error type
///
/// The main error type for all operations in this crate. See [`Error`] for the variants.
pub use error::Error;

//! Traversal algorithms over weighted graphs.
//!
//! These algorithms only need the [`Successors`](crate::graph::Successors) capability, so they
//! run on any graph implementing it.
//!
//! # Available Algorithms
//!
//! - [`depth_first_search`] - Whole-graph DFS with discovery/finish callbacks, returning a
//!   [`DfsState`] with colors, timestamps and parents
//! - [`topological_sort`] - Reverse DFS finish order (requires an acyclic graph, unchecked)
//! - [`is_acyclic`] - Back-edge check for the DAG precondition
//!
//! | Algorithm | Time Complexity |
//! |-----------|-----------------|
//! | DFS | O(V + E) |
//! | Topological Sort | O(V + E) |
//! | Acyclicity check | O(V + E) |

mod cycles;
mod topological;
mod traversal;

pub use cycles::is_acyclic;
pub use topological::topological_sort;
pub use traversal::{depth_first_search, DfsState};

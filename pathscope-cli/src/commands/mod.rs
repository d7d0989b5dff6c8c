pub mod bellman_ford;
pub mod common;
pub mod dag;
pub mod dfs;

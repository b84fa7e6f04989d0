//! In-memory graph operations — the core data structure.

pub mod adjacency;
pub mod traversal;

pub use adjacency::Graph;
pub use traversal::{bfs_for_each, bfs_for_each_discovered, dfs_for_each};

//! edgewalk — an in-memory adjacency-list graph library.
//!
//! Vertices are dense indices `0..n`; each vertex owns an ordered
//! neighbor list. On top of the structure sit classical algorithms:
//! BFS/DFS visitor traversal, mother-vertex detection, transitive
//! closure as a dense matrix, k-core extraction, single-source
//! distances, and exhaustive simple-path enumeration. A text format
//! for graph descriptions and a small CLI sit at the edges.

pub mod algo;
pub mod cli;
pub mod graph;
pub mod seq;
pub mod text;
pub mod types;

// Re-export commonly used items at the crate root
pub use algo::{
    all_simple_paths, count_at_distance, distances_from, find_mother_vertex, k_core,
    transitive_closure,
};
pub use graph::{bfs_for_each, bfs_for_each_discovered, dfs_for_each, Graph};
pub use seq::longest_zero_sum_run;
pub use text::{
    adjacency_to_string, graphs_to_text, read_graphs, read_graphs_from_file, write_adjacency,
    write_graphs,
};
pub use types::{GraphError, GraphResult, Matrix, Path, UNREACHABLE};

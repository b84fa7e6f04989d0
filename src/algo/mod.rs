//! Algorithms built on the core graph structure.

pub mod closure;
pub mod distance;
pub mod kcore;
pub mod mother;
pub mod paths;

pub use closure::transitive_closure;
pub use distance::{count_at_distance, distances_from};
pub use kcore::k_core;
pub use mother::find_mother_vertex;
pub use paths::all_simple_paths;

//! Shared data types for the edgewalk library.

pub mod error;
pub mod matrix;
pub mod path;

pub use error::{GraphError, GraphResult};
pub use matrix::Matrix;
pub use path::Path;

/// Sentinel distance for vertices the source cannot reach.
pub const UNREACHABLE: usize = usize::MAX;

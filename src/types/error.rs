//! Error types for the edgewalk library.

use thiserror::Error;

/// All errors that can occur in the edgewalk library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex index is outside the graph's dense index range.
    #[error("Vertex index {vertex} out of range for graph of {len} vertices")]
    VertexOutOfRange { vertex: usize, len: usize },

    /// Matrix literal rows have inconsistent lengths.
    #[error("Ragged matrix literal: row {row} has {got} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Text input contained a token that is not a non-negative integer.
    #[error("Invalid token in graph description: {0:?}")]
    Parse(String),

    /// Text input ended before the declared counts were satisfied.
    #[error("Graph description ended unexpectedly")]
    UnexpectedEof,

    /// A multi-graph file holds fewer graphs than the requested index.
    #[error("Graph index {index} out of range: file holds {len} graphs")]
    GraphIndexOutOfRange { index: usize, len: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for edgewalk operations.
pub type GraphResult<T> = Result<T, GraphError>;

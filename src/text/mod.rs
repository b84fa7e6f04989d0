//! Text format collaborators — graph descriptions in and out.

pub mod reader;
pub mod writer;

pub use reader::{read_graphs, read_graphs_from_file};
pub use writer::{adjacency_to_string, graphs_to_text, write_adjacency, write_graphs};

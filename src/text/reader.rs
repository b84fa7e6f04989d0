//! Reads whitespace-separated graph descriptions.
//!
//! The format is a stream of non-negative integers: a leading graph
//! count, then per graph a `(vertex_count, edge_count)` pair followed by
//! `edge_count` vertex-index pairs, each added as an undirected edge.
//! Whitespace of any kind separates tokens; line structure is not
//! significant.

use std::path::Path;
use std::str::SplitWhitespace;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
        }
    }

    fn next_usize(&mut self) -> GraphResult<usize> {
        let token = self.inner.next().ok_or(GraphError::UnexpectedEof)?;
        token
            .parse()
            .map_err(|_| GraphError::Parse(token.to_string()))
    }
}

/// Parse every graph description in `input`.
///
/// Malformed input — a non-integer token, a truncated stream, or an edge
/// endpoint outside the declared vertex range — is an error.
pub fn read_graphs(input: &str) -> GraphResult<Vec<Graph>> {
    let mut tokens = Tokens::new(input);

    let num_graphs = tokens.next_usize()?;
    let mut graphs = Vec::with_capacity(num_graphs);
    for _ in 0..num_graphs {
        graphs.push(read_single_graph(&mut tokens)?);
    }

    Ok(graphs)
}

/// Read and parse a graph description file.
pub fn read_graphs_from_file(path: &Path) -> GraphResult<Vec<Graph>> {
    let text = std::fs::read_to_string(path)?;
    read_graphs(&text)
}

fn read_single_graph(tokens: &mut Tokens<'_>) -> GraphResult<Graph> {
    let num_vertices = tokens.next_usize()?;
    let num_edges = tokens.next_usize()?;

    let mut graph = Graph::new(num_vertices);
    for _ in 0..num_edges {
        let a = tokens.next_usize()?;
        let b = tokens.next_usize()?;
        graph.add_undirected_edge(a, b)?;
    }

    Ok(graph)
}

//! Renders graphs as adjacency listings and graph description text.

use std::fmt::Write as _;
use std::io::Write;

use crate::graph::Graph;
use crate::types::GraphResult;

/// Render the adjacency structure, one line per vertex in index order:
/// the vertex index, then `-> n` for each neighbor in adjacency order
/// (not sorted).
pub fn adjacency_to_string(graph: &Graph) -> String {
    let mut out = String::new();
    for v in 0..graph.vertex_count() {
        let _ = write!(out, "{}", v);
        for &t in graph.adjacency(v) {
            let _ = write!(out, "-> {}", t);
        }
        out.push('\n');
    }
    out
}

/// Write the adjacency listing of [`adjacency_to_string`] to a writer.
pub fn write_adjacency(graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
    writer.write_all(adjacency_to_string(graph).as_bytes())?;
    Ok(())
}

/// Serialize graphs in the numeric description format the reader
/// accepts: graph count, then per graph `vertex_count edge_count` and
/// one endpoint pair per line.
///
/// Each undirected edge is emitted once, smaller endpoint first.
/// Re-parsing the output yields graphs with the same neighbor multiset
/// per vertex; adjacency order within a list is not preserved.
pub fn graphs_to_text(graphs: &[Graph]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", graphs.len());
    for graph in graphs {
        let pairs = undirected_edge_pairs(graph);
        let _ = writeln!(out, "{} {}", graph.vertex_count(), pairs.len());
        for (a, b) in pairs {
            let _ = writeln!(out, "{} {}", a, b);
        }
    }
    out
}

/// Write the serialization of [`graphs_to_text`] to a writer.
pub fn write_graphs(graphs: &[Graph], writer: &mut impl Write) -> GraphResult<()> {
    writer.write_all(graphs_to_text(graphs).as_bytes())?;
    Ok(())
}

/// Recover one pair per undirected edge. A normal edge appears in both
/// endpoints' lists and is taken from the smaller endpoint's; a
/// self-loop puts two entries in its own list and counts once per two.
fn undirected_edge_pairs(graph: &Graph) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for a in 0..graph.vertex_count() {
        let mut self_loops = 0;
        for &b in graph.adjacency(a) {
            if b > a {
                pairs.push((a, b));
            } else if b == a {
                self_loops += 1;
            }
        }
        for _ in 0..self_loops / 2 {
            pairs.push((a, a));
        }
    }
    pairs
}

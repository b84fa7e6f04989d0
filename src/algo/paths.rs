//! Exhaustive enumeration of simple paths.

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, Path};

/// Every simple path (no repeated vertex) from `source` to `target`, by
/// DFS backtracking in adjacency-list order.
///
/// Reaching `target` terminates that branch: a recorded path is not
/// extended further even if the target has outgoing edges. There is no
/// pruning beyond loop avoidance, so the number of paths — and the
/// running time — is exponential on dense graphs. Intended for small
/// inputs; bound externally if needed.
pub fn all_simple_paths(graph: &Graph, source: usize, target: usize) -> GraphResult<Vec<Path>> {
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(Vec::new());
    }
    for v in [source, target] {
        if v >= n {
            return Err(GraphError::VertexOutOfRange { vertex: v, len: n });
        }
    }

    let mut found = Vec::new();
    let mut path = Path::new(source);
    search(graph, target, &mut path, &mut found);
    Ok(found)
}

fn search(graph: &Graph, target: usize, path: &mut Path, found: &mut Vec<Path>) {
    let last = match path.terminal() {
        Some(v) => v,
        None => return,
    };
    if last == target {
        found.push(path.clone());
        return;
    }
    for &v in graph.adjacency(last) {
        if path.try_push(v) {
            search(graph, target, path, found);
            path.pop();
        }
    }
}

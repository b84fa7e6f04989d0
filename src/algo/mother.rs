//! Mother-vertex detection.

use crate::graph::{dfs_for_each, Graph};
use crate::types::GraphResult;

/// Find a mother vertex: a vertex from which every other vertex is
/// reachable via directed edges. Returns `None` when the graph has no
/// mother vertex (or no vertices at all).
///
/// Two passes. The first builds a DFS forest over vertices in increasing
/// index order, keeping the last vertex that started a fresh DFS as the
/// candidate. A graph has a mother vertex iff it has exactly one sink
/// strongly-connected component, and that last root lies in it, so a
/// single confirming DFS from the candidate decides the answer.
pub fn find_mother_vertex(graph: &Graph) -> GraphResult<Option<usize>> {
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(None);
    }

    let mut visited = vec![false; n];
    let mut candidate = 0;

    for i in 0..n {
        if visited[i] {
            continue;
        }
        dfs_for_each(graph, i, |v| visited[v] = true)?;
        candidate = i;
    }

    for b in visited.iter_mut() {
        *b = false;
    }
    dfs_for_each(graph, candidate, |v| visited[v] = true)?;

    if visited.iter().all(|&b| b) {
        Ok(Some(candidate))
    } else {
        Ok(None)
    }
}

//! Visitor-callback graph traversal (BFS and DFS).

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// BFS from `start`, invoking `f` once per discovered vertex.
///
/// Vertices are discovered in level order: every invocation for a vertex
/// happens before any invocation for a strictly farther vertex.
/// Adjacency-list order breaks ties within a level. Read-only; allocates
/// one visited array for the call.
///
/// An empty graph is a no-op; otherwise `start` must be a valid index.
pub fn bfs_for_each<F>(graph: &Graph, start: usize, mut f: F) -> GraphResult<()>
where
    F: FnMut(usize),
{
    bfs_for_each_discovered(graph, start, |v, _| f(v))
}

/// BFS variant whose visitor receives `(discovered, discovered_from)`.
///
/// The start vertex is reported as discovered from itself. Used by
/// distance computation, which needs the predecessor to derive the level.
pub fn bfs_for_each_discovered<F>(graph: &Graph, start: usize, mut f: F) -> GraphResult<()>
where
    F: FnMut(usize, usize),
{
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(());
    }
    if start >= n {
        return Err(GraphError::VertexOutOfRange {
            vertex: start,
            len: n,
        });
    }

    let mut visited = vec![false; n];
    let mut to_visit: VecDeque<usize> = VecDeque::new();

    visited[start] = true;
    f(start, start);
    to_visit.push_back(start);

    while let Some(current) = to_visit.pop_front() {
        for &v in graph.adjacency(current) {
            if !visited[v] {
                visited[v] = true;
                f(v, current);
                to_visit.push_back(v);
            }
        }
    }

    Ok(())
}

/// DFS from `start`, invoking `f` once per discovered vertex in
/// pre-order, following adjacency-list order.
///
/// Recursive: stack depth is bounded by the longest discovered path, so
/// a path-shaped graph recurses to O(n) depth. Read-only; allocates one
/// visited array for the call.
///
/// An empty graph is a no-op; otherwise `start` must be a valid index.
pub fn dfs_for_each<F>(graph: &Graph, start: usize, mut f: F) -> GraphResult<()>
where
    F: FnMut(usize),
{
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(());
    }
    if start >= n {
        return Err(GraphError::VertexOutOfRange {
            vertex: start,
            len: n,
        });
    }

    let mut visited = vec![false; n];
    visited[start] = true;
    f(start);
    dfs_helper(graph, start, &mut f, &mut visited);

    Ok(())
}

fn dfs_helper<F>(graph: &Graph, current: usize, f: &mut F, visited: &mut [bool])
where
    F: FnMut(usize),
{
    for &v in graph.adjacency(current) {
        if visited[v] {
            continue;
        }
        visited[v] = true;
        f(v);
        dfs_helper(graph, v, f, visited);
    }
}

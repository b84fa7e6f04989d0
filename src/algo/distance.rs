//! Single-source unweighted shortest distances.

use crate::graph::{bfs_for_each_discovered, Graph};
use crate::types::{GraphResult, UNREACHABLE};

/// Hop-count distances from `source` to every vertex.
///
/// `distances[source]` is 0; vertices the source cannot reach keep the
/// [`UNREACHABLE`] sentinel. BFS discovers each vertex at its shortest
/// level, so each distance is written as `1 + distance[predecessor]` at
/// first discovery. The write is guarded against a value that is already
/// set, which also covers the source reporting itself as its own
/// predecessor.
pub fn distances_from(graph: &Graph, source: usize) -> GraphResult<Vec<usize>> {
    let n = graph.vertex_count();
    let mut distances = vec![UNREACHABLE; n];
    if n == 0 {
        return Ok(distances);
    }

    if source < n {
        distances[source] = 0;
    }
    bfs_for_each_discovered(graph, source, |v, from| {
        if distances[v] == UNREACHABLE {
            distances[v] = distances[from] + 1;
        }
    })?;

    Ok(distances)
}

/// How many entries of a distance vector equal `distance`. Passing
/// [`UNREACHABLE`] counts the vertices the source could not reach.
pub fn count_at_distance(distances: &[usize], distance: usize) -> usize {
    distances.iter().filter(|&&d| d == distance).count()
}

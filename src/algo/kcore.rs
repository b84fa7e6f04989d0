//! K-core extraction by fixpoint pruning.

use log::debug;

use crate::graph::Graph;
use crate::types::GraphResult;

/// Prune the graph down to its k-core: the maximal subgraph in which
/// every vertex has degree at least `k`. Takes the graph by value and
/// returns the pruned graph; callers keep a clone if they still need
/// the original.
///
/// Each pass scans the live vertices in increasing index order and
/// removes any whose degree is below `k`. A removal renumbers the
/// vertices above it, so the scan cursor stays put after removing.
/// Passes repeat until one removes nothing; the vertex count strictly
/// decreases across productive passes, so at most `n` passes run.
pub fn k_core(mut graph: Graph, k: usize) -> GraphResult<Graph> {
    let mut pass = 0;
    loop {
        pass += 1;
        let before = graph.vertex_count();

        let mut v = 0;
        while v < graph.vertex_count() {
            if graph.adjacency(v).len() < k {
                graph.remove_vertex(v)?;
            } else {
                v += 1;
            }
        }

        let removed = before - graph.vertex_count();
        debug!(
            "k-core pass {}: removed {}, {} vertices remain",
            pass,
            removed,
            graph.vertex_count()
        );
        if removed == 0 {
            return Ok(graph);
        }
    }
}

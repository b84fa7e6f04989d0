//! Transitive closure as a dense reachability matrix.

use crate::graph::Graph;
use crate::types::Matrix;

/// Compute the `n x n` reachability matrix of the graph: cell `(i, j)`
/// is 1 iff `j` is reachable from `i` along stored adjacency entries.
/// Every vertex reaches itself, so the diagonal is always 1.
///
/// One DFS per source vertex. The matrix row doubles as the visited set
/// for its own DFS: a cell already at 1 prunes the descent.
pub fn transitive_closure(graph: &Graph) -> Matrix {
    let n = graph.vertex_count();
    let mut closure = Matrix::new(n, n);

    for i in 0..n {
        mark_reachable(graph, i, i, &mut closure);
    }

    closure
}

fn mark_reachable(graph: &Graph, from: usize, to: usize, closure: &mut Matrix) {
    closure[(from, to)] = 1;
    for &v in graph.adjacency(to) {
        if closure[(from, v)] == 0 {
            mark_reachable(graph, from, v, closure);
        }
    }
}

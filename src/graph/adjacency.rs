//! Core graph structure — dense vertex indices + adjacency lists.

use crate::types::{GraphError, GraphResult};

/// An in-memory graph over the dense vertex range `0..n`.
///
/// Each vertex owns an ordered neighbor list. Duplicate edges and
/// self-loops are allowed; the structure is a multigraph in practice.
///
/// The graph carries a single whole-graph directedness flag: it starts
/// undirected and flips to directed the first time a directed edge is
/// added, permanently. [`Graph::remove_edge`] consults this flag (not the
/// history of the specific edge) when deciding whether to remove the
/// reciprocal entry, so mixing directed and undirected insertions changes
/// removal behavior for all edges. Callers who need per-edge semantics
/// must track them externally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Per-vertex neighbor lists, insertion order.
    adj: Vec<Vec<usize>>,
    /// False once any directed edge has been added.
    undirected: bool,
}

impl Graph {
    /// Create a graph of `n` isolated vertices, flagged undirected.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            undirected: true,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Total number of stored adjacency entries. Each undirected edge
    /// contributes two entries, each directed edge one.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Whether no directed edge has ever been added.
    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    fn check_vertex(&self, v: usize) -> GraphResult<()> {
        if v >= self.adj.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                len: self.adj.len(),
            });
        }
        Ok(())
    }

    /// Add an undirected edge: `b` is appended to `a`'s list and `a` to
    /// `b`'s. Self-loops and duplicates are allowed.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize) -> GraphResult<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        self.adj[a].push(b);
        self.adj[b].push(a);
        Ok(())
    }

    /// Add a directed edge `src -> dst` and permanently flag the graph
    /// as directed.
    pub fn add_directed_edge(&mut self, src: usize, dst: usize) -> GraphResult<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        self.undirected = false;
        self.adj[src].push(dst);
        Ok(())
    }

    /// The ordered neighbor list of `v`.
    pub fn neighbours_of(&self, v: usize) -> GraphResult<&[usize]> {
        self.check_vertex(v)?;
        Ok(&self.adj[v])
    }

    /// Length of `v`'s neighbor list (out-degree for directed graphs).
    pub fn degree_of(&self, v: usize) -> GraphResult<usize> {
        self.check_vertex(v)?;
        Ok(self.adj[v].len())
    }

    /// Neighbor list access for algorithms that have already validated
    /// their inputs. Stored indices are kept `< n` by construction.
    pub(crate) fn adjacency(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Remove one occurrence of `b` from `a`'s neighbor list, swapping
    /// with the last entry, so relative neighbor order is not preserved.
    ///
    /// While the graph-wide flag is still undirected, one occurrence of
    /// `a` is removed from `b`'s list as well. Once any directed edge
    /// exists the reciprocal removal never happens, even for edges that
    /// were added with [`Graph::add_undirected_edge`]. A missing
    /// occurrence is a no-op.
    pub fn remove_edge(&mut self, a: usize, b: usize) -> GraphResult<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;

        if let Some(pos) = self.adj[a].iter().position(|&x| x == b) {
            self.adj[a].swap_remove(pos);
        }
        if self.undirected {
            if let Some(pos) = self.adj[b].iter().position(|&x| x == a) {
                self.adj[b].swap_remove(pos);
            }
        }
        Ok(())
    }

    /// Remove vertex `v` and relabel the remaining vertices to keep the
    /// index range dense.
    ///
    /// Detaches `v` edge by edge (under the current flag semantics of
    /// [`Graph::remove_edge`]), then rewrites every adjacency list:
    /// leftover references to `v` — in-edges the detach step cannot see
    /// on directed graphs — are dropped, and indices above `v` shift
    /// down by one. Afterwards every stored index is again valid for the
    /// shrunken range.
    pub fn remove_vertex(&mut self, v: usize) -> GraphResult<()> {
        self.check_vertex(v)?;

        while let Some(&t) = self.adj[v].first() {
            self.remove_edge(v, t)?;
        }

        for list in &mut self.adj {
            list.retain(|&x| x != v);
            for x in list.iter_mut() {
                if *x > v {
                    *x -= 1;
                }
            }
        }
        self.adj.remove(v);
        Ok(())
    }
}

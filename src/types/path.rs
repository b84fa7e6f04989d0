//! Loop-free vertex sequences.

use std::fmt;

use serde::Serialize;

/// An ordered sequence of vertex indices in which no vertex repeats.
///
/// The no-repeat invariant is enforced at extension time: [`Path::try_push`]
/// and [`Path::extended`] refuse a vertex already on the path. Backtracking
/// search can grow and shrink a single buffer via `try_push`/`pop`, or
/// branch with `extended` which clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    vertices: Vec<usize>,
}

impl Path {
    /// A path containing only the given start vertex.
    pub fn new(start: usize) -> Self {
        Self {
            vertices: vec![start],
        }
    }

    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the path holds no vertices (only possible after `pop`).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The last vertex on the path, if any.
    pub fn terminal(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// Whether the path already visits `v`.
    pub fn contains(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    /// Append `v` unless it is already on the path. Returns whether the
    /// path grew.
    pub fn try_push(&mut self, v: usize) -> bool {
        if self.contains(v) {
            return false;
        }
        self.vertices.push(v);
        true
    }

    /// Remove and return the last vertex.
    pub fn pop(&mut self) -> Option<usize> {
        self.vertices.pop()
    }

    /// A new path extended by `v`, or `None` if `v` would close a loop.
    /// The original path is untouched.
    pub fn extended(&self, v: usize) -> Option<Path> {
        if self.contains(v) {
            return None;
        }
        let mut vertices = Vec::with_capacity(self.vertices.len() + 1);
        vertices.extend_from_slice(&self.vertices);
        vertices.push(v);
        Some(Path { vertices })
    }

    /// The vertices in order.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

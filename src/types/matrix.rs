//! Dense integer matrix used for reachability results.

use std::ops::{Index, IndexMut};

use serde::Serialize;

use super::error::{GraphError, GraphResult};

/// Fixed-size `rows x cols` matrix of `i32` cells stored row-major.
///
/// Cells default to 0. Indexing with `m[(r, c)]` is bounds-checked and
/// panics on out-of-range indices, like slice indexing; use
/// [`Matrix::from_rows`] for fallible construction from row data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Create a zero-filled matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Build a matrix from explicit row data.
    ///
    /// Fails with [`GraphError::RaggedMatrix`] unless every row has the
    /// same length as the first.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> GraphResult<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GraphError::RaggedMatrix {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
        }

        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * cols);
        for row in rows {
            data.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One row as a slice. Panics if `r >= rows`.
    pub fn row(&self, r: usize) -> &[i32] {
        assert!(r < self.rows, "row index {} out of range ({})", r, self.rows);
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    fn offset(&self, r: usize, c: usize) -> usize {
        assert!(r < self.rows, "row index {} out of range ({})", r, self.rows);
        assert!(c < self.cols, "col index {} out of range ({})", c, self.cols);
        r * self.cols + c
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i32;

    fn index(&self, (r, c): (usize, usize)) -> &i32 {
        &self.data[self.offset(r, c)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut i32 {
        let off = self.offset(r, c);
        &mut self.data[off]
    }
}

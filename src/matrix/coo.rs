//! Coordinate (COO) edge lists and conversion to CSC

use tricount_algorithms::{GraphError, GraphResult, SparseGraph, VertexId};

/// Sparse matrix as parallel arrays of 0-indexed row and column indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CooMatrix {
    pub nrows: usize,
    pub ncols: usize,
    pub rows: Vec<VertexId>,
    pub cols: Vec<VertexId>,
}

impl CooMatrix {
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            rows: Vec::new(),
            cols: Vec::new(),
        }
    }

    pub fn with_capacity(nrows: usize, ncols: usize, nnz: usize) -> Self {
        Self {
            nrows,
            ncols,
            rows: Vec::with_capacity(nnz),
            cols: Vec::with_capacity(nnz),
        }
    }

    pub fn push(&mut self, row: VertexId, col: VertexId) {
        self.rows.push(row);
        self.cols.push(col);
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Vertices of the graph the matrix describes
    pub fn vertex_count(&self) -> usize {
        self.nrows.max(self.ncols)
    }

    pub fn entries(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.rows.iter().copied().zip(self.cols.iter().copied())
    }

    /// Build the symmetric, loop-free CSC graph of this matrix.
    ///
    /// Every entry `(r, c)` contributes both `(r, c)` and `(c, r)`; diagonal
    /// entries and duplicates are dropped. Rows end up ascending within each
    /// column, so the trusted constructor applies.
    pub fn to_csc(&self) -> GraphResult<SparseGraph> {
        let n = self.vertex_count();
        if n > VertexId::MAX as usize {
            return Err(GraphError::TooManyVertices(n));
        }

        let mut pairs: Vec<(VertexId, VertexId)> = Vec::with_capacity(self.len() * 2);
        for (row, col) in self.entries() {
            for (r, c) in [(row, col), (col, row)] {
                if r as usize >= n || c as usize >= n {
                    return Err(GraphError::RowOutOfBounds {
                        column: c as usize,
                        row: r,
                        vertices: n,
                    });
                }
            }
            if row != col {
                // (column, row) so sorting groups by column
                pairs.push((col, row));
                pairs.push((row, col));
            }
        }
        pairs.sort_unstable();
        pairs.dedup();

        let mut column_start = vec![0usize; n + 1];
        for &(col, _) in &pairs {
            column_start[col as usize + 1] += 1;
        }
        for i in 0..n {
            column_start[i + 1] += column_start[i];
        }
        let row_index = pairs.into_iter().map(|(_, row)| row).collect();

        Ok(SparseGraph::from_csc_unchecked(column_start, row_index))
    }
}

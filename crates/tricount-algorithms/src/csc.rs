//! Compressed Sparse Column (CSC) view of an undirected graph
//!
//! Provides a read-only, validated adjacency structure shared by every counter.
//! The full symmetric pattern is stored: for each column `i` the slice
//! `row_index[column_start[i]..column_start[i + 1]]` lists every neighbor of
//! `i` in ascending order. Algorithms that must visit each undirected edge
//! once walk only the "later" part of a column, i.e. the rows greater than
//! the column index.

use std::ops::Range;
use thiserror::Error;

/// Vertex identifier (dense index 0..n)
pub type VertexId = u32;

/// Structural violations detected while building a [`SparseGraph`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("column_start is empty, expected n + 1 offsets")]
    MissingOffsets,

    #[error("column_start must begin at 0, found {0}")]
    NonZeroFirstOffset(usize),

    #[error("column_start decreases at column {column}")]
    DecreasingOffsets { column: usize },

    #[error("column_start ends at {last} but row_index holds {nnz} entries")]
    OffsetLengthMismatch { last: usize, nnz: usize },

    #[error("row {row} in column {column} is out of bounds for {vertices} vertices")]
    RowOutOfBounds {
        column: usize,
        row: VertexId,
        vertices: usize,
    },

    #[error("column {column} is not strictly ascending at row {row}")]
    UnsortedColumn { column: usize, row: VertexId },

    #[error("self-loop on vertex {0}")]
    SelfLoop(usize),

    #[error("entry (row {row}, column {column}) has no symmetric counterpart")]
    Asymmetric { row: VertexId, column: usize },

    #[error("{0} vertices cannot be addressed with 32-bit vertex ids")]
    TooManyVertices(usize),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Immutable CSC adjacency of a symmetric, loop-free pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseGraph {
    /// Number of vertices (columns)
    vertex_count: usize,
    /// Offsets into `row_index`. Size = vertex_count + 1
    column_start: Vec<usize>,
    /// Row indices, ascending within each column
    row_index: Vec<VertexId>,
    /// Per column, the first position whose row exceeds the column index
    later_start: Vec<usize>,
    /// Per column, entries with row below the column in columns `0..=col`
    earlier_prefix: Vec<usize>,
}

impl SparseGraph {
    /// Build a graph from raw CSC arrays, validating every structural invariant.
    pub fn from_csc(column_start: Vec<usize>, row_index: Vec<VertexId>) -> GraphResult<Self> {
        validate(&column_start, &row_index)?;
        Ok(Self::assemble(column_start, row_index))
    }

    /// Build a graph from CSC arrays the caller already knows to be well formed.
    ///
    /// Converters that establish the invariants themselves (sorted, deduplicated,
    /// symmetrized input) use this to skip the O(nnz log d) symmetry check.
    pub fn from_csc_unchecked(column_start: Vec<usize>, row_index: Vec<VertexId>) -> Self {
        debug_assert_eq!(validate(&column_start, &row_index), Ok(()));
        Self::assemble(column_start, row_index)
    }

    /// Graph with `vertex_count` isolated vertices.
    pub fn empty(vertex_count: usize) -> Self {
        Self::assemble(vec![0; vertex_count + 1], Vec::new())
    }

    fn assemble(column_start: Vec<usize>, row_index: Vec<VertexId>) -> Self {
        let vertex_count = column_start.len().saturating_sub(1);
        let later_start: Vec<usize> = (0..vertex_count)
            .map(|col| {
                let start = column_start[col];
                let rows = &row_index[start..column_start[col + 1]];
                start + rows.partition_point(|&row| (row as usize) <= col)
            })
            .collect();
        let earlier_prefix = later_start
            .iter()
            .zip(&column_start)
            .scan(0, |acc, (&later, &start)| {
                *acc += later - start;
                Some(*acc)
            })
            .collect();

        SparseGraph {
            vertex_count,
            column_start,
            row_index,
            later_start,
            earlier_prefix,
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of stored nonzeros (each undirected edge counts twice)
    pub fn nnz(&self) -> usize {
        self.row_index.len()
    }

    /// Number of undirected edges
    pub fn undirected_edge_count(&self) -> usize {
        self.row_index.len() / 2
    }

    pub fn column_start(&self) -> &[usize] {
        &self.column_start
    }

    pub fn row_index(&self) -> &[VertexId] {
        &self.row_index
    }

    /// Index range of column `col` inside `row_index`
    pub fn column_range(&self, col: usize) -> Range<usize> {
        self.column_start[col]..self.column_start[col + 1]
    }

    /// All neighbors of `col`, ascending
    pub fn column(&self, col: usize) -> &[VertexId] {
        &self.row_index[self.column_range(col)]
    }

    pub fn degree(&self, col: usize) -> usize {
        self.column_start[col + 1] - self.column_start[col]
    }

    /// Position of the first neighbor of `col` with a larger index
    pub fn later_start(&self, col: usize) -> usize {
        self.later_start[col]
    }

    /// Distance between a later-half position of `col` in `row_index` and the
    /// same entry's position in a lower-triangular array holding only the
    /// later halves.
    pub fn lower_shift(&self, col: usize) -> usize {
        self.earlier_prefix[col]
    }

    /// Range of the later half of `col` inside `row_index`
    pub fn later_range(&self, col: usize) -> Range<usize> {
        self.later_start[col]..self.column_start[col + 1]
    }

    /// Neighbors of `col` with a larger index, ascending
    pub fn later_neighbors(&self, col: usize) -> &[VertexId] {
        &self.row_index[self.later_start[col]..self.column_start[col + 1]]
    }

    /// Stored entries as `(row, column)` pairs in column-major order
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        (0..self.vertex_count).flat_map(move |col| {
            self.column(col)
                .iter()
                .map(move |&row| (row, col as VertexId))
        })
    }
}

fn validate(column_start: &[usize], row_index: &[VertexId]) -> GraphResult<()> {
    let first = *column_start.first().ok_or(GraphError::MissingOffsets)?;
    let n = column_start.len() - 1;

    if n > VertexId::MAX as usize {
        return Err(GraphError::TooManyVertices(n));
    }
    if first != 0 {
        return Err(GraphError::NonZeroFirstOffset(first));
    }
    for (column, pair) in column_start.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(GraphError::DecreasingOffsets { column });
        }
    }
    let last = column_start[n];
    if last != row_index.len() {
        return Err(GraphError::OffsetLengthMismatch {
            last,
            nnz: row_index.len(),
        });
    }

    for column in 0..n {
        let rows = &row_index[column_start[column]..column_start[column + 1]];
        let mut previous: Option<VertexId> = None;
        for &row in rows {
            if row as usize >= n {
                return Err(GraphError::RowOutOfBounds {
                    column,
                    row,
                    vertices: n,
                });
            }
            if row as usize == column {
                return Err(GraphError::SelfLoop(column));
            }
            if previous.is_some_and(|p| p >= row) {
                return Err(GraphError::UnsortedColumn { column, row });
            }
            previous = Some(row);
        }
    }

    // Columns are sorted at this point, so the mirror lookup can binary search.
    for column in 0..n {
        for &row in &row_index[column_start[column]..column_start[column + 1]] {
            let r = row as usize;
            let mirror = &row_index[column_start[r]..column_start[r + 1]];
            if mirror.binary_search(&(column as VertexId)).is_err() {
                return Err(GraphError::Asymmetric { row, column });
            }
        }
    }

    Ok(())
}

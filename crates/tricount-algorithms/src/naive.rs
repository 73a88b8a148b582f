//! Brute-force triangle counting over a dense adjacency matrix
//!
//! O(n^2) memory and O(n^3) time. Only useful as a correctness oracle for the
//! sparse counters on small graphs.

use crate::aggregate::Normalization;
use crate::contrib::Contributions;
use crate::counter::{CountError, CountResult, TriangleCounter};
use crate::csc::{SparseGraph, VertexId};
use ndarray::Array2;

/// Default ceiling on the vertex count accepted by [`NaiveCounter`]
pub const DEFAULT_VERTEX_LIMIT: usize = 2_000;

/// Per-vertex triangle membership counts from raw coordinate arrays.
///
/// `rows[e]`/`cols[e]` describe one edge each; either or both directions may
/// be present. Diagonal entries are harmless.
pub fn naive_contributions(vertex_count: usize, rows: &[VertexId], cols: &[VertexId]) -> Vec<u64> {
    let n = vertex_count;
    let mut adj = Array2::<u8>::zeros((n, n));
    for (&r, &c) in rows.iter().zip(cols) {
        adj[[c as usize, r as usize]] = 1;
        adj[[r as usize, c as usize]] = 1;
    }

    let mut counts = vec![0u64; n];
    for i in 0..n {
        for j in (i + 1)..n {
            if adj[[i, j]] == 0 {
                continue;
            }
            for k in (j + 1)..n {
                if adj[[j, k]] == 1 && adj[[k, i]] == 1 {
                    counts[i] += 1;
                    counts[j] += 1;
                    counts[k] += 1;
                }
            }
        }
    }
    counts
}

/// Dense oracle counter
#[derive(Debug, Clone, Copy)]
pub struct NaiveCounter {
    /// Largest vertex count for which the dense matrix is allocated
    pub vertex_limit: usize,
}

impl Default for NaiveCounter {
    fn default() -> Self {
        Self {
            vertex_limit: DEFAULT_VERTEX_LIMIT,
        }
    }
}

impl NaiveCounter {
    pub fn new(vertex_limit: usize) -> Self {
        Self { vertex_limit }
    }
}

impl TriangleCounter for NaiveCounter {
    fn name(&self) -> &'static str {
        "Naive COO"
    }

    fn normalization(&self) -> Normalization {
        Normalization::PER_VERTEX
    }

    fn count(&self, graph: &SparseGraph) -> CountResult<Contributions> {
        let n = graph.vertex_count();
        if n > self.vertex_limit {
            return Err(CountError::GraphTooLarge {
                vertices: n,
                limit: self.vertex_limit,
            });
        }

        let (rows, cols): (Vec<VertexId>, Vec<VertexId>) = graph.edges().unzip();
        Ok(Contributions::new(
            naive_contributions(n, &rows, &cols),
            self.normalization(),
        ))
    }
}

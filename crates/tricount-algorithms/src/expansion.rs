//! Neighbor expansion triangle counting
//!
//! Every undirected edge `(col, row)` with `row > col` is visited once. The
//! complete neighbor list of each endpoint is rebuilt by merging its later
//! neighbors (rows greater than the vertex) with its reverse neighbors
//! (earlier columns that list the vertex as a later neighbor). The number of
//! common neighbors is the number of triangles on that edge and is added to
//! both endpoints under one lock shared by all workers.
//!
//! Each triangle reaches each of its vertices through two edges, so the
//! accumulated value per vertex is twice its triangle count; the counter
//! halves every entry once all workers have joined.

use crate::aggregate::Normalization;
use crate::contrib::{Contributions, LockedContributions};
use crate::counter::{CountResult, TriangleCounter};
use crate::csc::{SparseGraph, VertexId};
use crate::partition::partition_ranges;
use crate::sorted::{count_common_sorted, merge_sorted_into};
use std::ops::Range;
use std::thread;
use tracing::debug;

/// For each vertex `v`, the columns `c < v` that list `v` as a later neighbor.
pub struct ReverseAdjacency {
    /// Number of reverse neighbors per vertex
    pub degree: Vec<usize>,
    /// Reverse neighbor lists, ascending
    pub neighbors: Vec<Vec<VertexId>>,
}

impl ReverseAdjacency {
    pub fn build(graph: &SparseGraph) -> Self {
        let n = graph.vertex_count();

        let mut degree = vec![0usize; n];
        for col in 0..n {
            for &row in graph.later_neighbors(col) {
                degree[row as usize] += 1;
            }
        }

        let mut neighbors: Vec<Vec<VertexId>> =
            degree.iter().map(|&d| Vec::with_capacity(d)).collect();
        // Columns are visited in ascending order, so every list comes out sorted
        for col in 0..n {
            for &row in graph.later_neighbors(col) {
                neighbors[row as usize].push(col as VertexId);
            }
        }

        Self { degree, neighbors }
    }

    pub fn of(&self, v: usize) -> &[VertexId] {
        &self.neighbors[v]
    }
}

/// Fork-join counter with a coarse lock around accumulation
#[derive(Debug, Clone, Copy)]
pub struct NeighborExpansionCounter {
    /// Number of worker threads, one contiguous column range each
    pub threads: usize,
}

impl NeighborExpansionCounter {
    pub fn new(threads: usize) -> Self {
        Self { threads }
    }

    /// Run all workers and return the accumulated, not yet halved, values.
    pub fn accumulate(&self, graph: &SparseGraph) -> CountResult<Vec<u64>> {
        let reverse = ReverseAdjacency::build(graph);
        let contrib = LockedContributions::new(graph.vertex_count());
        let ranges = partition_ranges(graph.vertex_count(), self.threads);
        debug!(
            "Neighbor expansion: {} workers over {} columns",
            ranges.len(),
            graph.vertex_count()
        );

        thread::scope(|s| -> CountResult<()> {
            for (worker, range) in ranges.into_iter().enumerate() {
                let reverse = &reverse;
                let contrib = &contrib;
                thread::Builder::new()
                    .name(format!("tricount-expand-{}", worker))
                    .spawn_scoped(s, move || expand_range(graph, reverse, contrib, range))?;
            }
            Ok(())
        })?;

        Ok(contrib.into_vec())
    }
}

/// Worker body: every edge whose smaller endpoint lies in `range`.
fn expand_range(
    graph: &SparseGraph,
    reverse: &ReverseAdjacency,
    contrib: &LockedContributions,
    range: Range<usize>,
) {
    // Thread-local scratch, reused across edges
    let mut full_col = Vec::new();
    let mut full_row = Vec::new();

    for col in range {
        let later = graph.later_neighbors(col);
        if later.is_empty() {
            continue;
        }
        merge_sorted_into(later, reverse.of(col), &mut full_col);

        for &row in later {
            let row = row as usize;
            merge_sorted_into(graph.later_neighbors(row), reverse.of(row), &mut full_row);
            let common = count_common_sorted(&full_col, &full_row) as u64;
            if common > 0 {
                contrib.add_pair(col, row, common);
            }
        }
    }
}

impl TriangleCounter for NeighborExpansionCounter {
    fn name(&self) -> &'static str {
        "Neighbor Expansion"
    }

    fn normalization(&self) -> Normalization {
        Normalization::PER_EDGE_HALVED
    }

    fn count(&self, graph: &SparseGraph) -> CountResult<Contributions> {
        let mut counts = self.accumulate(graph)?;
        for c in counts.iter_mut() {
            *c /= 2;
        }
        Ok(Contributions::new(counts, self.normalization()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k4() -> SparseGraph {
        SparseGraph::from_csc(
            vec![0, 3, 6, 9, 12],
            vec![1, 2, 3, 0, 2, 3, 0, 1, 3, 0, 1, 2],
        )
        .unwrap()
    }

    #[test]
    fn test_reverse_adjacency() {
        let reverse = ReverseAdjacency::build(&k4());
        assert_eq!(reverse.degree, vec![0, 1, 2, 3]);
        assert_eq!(reverse.of(3), &[0, 1, 2]);
        assert!(reverse.of(0).is_empty());
    }

    #[test]
    fn test_single_triangle_raw_and_halved() {
        let graph = SparseGraph::from_csc(vec![0, 2, 4, 6], vec![1, 2, 0, 2, 0, 1]).unwrap();
        let counter = NeighborExpansionCounter::new(2);
        assert_eq!(counter.accumulate(&graph).unwrap(), vec![2, 2, 2]);
        assert_eq!(counter.count(&graph).unwrap().counts, vec![1, 1, 1]);
    }

    #[test]
    fn test_k4_any_thread_count() {
        let graph = k4();
        for threads in [0, 1, 2, 3, 8, 64] {
            let contrib = NeighborExpansionCounter::new(threads).count(&graph).unwrap();
            // Each vertex of K4 is in C(3,2) = 3 triangles
            assert_eq!(contrib.counts, vec![3; 4], "{} threads", threads);
        }
    }
}

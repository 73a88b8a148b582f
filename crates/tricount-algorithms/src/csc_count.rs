//! CSC triangle counting by binary-search intersection
//!
//! For every column `i` and every later neighbor `s` of `i` (stored at
//! position `j`), the triangles through edge `(i, s)` are the vertices common
//! to column `s` and to the tail of column `i` after `j`. Each triangle
//! `i < s < w` is found exactly once and adds one to each of its vertices.
//!
//! With the self-index skip enabled, column `s` is searched over its later
//! half only and skip positions are taken in the lower-triangular layout, so
//! parity runs drop exactly the triangles the lower-triangular loop drops.

use crate::aggregate::Normalization;
use crate::contrib::{AtomicContributions, Contributions};
use crate::counter::{CountResult, TriangleCounter};
use crate::csc::SparseGraph;
use crate::partition::{build_pool, partition_ranges};
use crate::sorted::{for_each_common, SelfIndexSkip};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Process one column, reporting every vertex of every triangle found.
#[inline]
fn count_column<F>(graph: &SparseGraph, col: usize, skip_self_index: bool, mut bump: F)
where
    F: FnMut(usize),
{
    let rows = graph.row_index();
    let end = graph.column_range(col).end;

    for j in graph.later_start(col)..end {
        let sub_row = rows[j] as usize;
        let (window, skip) = if skip_self_index {
            let skip = SelfIndexSkip::Shifted {
                first: graph.lower_shift(sub_row),
                second: graph.lower_shift(col),
            };
            (graph.later_range(sub_row), skip)
        } else {
            (graph.column_range(sub_row), SelfIndexSkip::Off)
        };
        for_each_common(
            rows,
            window,
            (j + 1)..end,
            skip,
            |w| {
                bump(col);
                bump(sub_row);
                bump(w as usize);
            },
        );
    }
}

/// Single-threaded CSC counter
#[derive(Debug, Clone, Copy, Default)]
pub struct CscSequentialCounter {
    /// Skip scanned positions whose value equals their index (parity mode)
    pub skip_self_index: bool,
}

impl TriangleCounter for CscSequentialCounter {
    fn name(&self) -> &'static str {
        "CSC Sequential"
    }

    fn normalization(&self) -> Normalization {
        Normalization::PER_VERTEX
    }

    fn count(&self, graph: &SparseGraph) -> CountResult<Contributions> {
        let mut counts = vec![0u64; graph.vertex_count()];
        for col in 0..graph.vertex_count() {
            count_column(graph, col, self.skip_self_index, |v| counts[v] += 1);
        }
        Ok(Contributions::new(counts, self.normalization()))
    }
}

/// Work distribution policy for [`CscParallelCounter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Schedule {
    /// One contiguous block of columns per worker, fixed before the run
    Static,
    /// Workers claim `batch` columns at a time from a shared cursor
    Dynamic { batch: usize },
}

/// CSC counter with the per-column loop spread over a dedicated pool
#[derive(Debug, Clone, Copy)]
pub struct CscParallelCounter {
    pub threads: usize,
    pub schedule: Schedule,
    pub skip_self_index: bool,
}

impl CscParallelCounter {
    pub fn new(threads: usize, schedule: Schedule) -> Self {
        Self {
            threads,
            schedule,
            skip_self_index: false,
        }
    }

    pub fn with_self_index_skip(mut self, skip: bool) -> Self {
        self.skip_self_index = skip;
        self
    }

    fn run_static(&self, pool: &rayon::ThreadPool, graph: &SparseGraph, contrib: &AtomicContributions) {
        let ranges = partition_ranges(graph.vertex_count(), self.threads);
        debug!("Static schedule: {} column blocks", ranges.len());

        pool.scope(|s| {
            for range in ranges {
                s.spawn(move |_| {
                    for col in range {
                        count_column(graph, col, self.skip_self_index, |v| contrib.add(v, 1));
                    }
                });
            }
        });
    }

    fn run_dynamic(&self, pool: &rayon::ThreadPool, graph: &SparseGraph, contrib: &AtomicContributions, batch: usize) {
        let n = graph.vertex_count();
        // Clamped so `fetch_add` cannot wrap the cursor
        let batch = batch.clamp(1, n.max(1));
        let cursor = AtomicUsize::new(0);
        debug!("Dynamic schedule: batch of {} columns", batch);

        pool.scope(|s| {
            for _ in 0..pool.current_num_threads() {
                s.spawn(|_| loop {
                    let start = cursor.fetch_add(batch, Ordering::Relaxed);
                    if start >= n {
                        break;
                    }
                    let end = (start + batch).min(n);
                    for col in start..end {
                        count_column(graph, col, self.skip_self_index, |v| contrib.add(v, 1));
                    }
                });
            }
        });
    }
}

impl TriangleCounter for CscParallelCounter {
    fn name(&self) -> &'static str {
        match self.schedule {
            Schedule::Static => "CSC Parallel (static)",
            Schedule::Dynamic { .. } => "CSC Parallel (dynamic)",
        }
    }

    fn normalization(&self) -> Normalization {
        Normalization::PER_VERTEX
    }

    fn count(&self, graph: &SparseGraph) -> CountResult<Contributions> {
        let pool = build_pool(self.threads)?;
        let contrib = AtomicContributions::new(graph.vertex_count());

        match self.schedule {
            Schedule::Static => self.run_static(&pool, graph, &contrib),
            Schedule::Dynamic { batch } => self.run_dynamic(&pool, graph, &contrib, batch),
        }

        Ok(Contributions::new(contrib.into_vec(), self.normalization()))
    }
}

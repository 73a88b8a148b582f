//! Per-vertex contribution buffers
//!
//! A buffer is owned by exactly one counter invocation. Workers only ever add
//! to it; nothing reads it until every worker has joined.

use crate::aggregate::Normalization;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Lock-free buffer for pool-parallel counters.
///
/// Different workers may hit the same vertex, so every increment is an atomic
/// `fetch_add`. Relaxed ordering suffices: the join at the end of the run is
/// the only synchronization point that publishes the totals.
pub struct AtomicContributions {
    counts: Vec<AtomicU64>,
}

impl AtomicContributions {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            counts: (0..vertex_count).map(|_| AtomicU64::new(0)).collect(),
        }
    }

    #[inline]
    pub fn add(&self, vertex: usize, amount: u64) {
        self.counts[vertex].fetch_add(amount, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.counts.into_iter().map(AtomicU64::into_inner).collect()
    }
}

/// Buffer where every increment, whatever its target, goes through one lock.
pub struct LockedContributions {
    counts: Mutex<Vec<u64>>,
}

impl LockedContributions {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            counts: Mutex::new(vec![0; vertex_count]),
        }
    }

    /// Add `amount` to both endpoints of an edge under the shared lock.
    pub fn add_pair(&self, a: usize, b: usize, amount: u64) {
        // A panicking worker cannot leave a half-applied pair behind, so a
        // poisoned lock still guards consistent data.
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        counts[a] += amount;
        counts[b] += amount;
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.counts
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Finished per-vertex vector of one counter run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contributions {
    /// Accumulated value per vertex, before normalization
    pub counts: Vec<u64>,
    /// How `counts` turns into triangles
    pub normalization: Normalization,
}

impl Contributions {
    pub fn new(counts: Vec<u64>, normalization: Normalization) -> Self {
        Self {
            counts,
            normalization,
        }
    }

    pub fn sum(&self) -> u64 {
        self.counts.iter().sum()
    }
}

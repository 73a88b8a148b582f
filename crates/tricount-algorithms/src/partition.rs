//! Work partitioning and worker pool construction

use crate::counter::CountResult;
use std::ops::Range;
use tracing::debug;

/// Split `0..n` into `workers` contiguous, near-equal ranges.
///
/// Range `i` is `i*n/workers .. (i+1)*n/workers`, so sizes differ by at most
/// one and the ranges tile `0..n` exactly. A worker count of zero is treated
/// as one.
pub fn partition_ranges(n: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    (0..workers)
        .map(|i| (i * n / workers)..((i + 1) * n / workers))
        .collect()
}

/// Build a dedicated pool with exactly `threads` workers (at least one).
pub fn build_pool(threads: usize) -> CountResult<rayon::ThreadPool> {
    let threads = threads.max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("tricount-worker-{}", i))
        .build()?;
    debug!("Built worker pool with {} threads", threads);
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_tiles_range() {
        for n in [0usize, 1, 5, 17, 100] {
            for workers in [1usize, 2, 3, 8, 64] {
                let ranges = partition_ranges(n, workers);
                assert_eq!(ranges.len(), workers);
                assert_eq!(ranges[0].start, 0);
                assert_eq!(ranges[workers - 1].end, n);
                for pair in ranges.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                }
                let max = ranges.iter().map(|r| r.len()).max().unwrap();
                let min = ranges.iter().map(|r| r.len()).min().unwrap();
                assert!(max - min <= 1);
            }
        }
    }

    #[test]
    fn test_partition_zero_workers() {
        assert_eq!(partition_ranges(10, 0), vec![0..10]);
    }

    #[test]
    fn test_build_pool() {
        let pool = build_pool(3).unwrap();
        assert_eq!(pool.current_num_threads(), 3);
        assert_eq!(build_pool(0).unwrap().current_num_threads(), 1);
    }
}

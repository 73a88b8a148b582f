//! Sorted-array primitives shared by the counters
//!
//! Every function here requires its inputs to be ascending. Unsorted input
//! produces wrong answers, not panics.

use crate::csc::VertexId;
use std::cmp::Ordering;
use std::ops::Range;

/// Binary search for `value` in `arr[lo..=hi]`.
///
/// An empty window (`hi < lo`) never contains anything.
pub fn exists_in_sorted_range(arr: &[VertexId], lo: usize, hi: usize, value: VertexId) -> bool {
    if hi < lo {
        return false;
    }
    arr[lo..=hi].binary_search(&value).is_ok()
}

/// Stable two-way merge of two ascending sequences. Duplicates are kept.
pub fn merge_sorted(a: &[VertexId], b: &[VertexId]) -> Vec<VertexId> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    merge_sorted_into(a, b, &mut out);
    out
}

/// Same as [`merge_sorted`] but writes into a reusable buffer (cleared first).
pub fn merge_sorted_into(a: &[VertexId], b: &[VertexId], out: &mut Vec<VertexId>) {
    out.clear();
    out.reserve(a.len() + b.len());

    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        // Ties take from `a` first to keep the merge stable
        if a[i] <= b[j] {
            out.push(a[i]);
            i += 1;
        } else {
            out.push(b[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
}

/// Number of matching pairs found by a two-pointer scan over two ascending arrays.
pub fn count_common_sorted(a: &[VertexId], b: &[VertexId]) -> usize {
    let (mut i, mut j) = (0, 0);
    let mut common = 0;

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                common += 1;
                i += 1;
                j += 1;
            }
        }
    }
    common
}

/// Self-index skip applied to scanned positions.
///
/// A scanned position `k` is compared against `k - shift`, where the shift is
/// the one of the window being scanned. Shifts translate positions in the
/// full symmetric array into positions in the lower-triangular array, where
/// only rows greater than their column are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfIndexSkip {
    #[default]
    Off,
    Shifted { first: usize, second: usize },
}

/// Visit every value of `arr[first]` that also occurs in `arr[second]`.
///
/// Both windows index into the same backing array and must be ascending.
/// The shorter window is scanned and each of its values is binary searched in
/// the longer one, bounding the cost by `O(min * log(max))`; on equal lengths
/// `second` is scanned.
///
/// With a [`SelfIndexSkip::Shifted`] skip, a scanned position whose shifted
/// index equals its stored value is passed over without searching. This can
/// drop genuine matches, so it is off everywhere except parity runs.
pub fn for_each_common<F>(
    arr: &[VertexId],
    first: Range<usize>,
    second: Range<usize>,
    skip: SelfIndexSkip,
    mut visit: F,
) where
    F: FnMut(VertexId),
{
    let scan_first = first.len() < second.len();
    let (long, short) = if scan_first {
        (second, first)
    } else {
        (first, second)
    };
    if long.is_empty() {
        return;
    }
    let shift = match skip {
        SelfIndexSkip::Off => None,
        SelfIndexSkip::Shifted { first, second } => Some(if scan_first { first } else { second }),
    };

    for k in short {
        let value = arr[k];
        if shift.is_some_and(|s| k - s == value as usize) {
            continue;
        }
        if exists_in_sorted_range(arr, long.start, long.end - 1, value) {
            visit(value);
        }
    }
}

/// Collect the common values of two ascending windows of `arr`.
///
/// `skip_self_index` compares scanned positions against their values
/// unshifted.
pub fn common_values(
    arr: &[VertexId],
    first: Range<usize>,
    second: Range<usize>,
    skip_self_index: bool,
) -> Vec<VertexId> {
    let skip = if skip_self_index {
        SelfIndexSkip::Shifted { first: 0, second: 0 }
    } else {
        SelfIndexSkip::Off
    };
    let mut common = Vec::new();
    for_each_common(arr, first, second, skip, |w| common.push(w));
    common
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeSet;

    fn random_sorted(rng: &mut StdRng, max_len: usize, universe: u32) -> Vec<VertexId> {
        let len = rng.gen_range(0..=max_len);
        let set: BTreeSet<VertexId> = (0..len).map(|_| rng.gen_range(0..universe)).collect();
        set.into_iter().collect()
    }

    #[test]
    fn test_exists_in_sorted_range() {
        let arr = [1, 3, 5, 7, 9, 11];
        assert!(exists_in_sorted_range(&arr, 0, 5, 7));
        assert!(exists_in_sorted_range(&arr, 2, 3, 5));
        assert!(!exists_in_sorted_range(&arr, 2, 3, 9));
        assert!(!exists_in_sorted_range(&arr, 0, 5, 4));
        assert!(exists_in_sorted_range(&arr, 4, 4, 9));
        // Empty window
        assert!(!exists_in_sorted_range(&arr, 3, 2, 5));
    }

    #[test]
    fn test_merge_sorted_keeps_duplicates() {
        assert_eq!(merge_sorted(&[1, 4, 6], &[2, 4, 9, 10]), vec![1, 2, 4, 4, 6, 9, 10]);
        assert_eq!(merge_sorted(&[], &[3, 5]), vec![3, 5]);
        assert_eq!(merge_sorted(&[3, 5], &[]), vec![3, 5]);
        assert!(merge_sorted(&[], &[]).is_empty());
    }

    #[test]
    fn test_merge_sorted_into_reuses_buffer() {
        let mut buf = vec![99, 98, 97];
        merge_sorted_into(&[0, 2], &[1], &mut buf);
        assert_eq!(buf, vec![0, 1, 2]);
    }

    #[test]
    fn test_count_common_edge_cases() {
        assert_eq!(count_common_sorted(&[], &[]), 0);
        assert_eq!(count_common_sorted(&[], &[1, 2]), 0);
        assert_eq!(count_common_sorted(&[1, 3, 5], &[2, 4, 6]), 0);
        assert_eq!(count_common_sorted(&[1, 3, 5], &[1, 3, 5]), 3);
        // One match per pair of duplicates
        assert_eq!(count_common_sorted(&[2, 2, 3], &[2, 2, 2]), 2);
    }

    #[test]
    fn test_count_common_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let a = random_sorted(&mut rng, 40, 64);
            let b = random_sorted(&mut rng, 40, 64);
            let expected = a.iter().filter(|x| b.contains(x)).count();
            assert_eq!(count_common_sorted(&a, &b), expected, "a={:?} b={:?}", a, b);
            assert_eq!(count_common_sorted(&a, &a), a.len());
        }
    }

    #[test]
    fn test_common_values_searches_longer_side() {
        // window 0..5 = [1, 2, 4, 6, 8], window 5..7 = [4, 8]
        let arr = [1, 2, 4, 6, 8, 4, 8];
        assert_eq!(common_values(&arr, 0..5, 5..7, false), vec![4, 8]);
        assert_eq!(common_values(&arr, 5..7, 0..5, false), vec![4, 8]);
        assert!(common_values(&arr, 0..5, 7..7, false).is_empty());
        assert!(common_values(&arr, 7..7, 7..7, false).is_empty());
    }

    #[test]
    fn test_common_values_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let a = random_sorted(&mut rng, 30, 50);
            let b = random_sorted(&mut rng, 30, 50);
            let mut arr = a.clone();
            arr.extend_from_slice(&b);
            let split = a.len();

            let mut found = common_values(&arr, 0..split, split..arr.len(), false);
            found.sort_unstable();
            let expected: Vec<VertexId> = a.iter().copied().filter(|x| b.contains(x)).collect();
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn test_self_index_skip() {
        // Position 3 of the scanned window stores the value 3
        let arr = [0, 1, 3, 3, 5];
        assert_eq!(common_values(&arr, 0..3, 3..5, false), vec![3]);
        assert!(common_values(&arr, 0..3, 3..5, true).is_empty());
    }

    #[test]
    fn test_self_index_skip_uses_scanned_window_shift() {
        // Scanned window 3..5 holds [3, 5]; shifted by 1, position 4 maps to 3
        let arr = [0, 1, 3, 3, 5];
        let mut found = Vec::new();
        for_each_common(&arr, 0..3, 3..5, SelfIndexSkip::Shifted { first: 0, second: 1 }, |w| {
            found.push(w)
        });
        assert_eq!(found, vec![3]);

        // Shift of the unscanned window is ignored
        found.clear();
        for_each_common(&arr, 0..3, 3..5, SelfIndexSkip::Shifted { first: 1, second: 0 }, |w| {
            found.push(w)
        });
        assert!(found.is_empty());
    }
}

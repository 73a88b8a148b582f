//! Turning per-vertex contributions into a triangle count

use crate::contrib::Contributions;

/// How a counter's accumulated values map to triangles.
///
/// `halve_first` records that the counter already halved every entry after its
/// workers joined; the aggregator then divides the sum by `divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normalization {
    pub halve_first: bool,
    pub divisor: u64,
}

impl Normalization {
    /// Each triangle adds one to each of its three vertices.
    pub const PER_VERTEX: Normalization = Normalization {
        halve_first: false,
        divisor: 3,
    };

    /// Each triangle adds its edge count to both endpoints of each of its
    /// edges, which the counter halves back to one per vertex.
    pub const PER_EDGE_HALVED: Normalization = Normalization {
        halve_first: true,
        divisor: 3,
    };

    /// Divisor applied to raw (un-halved) values.
    pub fn raw_divisor(&self) -> u64 {
        if self.halve_first {
            self.divisor * 2
        } else {
            self.divisor
        }
    }
}

/// Final result of a counter run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangleCount {
    /// Number of distinct triangles
    pub total: u64,
    /// Number of triangles each vertex belongs to
    pub per_vertex: Vec<u64>,
}

/// Sum the contributions and divide by the counter's divisor.
pub fn aggregate(contrib: &Contributions) -> TriangleCount {
    let divisor = contrib.normalization.divisor;
    let total = contrib.sum() / divisor;
    let per_vertex = contrib.counts.clone();

    debug_assert_eq!(contrib.sum() % divisor, 0, "contributions not a multiple of {}", divisor);

    TriangleCount { total, per_vertex }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_per_vertex() {
        let contrib = Contributions::new(vec![1, 1, 1, 0], Normalization::PER_VERTEX);
        let count = aggregate(&contrib);
        assert_eq!(count.total, 1);
        assert_eq!(count.per_vertex, vec![1, 1, 1, 0]);
    }

    #[test]
    fn test_aggregate_empty() {
        let contrib = Contributions::new(vec![], Normalization::PER_EDGE_HALVED);
        assert_eq!(aggregate(&contrib).total, 0);
    }

    #[test]
    fn test_raw_divisor() {
        assert_eq!(Normalization::PER_VERTEX.raw_divisor(), 3);
        assert_eq!(Normalization::PER_EDGE_HALVED.raw_divisor(), 6);
    }
}

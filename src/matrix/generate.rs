//! Deterministic synthetic graphs
//!
//! Every generator returns one entry per undirected edge with `row > col`,
//! the same layout as a symmetric Matrix Market file.

use super::coo::CooMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tricount_algorithms::VertexId;

/// Complete graph on `k` vertices: C(k, 3) triangles.
pub fn complete(k: usize) -> CooMatrix {
    let mut coo = CooMatrix::with_capacity(k, k, k * k.saturating_sub(1) / 2);
    for col in 0..k {
        for row in (col + 1)..k {
            coo.push(row as VertexId, col as VertexId);
        }
    }
    coo
}

/// Simple path 0 - 1 - ... - (n-1).
pub fn path(n: usize) -> CooMatrix {
    let mut coo = CooMatrix::with_capacity(n, n, n.saturating_sub(1));
    for v in 1..n {
        coo.push(v as VertexId, (v - 1) as VertexId);
    }
    coo
}

/// Star with centre 0 and `n - 1` leaves.
pub fn star(n: usize) -> CooMatrix {
    let mut coo = CooMatrix::with_capacity(n, n, n.saturating_sub(1));
    for leaf in 1..n {
        coo.push(leaf as VertexId, 0);
    }
    coo
}

/// G(n, p) random graph; the same seed always yields the same graph.
pub fn erdos_renyi(n: usize, p: f64, seed: u64) -> CooMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let p = p.clamp(0.0, 1.0);
    let mut coo = CooMatrix::new(n, n);
    for col in 0..n {
        for row in (col + 1)..n {
            if rng.gen_bool(p) {
                coo.push(row as VertexId, col as VertexId);
            }
        }
    }
    coo
}

/// Graph on `n` vertices from an explicit undirected edge list.
pub fn from_edges(n: usize, edges: &[(VertexId, VertexId)]) -> CooMatrix {
    let mut coo = CooMatrix::with_capacity(n, n, edges.len());
    for &(u, v) in edges {
        coo.push(u.max(v), u.min(v));
    }
    coo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes() {
        assert_eq!(complete(5).len(), 10);
        assert_eq!(complete(0).len(), 0);
        assert_eq!(path(4).len(), 3);
        assert_eq!(star(6).len(), 5);
        assert_eq!(star(0).vertex_count(), 0);
        assert_eq!(from_edges(3, &[(0, 2)]).rows, vec![2]);
    }

    #[test]
    fn test_erdos_renyi_deterministic() {
        let a = erdos_renyi(50, 0.2, 7);
        let b = erdos_renyi(50, 0.2, 7);
        assert_eq!(a, b);
        assert!(!a.is_empty());
        assert!(erdos_renyi(30, 0.0, 1).is_empty());
        assert_eq!(erdos_renyi(10, 1.0, 1).len(), 45);
    }
}

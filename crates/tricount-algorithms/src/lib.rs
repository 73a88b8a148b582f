//! Triangle counting over sparse undirected graphs
//!
//! All counters share one read-only [`SparseGraph`] in CSC form and produce a
//! per-vertex contribution vector that [`aggregate()`] normalizes to the total.
//!
//! | Counter | Strategy | Concurrency |
//! |---------|----------|-------------|
//! | [`NaiveCounter`] | dense n x n matrix, all triples | none |
//! | [`CscSequentialCounter`] | binary-search intersection per edge | none |
//! | [`CscParallelCounter`] | same, columns over a pool | atomic increments |
//! | [`NeighborExpansionCounter`] | merged neighbor lists per edge | fork-join, one lock |

pub mod aggregate;
pub mod contrib;
pub mod counter;
pub mod csc;
pub mod csc_count;
pub mod expansion;
pub mod naive;
pub mod partition;
pub mod sorted;

pub use aggregate::{aggregate, Normalization, TriangleCount};
pub use contrib::{AtomicContributions, Contributions, LockedContributions};
pub use counter::{count_triangles, CountError, CountResult, TriangleCounter};
pub use csc::{GraphError, GraphResult, SparseGraph, VertexId};
pub use csc_count::{CscParallelCounter, CscSequentialCounter, Schedule};
pub use expansion::{NeighborExpansionCounter, ReverseAdjacency};
pub use naive::{naive_contributions, NaiveCounter, DEFAULT_VERTEX_LIMIT};
pub use partition::{build_pool, partition_ranges};
pub use sorted::{
    common_values, count_common_sorted, exists_in_sorted_range, for_each_common, merge_sorted,
    merge_sorted_into, SelfIndexSkip,
};

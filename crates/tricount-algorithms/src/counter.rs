//! Common interface of the triangle counters

use crate::aggregate::{aggregate, Normalization, TriangleCount};
use crate::contrib::Contributions;
use crate::csc::SparseGraph;
use thiserror::Error;

/// Errors raised while running a counter
#[derive(Error, Debug)]
pub enum CountError {
    /// The dense oracle would need an n x n matrix beyond its configured limit
    #[error("graph has {vertices} vertices, above the dense oracle limit of {limit}")]
    GraphTooLarge { vertices: usize, limit: usize },

    /// Worker pool could not be created
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A fork-join worker thread could not be spawned
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type CountResult<T> = Result<T, CountError>;

/// A triangle counting strategy over a shared, read-only graph.
pub trait TriangleCounter: Send + Sync {
    /// Human readable algorithm name
    fn name(&self) -> &'static str;

    /// How the produced contributions normalize to a triangle count
    fn normalization(&self) -> Normalization;

    /// Run the counter and return its per-vertex contributions.
    ///
    /// Every invocation allocates its own zeroed buffer; the graph is never
    /// mutated.
    fn count(&self, graph: &SparseGraph) -> CountResult<Contributions>;
}

/// Run `counter` on `graph` and aggregate the result.
pub fn count_triangles<C: TriangleCounter + ?Sized>(
    counter: &C,
    graph: &SparseGraph,
) -> CountResult<TriangleCount> {
    let contrib = counter.count(graph)?;
    Ok(aggregate(&contrib))
}

//! Sparse matrix input: Matrix Market files, COO edge lists, generators

pub mod coo;
pub mod generate;
pub mod mtx;

pub use coo::CooMatrix;
pub use mtx::{parse_matrix_market, read_matrix_market, write_matrix_market, MtxHeader};

use crate::error::TricountResult;
use std::path::Path;
use tracing::info;
use tricount_algorithms::SparseGraph;

/// Read a Matrix Market file and convert it to a symmetric CSC graph.
pub fn load_graph(path: impl AsRef<Path>) -> TricountResult<SparseGraph> {
    let coo = read_matrix_market(path)?;
    let graph = coo.to_csc()?;
    info!(
        "Built CSC graph: {} vertices, {} nonzeros",
        graph.vertex_count(),
        graph.nnz()
    );
    Ok(graph)
}

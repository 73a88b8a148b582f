//! Tricount
//!
//! Triangle counting benchmarks for large sparse undirected graphs.
//!
//! # Architecture
//!
//! - `matrix`: Matrix Market reader/writer, COO edge lists, COO to CSC
//!   conversion and synthetic generators
//! - `algo`: selection of the counters implemented in `tricount-algorithms`
//! - `bench`: timing driver, result reports and cross-algorithm agreement
//! - `config`: run configuration (threads, schedule, algorithm list)
//!
//! ## Example Usage
//!
//! ```rust
//! use tricount::{bench, matrix::generate, RunConfig};
//!
//! let graph = generate::complete(4).to_csc().unwrap();
//! let reports = bench::run_all(&graph, &RunConfig::default()).unwrap();
//! assert_eq!(bench::check_agreement(&reports).unwrap(), 4);
//! ```

pub mod algo;
pub mod bench;
pub mod config;
pub mod error;
pub mod matrix;

pub use algo::Algorithm;
pub use bench::{check_agreement, format_box, run, run_all, BenchmarkReport};
pub use config::RunConfig;
pub use error::{TricountError, TricountResult};
pub use matrix::{load_graph, CooMatrix};
pub use tricount_algorithms::{SparseGraph, TriangleCount};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

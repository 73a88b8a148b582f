//! Algorithm selection
//!
//! Counters are implemented in the `tricount-algorithms` crate. This module
//! maps the configured algorithm names onto concrete counters.

use crate::config::RunConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Re-export algorithms
pub use tricount_algorithms::{
    aggregate, count_triangles, CscParallelCounter, CscSequentialCounter, NaiveCounter,
    NeighborExpansionCounter, Schedule, SparseGraph, TriangleCount, TriangleCounter,
};

/// The counters a run can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Naive,
    CscSequential,
    CscStatic,
    CscDynamic,
    NeighborExpansion,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Naive,
        Algorithm::CscSequential,
        Algorithm::CscStatic,
        Algorithm::CscDynamic,
        Algorithm::NeighborExpansion,
    ];

    /// Identifier used in config files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::CscSequential => "csc-sequential",
            Algorithm::CscStatic => "csc-static",
            Algorithm::CscDynamic => "csc-dynamic",
            Algorithm::NeighborExpansion => "neighbor-expansion",
        }
    }

    /// Whether the algorithm uses the configured thread count
    pub fn is_parallel(&self) -> bool {
        matches!(
            self,
            Algorithm::CscStatic | Algorithm::CscDynamic | Algorithm::NeighborExpansion
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm '{0}' (expected one of: naive, csc-sequential, csc-static, csc-dynamic, neighbor-expansion)")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.key() == wanted)
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

/// Instantiate the counter for `algorithm` with the run's settings.
pub fn counter_for(algorithm: Algorithm, config: &RunConfig) -> Box<dyn TriangleCounter> {
    match algorithm {
        Algorithm::Naive => Box::new(NaiveCounter::new(config.naive_vertex_limit)),
        Algorithm::CscSequential => Box::new(CscSequentialCounter {
            skip_self_index: config.self_index_skip,
        }),
        Algorithm::CscStatic => Box::new(
            CscParallelCounter::new(config.threads, Schedule::Static)
                .with_self_index_skip(config.self_index_skip),
        ),
        Algorithm::CscDynamic => Box::new(
            CscParallelCounter::new(
                config.threads,
                Schedule::Dynamic {
                    batch: config.dynamic_batch,
                },
            )
            .with_self_index_skip(config.self_index_skip),
        ),
        Algorithm::NeighborExpansion => Box::new(NeighborExpansionCounter::new(config.threads)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("csc-dynamic".parse::<Algorithm>(), Ok(Algorithm::CscDynamic));
        assert_eq!(" Naive ".parse::<Algorithm>(), Ok(Algorithm::Naive));
        assert!("v5".parse::<Algorithm>().is_err());
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse::<Algorithm>(), Ok(a));
        }
    }

    #[test]
    fn test_counter_names() {
        let config = RunConfig::default();
        assert_eq!(counter_for(Algorithm::Naive, &config).name(), "Naive COO");
        assert_eq!(counter_for(Algorithm::CscStatic, &config).name(), "CSC Parallel (static)");
        assert_eq!(
            counter_for(Algorithm::NeighborExpansion, &config).name(),
            "Neighbor Expansion"
        );
    }
}

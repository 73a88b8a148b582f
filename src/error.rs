//! Error types for the tricount driver

use thiserror::Error;
use tricount_algorithms::{CountError, GraphError};

/// Errors raised while loading graphs, configuring or running benchmarks
#[derive(Error, Debug)]
pub enum TricountError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed Matrix Market content
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Well-formed Matrix Market file that describes something we cannot count
    #[error("Unsupported matrix: {0}")]
    Unsupported(String),

    /// Input violates the CSC graph invariants
    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphError),

    /// Counter failed to run
    #[error("Counter error: {0}")]
    Count(#[from] CountError),

    /// Invalid configuration value or file
    #[error("Config error: {0}")]
    Config(String),

    /// YAML config error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON config error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two algorithms reported different totals for the same graph
    #[error("Algorithms disagree: {0}")]
    Disagreement(String),
}

pub type TricountResult<T> = Result<T, TricountError>;

impl TricountError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        TricountError::Parse {
            line,
            message: message.into(),
        }
    }
}

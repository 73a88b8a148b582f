//! Run configuration
//!
//! Defaults can be overridden from a YAML or JSON file and then by command
//! line flags.

use crate::algo::Algorithm;
use crate::error::{TricountError, TricountResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use tricount_algorithms::DEFAULT_VERTEX_LIMIT;

/// Settings for one benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Worker threads for the parallel counters
    pub threads: usize,
    /// Columns claimed per step by the dynamic schedule
    pub dynamic_batch: usize,
    /// Largest graph the dense oracle will run on
    pub naive_vertex_limit: usize,
    /// Counters to run, in order
    pub algorithms: Vec<Algorithm>,
    /// Reproduce the self-index skip of the reference benchmark
    pub self_index_skip: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            threads: rayon::current_num_threads(),
            dynamic_batch: 1,
            naive_vertex_limit: DEFAULT_VERTEX_LIMIT,
            algorithms: Algorithm::ALL.to_vec(),
            self_index_skip: false,
        }
    }
}

impl RunConfig {
    /// Load a config file, choosing the format from the extension.
    pub fn from_file(path: impl AsRef<Path>) -> TricountResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: RunConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            Some("json") => serde_json::from_str(&text)?,
            _ => {
                return Err(TricountError::Config(format!(
                    "unrecognised config extension: {:?}",
                    path
                )))
            }
        };
        config.validate()?;
        debug!("Loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }

    pub fn validate(&self) -> TricountResult<()> {
        if self.threads == 0 {
            return Err(TricountError::Config("threads must be at least 1".to_string()));
        }
        if self.dynamic_batch == 0 {
            return Err(TricountError::Config(
                "dynamic_batch must be at least 1".to_string(),
            ));
        }
        if self.algorithms.is_empty() {
            return Err(TricountError::Config("no algorithms selected".to_string()));
        }
        Ok(())
    }
}

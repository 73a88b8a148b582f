//! Benchmark driver
//!
//! Runs the selected counters against one graph, timing only the counting
//! step, and checks that every algorithm reports the same total.

use crate::algo::{counter_for, Algorithm};
use crate::config::RunConfig;
use crate::error::{TricountError, TricountResult};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Instant;
use tracing::{info, warn};
use tricount_algorithms::{aggregate, SparseGraph};

/// Outcome of one counter run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Display name of the counter
    pub algorithm: String,
    pub kind: Algorithm,
    /// Wall-clock seconds spent counting
    pub elapsed_secs: f64,
    pub triangles: u64,
    /// Worker threads, for parallel counters
    pub threads: Option<usize>,
    pub vertices: usize,
    pub nnz: usize,
    /// Triangles per vertex
    #[serde(skip)]
    pub per_vertex: Vec<u64>,
}

/// Run a single counter on `graph`.
pub fn run(
    graph: &SparseGraph,
    algorithm: Algorithm,
    config: &RunConfig,
) -> TricountResult<BenchmarkReport> {
    let counter = counter_for(algorithm, config);
    info!(
        "Running {} on {} vertices / {} nonzeros",
        counter.name(),
        graph.vertex_count(),
        graph.nnz()
    );

    let start = Instant::now();
    let contrib = counter.count(graph)?;
    let elapsed = start.elapsed();

    let result = aggregate(&contrib);
    info!(
        "{} finished in {:.6}s: {} triangles",
        counter.name(),
        elapsed.as_secs_f64(),
        result.total
    );

    Ok(BenchmarkReport {
        algorithm: counter.name().to_string(),
        kind: algorithm,
        elapsed_secs: elapsed.as_secs_f64(),
        triangles: result.total,
        threads: algorithm.is_parallel().then_some(config.threads),
        vertices: graph.vertex_count(),
        nnz: graph.nnz(),
        per_vertex: result.per_vertex,
    })
}

/// Run every configured counter. The dense oracle is skipped, with a warning,
/// on graphs above its vertex limit.
pub fn run_all(graph: &SparseGraph, config: &RunConfig) -> TricountResult<Vec<BenchmarkReport>> {
    config.validate()?;

    let mut reports = Vec::with_capacity(config.algorithms.len());
    for &algorithm in &config.algorithms {
        if algorithm == Algorithm::Naive && graph.vertex_count() > config.naive_vertex_limit {
            warn!(
                "Skipping {}: {} vertices exceeds limit of {}",
                algorithm,
                graph.vertex_count(),
                config.naive_vertex_limit
            );
            continue;
        }
        reports.push(run(graph, algorithm, config)?);
    }
    Ok(reports)
}

/// Return the common triangle count, or an error naming the first mismatch.
pub fn check_agreement(reports: &[BenchmarkReport]) -> TricountResult<u64> {
    let Some(first) = reports.first() else {
        return Ok(0);
    };
    for report in &reports[1..] {
        if report.triangles != first.triangles {
            return Err(TricountError::Disagreement(format!(
                "{} counted {} triangles, {} counted {}",
                first.algorithm, first.triangles, report.algorithm, report.triangles
            )));
        }
    }
    Ok(first.triangles)
}

/// Classic boxed report block.
pub fn format_box(report: &BenchmarkReport) -> String {
    let mut out = String::new();
    let rule = "-----------------------------------";
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "| Algorithm: {}", report.algorithm);
    let _ = writeln!(out, "| Time: {:10.6}", report.elapsed_secs);
    let _ = writeln!(out, "| Triangles: {}", report.triangles);
    let _ = writeln!(out, "{}", rule);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::generate;

    #[test]
    fn test_run_all_agrees_on_k5() {
        let graph = generate::complete(5).to_csc().unwrap();
        let config = RunConfig {
            threads: 4,
            ..RunConfig::default()
        };
        let reports = run_all(&graph, &config).unwrap();
        assert_eq!(reports.len(), 5);
        assert_eq!(check_agreement(&reports).unwrap(), 10);
        assert_eq!(reports[0].threads, None);
        assert_eq!(reports[2].threads, Some(4));
        assert_eq!(reports[4].per_vertex, vec![6; 5]);
    }

    #[test]
    fn test_naive_skipped_above_limit() {
        let graph = generate::path(20).to_csc().unwrap();
        let config = RunConfig {
            naive_vertex_limit: 10,
            ..RunConfig::default()
        };
        let reports = run_all(&graph, &config).unwrap();
        assert!(reports.iter().all(|r| r.kind != Algorithm::Naive));
        assert_eq!(check_agreement(&reports).unwrap(), 0);
    }

    #[test]
    fn test_disagreement_detected() {
        let graph = generate::complete(4).to_csc().unwrap();
        let config = RunConfig::default();
        let a = run(&graph, Algorithm::CscSequential, &config).unwrap();
        let mut b = a.clone();
        b.triangles += 1;
        assert!(matches!(
            check_agreement(&[a, b]),
            Err(TricountError::Disagreement(_))
        ));
        assert_eq!(check_agreement(&[]).unwrap(), 0);
    }

    #[test]
    fn test_format_box() {
        let graph = generate::complete(4).to_csc().unwrap();
        let report = run(&graph, Algorithm::CscSequential, &RunConfig::default()).unwrap();
        let text = format_box(&report);
        assert!(text.contains("| Algorithm: CSC Sequential"));
        assert!(text.contains("| Triangles: 4"));
        assert!(text.contains("| Time: "));
    }
}

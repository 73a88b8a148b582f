//! Tricount CLI: count triangles in a Matrix Market graph with every algorithm

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tricount::matrix::{generate, write_matrix_market};
use tricount::{bench, Algorithm, BenchmarkReport, RunConfig};

#[derive(Parser)]
#[command(name = "tricount", version, about = "Triangle counting benchmarks for sparse graphs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Box,
    Table,
    Json,
    Csv,
}

#[derive(Clone, clap::ValueEnum)]
enum GraphKind {
    Complete,
    Path,
    Star,
    Random,
}

#[derive(Subcommand)]
enum Commands {
    /// Count triangles in a Matrix Market file
    Count {
        /// Path to the .mtx file
        matrix: PathBuf,

        /// YAML or JSON run configuration
        #[arg(long, env = "TRICOUNT_CONFIG")]
        config: Option<PathBuf>,

        /// Worker threads for the parallel counters
        #[arg(long, short = 't', env = "TRICOUNT_THREADS")]
        threads: Option<usize>,

        /// Algorithms to run (comma separated)
        #[arg(long, short = 'a', value_delimiter = ',')]
        algorithm: Vec<Algorithm>,

        /// Columns claimed per step by the dynamic schedule
        #[arg(long)]
        batch: Option<usize>,

        /// Largest graph the dense oracle runs on
        #[arg(long)]
        naive_limit: Option<usize>,

        /// Reproduce the self-index skip of the reference benchmark
        #[arg(long)]
        self_index_skip: bool,

        /// Output format
        #[arg(long, default_value = "box")]
        format: OutputFormat,

        /// Also print the N vertices with the most triangles
        #[arg(long, default_value_t = 0)]
        per_vertex: usize,
    },
    /// Write a synthetic graph as a Matrix Market file
    Generate {
        /// Graph family
        kind: GraphKind,

        /// Number of vertices
        #[arg(long, short = 'n')]
        vertices: usize,

        /// Edge probability for random graphs
        #[arg(long, default_value_t = 0.01)]
        probability: f64,

        /// Seed for random graphs
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output file
        #[arg(long, short = 'o')]
        output: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Count {
            matrix,
            config,
            threads,
            algorithm,
            batch,
            naive_limit,
            self_index_skip,
            format,
            per_vertex,
        } => build_config(config, threads, algorithm, batch, naive_limit, self_index_skip)
            .and_then(|config| run_count(&matrix, &config, &format, per_vertex)),
        Commands::Generate {
            kind,
            vertices,
            probability,
            seed,
            output,
        } => run_generate(kind, vertices, probability, seed, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_config(
    path: Option<PathBuf>,
    threads: Option<usize>,
    algorithms: Vec<Algorithm>,
    batch: Option<usize>,
    naive_limit: Option<usize>,
    self_index_skip: bool,
) -> Result<RunConfig, Box<dyn std::error::Error>> {
    let mut config = match path {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };
    if let Some(threads) = threads {
        config.threads = threads;
    }
    if !algorithms.is_empty() {
        config.algorithms = algorithms;
    }
    if let Some(batch) = batch {
        config.dynamic_batch = batch;
    }
    if let Some(limit) = naive_limit {
        config.naive_vertex_limit = limit;
    }
    config.self_index_skip |= self_index_skip;
    config.validate()?;
    Ok(config)
}

fn run_count(
    matrix: &Path,
    config: &RunConfig,
    format: &OutputFormat,
    per_vertex: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = tricount::load_graph(matrix)?;
    let reports = bench::run_all(&graph, config)?;

    match format {
        OutputFormat::Box => {
            for report in &reports {
                print!("{}", bench::format_box(report));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Csv => {
            println!("algorithm,threads,seconds,triangles");
            for r in &reports {
                println!(
                    "{},{},{:.6},{}",
                    r.kind,
                    r.threads.map(|t| t.to_string()).unwrap_or_default(),
                    r.elapsed_secs,
                    r.triangles
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Algorithm", "Threads", "Time (s)", "Triangles"]);
            for r in &reports {
                table.add_row(vec![
                    r.algorithm.clone(),
                    r.threads.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string()),
                    format!("{:.6}", r.elapsed_secs),
                    r.triangles.to_string(),
                ]);
            }
            println!("{}", table);
            println!("{} vertices, {} nonzeros", graph.vertex_count(), graph.nnz());
        }
    }

    if per_vertex > 0 {
        if let Some(report) = reports.first() {
            print_top_vertices(report, per_vertex);
        }
    }

    bench::check_agreement(&reports)?;
    Ok(())
}

fn print_top_vertices(report: &BenchmarkReport, limit: usize) {
    let mut ranked: Vec<(usize, u64)> = report.per_vertex.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut table = Table::new();
    table.set_header(vec!["Vertex", "Triangles"]);
    for (vertex, count) in ranked.into_iter().take(limit) {
        table.add_row(vec![vertex.to_string(), count.to_string()]);
    }
    println!("{}", table);
}

fn run_generate(
    kind: GraphKind,
    vertices: usize,
    probability: f64,
    seed: u64,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let coo = match kind {
        GraphKind::Complete => generate::complete(vertices),
        GraphKind::Path => generate::path(vertices),
        GraphKind::Star => generate::star(vertices),
        GraphKind::Random => generate::erdos_renyi(vertices, probability, seed),
    };
    let file = std::fs::File::create(output)?;
    write_matrix_market(&coo, file)?;
    tracing::info!("Wrote {} edges to {:?}", coo.len(), output);
    Ok(())
}

//! Common command line arguments. Makes sure all executables accept the same graph sources and
//! output options.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;

use crate::distance::Weight;
use crate::generator::{default_rng, Node, RandomGraph};
use crate::graph::Graph;
use crate::loader::GraphLoader;

/// Arguments of the Johnson executable.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub source: GraphSource,
}

/// Arguments of the baseline executables, which neither fan out nor cross-check.
#[derive(Debug, Parser)]
#[command(version, about = "Baseline all-pairs shortest paths", long_about = None)]
pub struct BaselineCli {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub source: GraphSource,
}

/// Output options accepted by every executable.
#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Emit the distance matrix as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options shared across all graph sources.
#[derive(Debug, Args)]
pub struct GlobalOptions {
    #[command(flatten)]
    pub output: OutputOptions,

    /// Size of the worker pool for the per-vertex searches. Defaults to the available cores.
    #[arg(short, long, global = true, value_name = "N")]
    pub workers: Option<usize>,

    /// Verify the result against Bellman-Ford run from every vertex.
    #[arg(long, global = true)]
    pub check: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum GraphSource {
    /// Load a graph from a text file of vertex lines and `source target weight` lines.
    File {
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Declare edge endpoints on first use instead of requiring vertex lines.
        #[arg(long)]
        implicit_vertices: bool,
    },

    /// Generate a reproducible random graph.
    Random {
        #[arg(long)]
        nodes: Node,

        #[arg(long)]
        edges: u32,

        /// Inclusive lower bound of the edge weights.
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        low: Weight,

        /// Exclusive upper bound of the edge weights.
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        high: Weight,

        /// Shift weights by random potentials below this bound, creating negative edges
        /// without negative cycles.
        #[arg(long, value_name = "SPREAD")]
        negative: Option<Weight>,

        #[arg(long, default_value_t = 10)]
        seed: u64,
    },
}

/// A graph from either source. Files name their vertices, generated graphs number them.
#[derive(Debug, Clone)]
pub enum LoadedGraph {
    Named(Graph<String>),
    Numbered(Graph<Node>),
}

impl GraphSource {
    pub fn load(&self) -> anyhow::Result<LoadedGraph> {
        match self {
            GraphSource::File { path, implicit_vertices } => {
                let graph = GraphLoader::new()
                    .implicit_vertices(*implicit_vertices)
                    .load_file(path)
                    .with_context(|| format!("failed to load {}", path.display()))?;
                info!(
                    "loaded {} vertices, {} edges from {}",
                    graph.vertex_count(),
                    graph.edge_count(),
                    path.display()
                );
                Ok(LoadedGraph::Named(graph))
            }
            GraphSource::Random { nodes, edges, low, high, negative, seed } => {
                let description = RandomGraph {
                    nodes: *nodes,
                    edges: *edges,
                    weight_range: (*low, *high),
                    potential_spread: *negative,
                };
                let graph = description
                    .generate(&mut default_rng(*seed))
                    .context("invalid random graph parameters")?;
                info!(
                    "generated {} vertices, {} edges (seed {})",
                    graph.vertex_count(),
                    graph.edge_count(),
                    seed
                );
                Ok(LoadedGraph::Numbered(graph))
            }
        }
    }
}

impl OutputOptions {
    /// Library logs go to stderr at info level; `--verbose` enables debug; `RUST_LOG` overrides.
    pub fn init_logging(&self) {
        let level = if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_target(false)
            .init();
    }
}

impl GlobalOptions {
    /// Sizes the global rayon pool. Must run before the first parallel computation.
    pub fn init_workers(&self) -> Result<(), rayon::ThreadPoolBuildError> {
        if let Some(workers) = self.workers {
            rayon::ThreadPoolBuilder::new().num_threads(workers).build_global()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorError;

    #[test]
    fn parses_random_source() {
        let cli = Cli::try_parse_from(&[
            "apsp", "--workers", "2", "random", "--nodes", "5", "--edges", "8", "--negative", "4",
        ])
        .unwrap();
        assert_eq!(cli.global.workers, Some(2));
        match cli.source.load().unwrap() {
            LoadedGraph::Numbered(graph) => assert_eq!(graph.vertex_count(), 5),
            other => panic!("unexpected graph {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_weight_range() {
        let cli = Cli::try_parse_from(&["apsp", "random", "--nodes", "3", "--edges", "3", "--low", "4", "--high", "4"])
            .unwrap();
        let err = cli.source.load().unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeneratorError>(),
            Some(&GeneratorError::EmptyWeightRange { low: 4, high: 4 })
        );
    }

    #[test]
    fn rejects_potential_shift_beyond_i64() {
        let cli = Cli::try_parse_from(&[
            "apsp", "random", "--nodes", "3", "--edges", "20", "--low", "0", "--high", "9223372036854775807",
            "--negative", "100",
        ])
        .unwrap();
        let err = cli.source.load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::WeightOverflow { spread: 100, .. })
        ));
    }

    #[test]
    fn missing_file_names_the_path() {
        let cli = Cli::try_parse_from(&["apsp", "file", "/nonexistent/graph.txt"]).unwrap();
        let err = cli.source.load().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/graph.txt"), "{}", err);
    }

    #[test]
    fn baseline_accepts_output_flags_only() {
        let cli = BaselineCli::try_parse_from(&["apsp_petgraph", "file", "graph.txt", "--json", "-v"]).unwrap();
        assert!(cli.output.json && cli.output.verbose);
        assert!(BaselineCli::try_parse_from(&["apsp_petgraph", "--workers", "2", "file", "graph.txt"]).is_err());
        assert!(BaselineCli::try_parse_from(&["apsp_petgraph", "file", "graph.txt", "--check"]).is_err());
    }

    #[test]
    fn parses_file_source_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(&["apsp", "file", "graph.txt", "--json", "--check"]).unwrap();
        assert!(cli.global.output.json && cli.global.check);
        assert!(matches!(cli.source, GraphSource::File { implicit_vertices: false, .. }));
    }
}

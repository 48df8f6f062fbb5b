/// Baseline implementation using the petgraph Rust graph
/// library: Bellman-Ford from every vertex.
extern crate apsp;

use anyhow::bail;
use clap::Parser;
use log::info;
use serde::Serialize;

use apsp::config::{BaselineCli, LoadedGraph, OutputOptions};
use apsp::reference::petgraph_all_pairs;
use apsp::timer::PhaseTimer;
use apsp::{Distance, DistanceMatrix, Graph};

fn main() -> anyhow::Result<()> {
    let cli = BaselineCli::parse();
    cli.output.init_logging();

    // Start timer.
    let mut timer = PhaseTimer::start();

    // Measure data loading.
    let graph = timer.time("Loading", || cli.source.load())?;

    let result = match graph {
        LoadedGraph::Named(graph) => run(&graph, &cli.output, &mut timer),
        LoadedGraph::Numbered(graph) => run(&graph, &cli.output, &mut timer),
    };
    timer.report();
    result
}

fn run<N>(graph: &Graph<N>, options: &OutputOptions, timer: &mut PhaseTimer) -> anyhow::Result<()>
where
    N: Ord + Clone + Serialize,
{
    let distances = match timer.time("Initial", || petgraph_all_pairs(graph)) {
        Some(distances) => distances,
        None => bail!("graph contains a negative-weight cycle"),
    };
    info!(
        "petgraph Bellman-Ford algorithm finished in: {:?}",
        timer.elapsed()
    );

    if options.json {
        println!("{}", serde_json::to_string_pretty(&distances)?);
    } else {
        println!("{} reachable ordered pairs", reachable_pairs(&distances));
    }
    Ok(())
}

fn reachable_pairs<N: Ord>(distances: &DistanceMatrix<N>) -> usize {
    distances.iter().filter(|(_, _, d)| *d != Distance::Unreachable).count()
}

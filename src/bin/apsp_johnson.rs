// All-pairs shortest paths with Johnson's algorithm.

extern crate apsp;

use std::fmt::{Debug, Display};

use anyhow::{ensure, Context};
use clap::Parser;
use log::info;
use serde::Serialize;

use apsp::config::{Cli, GlobalOptions, LoadedGraph};
use apsp::reference::bellman_ford_all_pairs;
use apsp::timer::PhaseTimer;
use apsp::{compute_all_pairs, DistanceMatrix, Graph};

fn main() -> anyhow::Result<()> {
    // Test arguments:
    // apsp_johnson file graph.txt --check
    // apsp_johnson random --nodes 100 --edges 400 --low 0 --high 20 --negative 30 --workers 4
    let cli = Cli::parse();
    cli.global.output.init_logging();
    cli.global.init_workers().context("failed to size the worker pool")?;

    // Start timer.
    let mut timer = PhaseTimer::start();
    let graph = timer.time("Loading", || cli.source.load())?;

    let result = match graph {
        LoadedGraph::Named(graph) => run(&graph, &cli.global, &mut timer),
        LoadedGraph::Numbered(graph) => run(&graph, &cli.global, &mut timer),
    };
    timer.report();
    result
}

fn run<N>(graph: &Graph<N>, options: &GlobalOptions, timer: &mut PhaseTimer) -> anyhow::Result<()>
where
    N: Ord + Clone + Debug + Display + Serialize + Send + Sync + 'static,
{
    info!(
        "Performing APSP on {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    let distances = timer
        .time("Johnson", || compute_all_pairs(graph))
        .context("shortest paths are undefined")?;
    info!("Johnson's algorithm finished in: {:?}", timer.elapsed());

    if options.check {
        let expected = timer
            .time("Check", || bellman_ford_all_pairs(graph))
            .context("reference computation failed")?;
        ensure!(expected == distances, "distances differ from the Bellman-Ford reference");
        info!("distances match the Bellman-Ford reference");
    }

    if options.output.json {
        println!("{}", serde_json::to_string_pretty(&distances)?);
    } else {
        print_table(&distances);
    }
    Ok(())
}

/// Rows are sources, columns are targets; unreachable pairs show as `inf`.
fn print_table<N: Ord + Display>(distances: &DistanceMatrix<N>) {
    let labels: Vec<String> = distances.vertices().map(|v| v.to_string()).collect();
    let cells: Vec<Vec<String>> = distances
        .vertices()
        .map(|from| {
            distances
                .row(from)
                .map(|row| row.values().map(|d| d.to_string()).collect())
                .unwrap_or_default()
        })
        .collect();
    let width = labels
        .iter()
        .chain(cells.iter().flatten())
        .map(String::len)
        .max()
        .unwrap_or(0);

    let header: Vec<String> = labels.iter().map(|l| format!("{:>w$}", l, w = width)).collect();
    println!("{:>w$} | {}", "", header.join(" "), w = width);
    for (label, row) in labels.iter().zip(cells.iter()) {
        let row: Vec<String> = row.iter().map(|c| format!("{:>w$}", c, w = width)).collect();
        println!("{:>w$} | {}", label, row.join(" "), w = width);
    }
}

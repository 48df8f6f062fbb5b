//! Single-source shortest paths with negative weights and negative-cycle detection.
//!
//! Every edge is relaxed once per round, for at most `|V| - 1` rounds. One further pass over all
//! edges then decides whether a negative cycle is reachable from the source. Unreachable vertices
//! never act as the tail of a relaxation. Complexity is `O(V * E)`.
//!
//! Lengths are accumulated as `Length` (`i128`), so even a cycle made of `i64::MIN` edges keeps
//! relaxing strictly and is detected.

use std::collections::BTreeMap;
use std::fmt::Debug;

use log::{debug, warn};

use crate::distance::{Distance, Length};
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Distances and shortest-path predecessors from one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths<N: Ord> {
    pub distances: BTreeMap<N, Distance>,
    pub predecessors: BTreeMap<N, Option<N>>,
}

/// Computes shortest paths from `source`, which must be a vertex of `graph`.
///
/// Fails with [`Error::NegativeCycle`] if a negative-weight cycle is reachable from `source`;
/// no partial distances are returned in that case.
pub fn bellman_ford<N, W>(graph: &Graph<N, W>, source: &N) -> Result<Paths<N>, N>
where
    N: Ord + Clone + Debug,
    W: Copy + Into<Length>,
{
    let mut distances: BTreeMap<N, Distance> =
        graph.vertices().map(|v| (v.clone(), Distance::Unreachable)).collect();
    let mut predecessors: BTreeMap<N, Option<N>> =
        graph.vertices().map(|v| (v.clone(), None)).collect();
    distances.insert(source.clone(), Distance::zero());

    let rounds = graph.vertex_count().saturating_sub(1);
    let mut performed = 0;
    for _ in 0..rounds {
        performed += 1;
        let mut did_update = false;
        for (from, to, weight) in graph.edges() {
            if let Some(candidate) = relaxation(&distances, from, to, weight.into()) {
                distances.insert(to.clone(), candidate);
                predecessors.insert(to.clone(), Some(from.clone()));
                did_update = true;
            }
        }
        // A round without updates is a fixed point; further rounds cannot change anything.
        if !did_update {
            break;
        }
    }
    debug!(
        "bellman-ford from {:?}: {} vertices, {} edges, {} rounds",
        source,
        graph.vertex_count(),
        graph.edge_count(),
        performed
    );

    for (from, to, weight) in graph.edges() {
        if relaxation(&distances, from, to, weight.into()).is_some() {
            predecessors.insert(to.clone(), Some(from.clone()));
            let vertex = vertex_on_cycle(&predecessors, to, graph.vertex_count());
            warn!("negative-weight cycle detected through {:?}", vertex);
            return Err(Error::NegativeCycle { vertex });
        }
    }

    Ok(Paths { distances, predecessors })
}

/// The improved distance of `to` via `from -> to`, if the edge relaxes.
fn relaxation<N: Ord>(
    distances: &BTreeMap<N, Distance>,
    from: &N,
    to: &N,
    weight: Length,
) -> Option<Distance> {
    let tail = distances.get(from).copied().unwrap_or_default();
    if !tail.is_reachable() {
        return None;
    }
    let candidate = tail + weight;
    let current = distances.get(to).copied().unwrap_or_default();
    if candidate < current {
        Some(candidate)
    } else {
        None
    }
}

/// Walks `vertex_count` predecessor steps back from a vertex whose distance still improves.
/// The walk can only keep going by circling the cycle, so it ends on it.
fn vertex_on_cycle<N: Ord + Clone>(
    predecessors: &BTreeMap<N, Option<N>>,
    start: &N,
    vertex_count: usize,
) -> N {
    let mut vertex = start;
    for _ in 0..vertex_count {
        match predecessors.get(vertex) {
            Some(Some(previous)) => vertex = previous,
            _ => break,
        }
    }
    vertex.clone()
}

//! All-pairs shortest paths with Johnson's algorithm.
//!
//! 1. A working copy of the graph gains a synthetic source with a zero-weight edge to every
//!    vertex.
//! 2. Bellman-Ford from that source yields the potential `h(v)` of every vertex, or aborts the
//!    whole computation on a negative cycle.
//! 3. Every edge is reweighted to `w(u, v) + h(u) - h(v)`, which is never negative.
//! 4. Dijkstra runs from every vertex on the reweighted graph. The runs only share the read-only
//!    reweighted graph, so they are spread over the rayon pool.
//! 5. Finite results are shifted back by `h(v) - h(u)`.
//!
//! Potentials and reweighted edges are `Length` values: `h` can reach `(|V| - 1) * i64::MIN`, so a
//! reweighted edge does not fit the input weight type in general.
//!
//! Nothing is cached between calls: every computation starts from the graph it is handed.

use std::collections::BTreeMap;
use std::fmt::Debug;

use log::{debug, trace};
use rayon::prelude::*;
use serde_derive::{Deserialize, Serialize};

use crate::bellman_ford::bellman_ford;
use crate::dijkstra::dijkstra;
use crate::distance::{Distance, Length};
use crate::error::{Error, Result};
use crate::graph::{Augmented, Graph};

/// Vertex potentials `h` derived from the synthetic source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Potentials<N: Ord> {
    values: BTreeMap<N, Length>,
}

impl<N: Ord> Potentials<N> {
    /// Potential of `vertex`. Vertices outside the graph the potentials came from count as 0.
    pub fn get(&self, vertex: &N) -> Length {
        self.values.get(vertex).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, Length)> {
        self.values.iter().map(|(v, h)| (v, *h))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Shortest-path distances between every ordered pair of vertices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceMatrix<N: Ord> {
    rows: BTreeMap<N, BTreeMap<N, Distance>>,
}

impl<N: Ord> DistanceMatrix<N> {
    pub(crate) fn from_rows(rows: BTreeMap<N, BTreeMap<N, Distance>>) -> Self {
        DistanceMatrix { rows }
    }

    /// Distance from `from` to `to`, or `None` if either is not a vertex of the graph.
    pub fn get(&self, from: &N, to: &N) -> Option<Distance> {
        self.rows.get(from).and_then(|row| row.get(to).copied())
    }

    /// Distances from `from` to every vertex.
    pub fn row(&self, from: &N) -> Option<&BTreeMap<N, Distance>> {
        self.rows.get(from)
    }

    /// Source vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &N> {
        self.rows.keys()
    }

    /// Every `(from, to, distance)` triple, by source then target.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &N, Distance)> {
        self.rows
            .iter()
            .flat_map(|(from, row)| row.iter().map(move |(to, d)| (from, to, *d)))
    }

    /// Number of ordered pairs.
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Computes the potential of every vertex with Bellman-Ford from a synthetic source.
///
/// `graph` itself is not modified; the source only exists in a working copy.
pub fn potentials<N>(graph: &Graph<N>) -> Result<Potentials<N>, N>
where
    N: Ord + Clone + Debug,
{
    let augmented = graph.with_synthetic_source();
    let paths = match bellman_ford(&augmented, &Augmented::Source) {
        Ok(paths) => paths,
        Err(Error::NegativeCycle { vertex: Augmented::Real(vertex) }) => {
            return Err(Error::NegativeCycle { vertex })
        }
        // The synthetic source has no incoming edges and so is never on a cycle.
        Err(err) => unreachable!("bellman-ford on the augmented graph failed: {}", err),
    };

    let values = paths
        .distances
        .into_iter()
        .filter_map(|(vertex, distance)| match vertex {
            // Every real vertex hangs off the source at weight 0, so its distance is finite.
            Augmented::Real(v) => Some((v, distance.finite().unwrap_or(0))),
            Augmented::Source => None,
        })
        .collect();
    Ok(Potentials { values })
}

/// Reweights every edge to `w(u, v) + h(u) - h(v)`.
///
/// With potentials from [`potentials`] the result has no negative edge.
pub fn reweight<N>(graph: &Graph<N>, potentials: &Potentials<N>) -> Graph<N, Length>
where
    N: Ord + Clone,
{
    graph.map_weights(|from, to, weight| {
        Length::from(weight) + potentials.get(from) - potentials.get(to)
    })
}

/// Computes shortest-path distances between all ordered pairs of vertices.
///
/// Fails with [`Error::NegativeCycle`] if the graph has a negative-weight cycle, in which case no
/// distances are produced. Per-vertex searches run on the rayon pool.
pub fn compute_all_pairs<N>(graph: &Graph<N>) -> Result<DistanceMatrix<N>, N>
where
    N: Ord + Clone + Debug + Send + Sync,
{
    let (reweighted, potentials) = prepare(graph)?;
    let rows = reweighted
        .adjacency()
        .par_iter()
        .map(|(source, _)| (source.clone(), restored_row(&reweighted, &potentials, source)))
        .collect();
    Ok(DistanceMatrix::from_rows(rows))
}

/// Same as [`compute_all_pairs`], with every search on the calling thread.
pub fn compute_all_pairs_sequential<N>(graph: &Graph<N>) -> Result<DistanceMatrix<N>, N>
where
    N: Ord + Clone + Debug,
{
    let (reweighted, potentials) = prepare(graph)?;
    let rows = reweighted
        .vertices()
        .map(|source| (source.clone(), restored_row(&reweighted, &potentials, source)))
        .collect();
    Ok(DistanceMatrix::from_rows(rows))
}

/// Steps 1 to 3. Must finish before any Dijkstra run starts.
fn prepare<N>(graph: &Graph<N>) -> Result<(Graph<N, Length>, Potentials<N>), N>
where
    N: Ord + Clone + Debug,
{
    let potentials = potentials(graph)?;
    let reweighted = reweight(graph, &potentials);
    debug!(
        "reweighted {} edges over {} vertices",
        reweighted.edge_count(),
        reweighted.vertex_count()
    );
    Ok((reweighted, potentials))
}

fn restored_row<N>(
    reweighted: &Graph<N, Length>,
    potentials: &Potentials<N>,
    source: &N,
) -> BTreeMap<N, Distance>
where
    N: Ord + Clone + Debug,
{
    trace!("dijkstra from {:?}", source);
    let h_source = potentials.get(source);
    dijkstra(reweighted, source)
        .into_iter()
        .map(|(target, distance)| {
            let restored = distance.shift(h_source, potentials.get(&target));
            (target, restored)
        })
        .collect()
}

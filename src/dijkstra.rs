//! Single-source shortest paths over non-negative weights.
//!
//! The queue never has priorities decreased in place: an improved vertex is pushed again and the
//! outdated entry is skipped when it surfaces. Complexity is `O((V + E) log V)`.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use crate::distance::{Distance, Length};
use crate::graph::Graph;

/// Queue entry. Ordered so that `BinaryHeap`, a max-heap, pops the smallest cost first.
#[derive(PartialEq, Eq)]
struct State<'a, N> {
    cost: Length,
    vertex: &'a N,
}

impl<'a, N: Ord> Ord for State<'a, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(self.vertex))
    }
}

impl<'a, N: Ord> PartialOrd for State<'a, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances from `source` to every vertex of `graph`; vertices not reached are `Unreachable`.
///
/// All edge weights must be non-negative. This is not checked: a negative weight makes the
/// result meaningless rather than failing.
pub fn dijkstra<N, W>(graph: &Graph<N, W>, source: &N) -> BTreeMap<N, Distance>
where
    N: Ord + Clone,
    W: Copy + Into<Length>,
{
    let mut best: BTreeMap<&N, Length> = BTreeMap::new();
    let mut heap = BinaryHeap::new();

    if let Some((source, _)) = graph.adjacency().get_key_value(source) {
        best.insert(source, 0);
        heap.push(State { cost: 0, vertex: source });
    }

    while let Some(State { cost, vertex }) = heap.pop() {
        if best.get(vertex).map_or(false, |known| cost > *known) {
            continue;
        }
        for (next, weight) in graph.neighbors(vertex) {
            let next_cost = cost.saturating_add(weight.into());
            let improves = best.get(next).map_or(true, |known| next_cost < *known);
            if improves {
                best.insert(next, next_cost);
                heap.push(State { cost: next_cost, vertex: next });
            }
        }
    }

    graph
        .vertices()
        .map(|v| {
            let distance = best.get(v).map_or(Distance::Unreachable, |d| Distance::from(*d));
            (v.clone(), distance)
        })
        .collect()
}

//! Slower all-pairs computations used to cross-check Johnson's algorithm.

use std::collections::BTreeMap;
use std::fmt::Debug;

use petgraph::algo::bellman_ford as petgraph_bellman_ford;
use petgraph::graph::NodeIndex;

use crate::bellman_ford::bellman_ford;
use crate::distance::{Distance, Length};
use crate::error::Result;
use crate::graph::Graph;
use crate::johnson::DistanceMatrix;

/// Runs Bellman-Ford from every vertex. `O(V^2 * E)`.
pub fn bellman_ford_all_pairs<N>(graph: &Graph<N>) -> Result<DistanceMatrix<N>, N>
where
    N: Ord + Clone + Debug,
{
    let mut rows = BTreeMap::new();
    for source in graph.vertices() {
        let paths = bellman_ford(graph, source)?;
        rows.insert(source.clone(), paths.distances);
    }
    Ok(DistanceMatrix::from_rows(rows))
}

/// Runs petgraph's Bellman-Ford from every vertex.
///
/// petgraph measures distances in `f64`, so weights are expected to stay well inside the range
/// where `f64` represents integers exactly. Returns `None` if petgraph finds a negative cycle.
pub fn petgraph_all_pairs<N>(graph: &Graph<N>) -> Option<DistanceMatrix<N>>
where
    N: Ord + Clone,
{
    let (pg, index) = to_petgraph(graph);

    let mut rows = BTreeMap::new();
    for (source, source_index) in index.iter() {
        let (distances, _) = petgraph_bellman_ford(&pg, *source_index).ok()?;
        let row = index
            .iter()
            .map(|(target, target_index)| {
                let d = distances[target_index.index()];
                let distance = if d.is_finite() {
                    Distance::Finite(d.round() as Length)
                } else {
                    Distance::Unreachable
                };
                ((*target).clone(), distance)
            })
            .collect();
        rows.insert((*source).clone(), row);
    }
    Some(DistanceMatrix::from_rows(rows))
}

/// Copies the graph into a petgraph `Graph` with `f64` weights.
pub fn to_petgraph<N: Ord>(graph: &Graph<N>) -> (petgraph::Graph<(), f64>, BTreeMap<&N, NodeIndex>) {
    let mut pg = petgraph::Graph::with_capacity(graph.vertex_count(), graph.edge_count());
    let index: BTreeMap<&N, NodeIndex> = graph.vertices().map(|v| (v, pg.add_node(()))).collect();
    for (from, to, weight) in graph.edges() {
        pg.add_edge(index[from], index[to], weight as f64);
    }
    (pg, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Weight;
    use crate::johnson::compute_all_pairs;

    fn graph(vertices: &[char], edges: &[(char, char, Weight)]) -> Graph<char> {
        Graph::from_parts(vertices.iter().copied(), edges.iter().copied()).unwrap()
    }

    #[test]
    fn references_agree_with_johnson() {
        let g = graph(
            &['a', 'b', 'c', 'd', 'e'],
            &[('a', 'b', 4), ('a', 'c', 2), ('c', 'b', -1), ('b', 'd', 3), ('d', 'c', 0), ('e', 'a', -5)],
        );
        let johnson = compute_all_pairs(&g).unwrap();
        assert_eq!(bellman_ford_all_pairs(&g).unwrap(), johnson);
        assert_eq!(petgraph_all_pairs(&g).unwrap(), johnson);
        assert_eq!(johnson.get(&'e', &'b'), Some(Distance::Finite(-4)));
    }

    #[test]
    fn references_reject_negative_cycles() {
        let g = graph(&['x', 'y'], &[('x', 'y', 1), ('y', 'x', -3)]);
        assert!(bellman_ford_all_pairs(&g).is_err());
        assert!(petgraph_all_pairs(&g).is_none());
    }
}

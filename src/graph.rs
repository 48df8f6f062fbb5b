//! Directed weighted graph with validated construction.
//!
//! Vertices are opaque ordered identifiers. Each vertex owns a map from target vertex to weight,
//! so there is at most one edge per ordered pair: inserting the same pair again overwrites the
//! previous weight.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt::Debug;
use std::iter;

use crate::distance::Weight;
use crate::error::{Error, Result};

/// A single directed edge `(source, target, weight)`.
pub type WeightedEdge<N> = (N, N, Weight);

/// Vertex identifier of a graph extended with one synthetic vertex.
///
/// `Source` cannot collide with any real vertex, whatever the real identifier type is.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Augmented<N> {
    Source,
    Real(N),
}

/// Graphs built by callers carry `Weight` edges; reweighted working copies carry `Length` edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<N: Ord, W = Weight> {
    adjacency: BTreeMap<N, BTreeMap<N, W>>,
}

impl<N: Ord, W> Default for Graph<N, W> {
    fn default() -> Self {
        Graph { adjacency: BTreeMap::new() }
    }
}

impl<N: Ord + Clone + Debug> Graph<N> {
    pub fn new() -> Graph<N> {
        Graph::default()
    }

    /// Adds a vertex. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: N) {
        self.adjacency.entry(vertex).or_insert_with(BTreeMap::new);
    }

    /// Inserts the edge `from -> to`, overwriting the weight of an existing edge between the
    /// same ordered pair. Both endpoints must already be present; the source is checked first.
    pub fn add_edge(&mut self, from: N, to: N, weight: Weight) -> Result<(), N> {
        if !self.adjacency.contains_key(&to) && self.adjacency.contains_key(&from) {
            return Err(Error::UnknownVertex { vertex: to });
        }
        match self.adjacency.get_mut(&from) {
            Some(targets) => {
                targets.insert(to, weight);
                Ok(())
            }
            None => Err(Error::UnknownVertex { vertex: from }),
        }
    }

    /// Builds a graph from vertices and edges, stopping at the first invalid edge.
    pub fn from_parts<V, E>(vertices: V, edges: E) -> Result<Graph<N>, N>
    where
        V: IntoIterator<Item = N>,
        E: IntoIterator<Item = WeightedEdge<N>>,
    {
        let mut graph = Graph::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}

impl<N: Ord, W: Copy> Graph<N, W> {
    pub fn contains_vertex(&self, vertex: &N) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Vertices in ascending order.
    pub fn vertices(&self) -> btree_map::Keys<'_, N, BTreeMap<N, W>> {
        self.adjacency.keys()
    }

    /// Outgoing edges of `vertex` as `(target, weight)`; empty for unknown vertices.
    pub fn neighbors<'a>(&'a self, vertex: &N) -> impl Iterator<Item = (&'a N, W)> + 'a {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(to, w)| (to, *w)))
    }

    /// All edges, grouped by source in ascending order. The order is stable between calls.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, W)> {
        self.adjacency
            .iter()
            .flat_map(|(from, targets)| iter::repeat(from).zip(targets.iter()))
            .map(|(from, (to, w))| (from, to, *w))
    }

    pub fn weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency.get(from).and_then(|targets| targets.get(to).copied())
    }

    /// Adjacency rows, for callers that fan out per source vertex.
    pub(crate) fn adjacency(&self) -> &BTreeMap<N, BTreeMap<N, W>> {
        &self.adjacency
    }

    /// Copy of the graph over [`Augmented`] vertices, plus `Augmented::Source` with a zero-weight
    /// edge to every real vertex. `self` is left untouched.
    pub(crate) fn with_synthetic_source(&self) -> Graph<Augmented<N>, W>
    where
        N: Clone,
        W: From<i8>,
    {
        let mut adjacency: BTreeMap<Augmented<N>, BTreeMap<Augmented<N>, W>> = self
            .adjacency
            .iter()
            .map(|(from, targets)| {
                let row = targets.iter().map(|(to, w)| (Augmented::Real(to.clone()), *w)).collect();
                (Augmented::Real(from.clone()), row)
            })
            .collect();
        let fan_out = self
            .adjacency
            .keys()
            .map(|v| (Augmented::Real(v.clone()), W::from(0i8)))
            .collect();
        adjacency.insert(Augmented::Source, fan_out);
        Graph { adjacency }
    }

    /// Same vertex set and edges with every weight replaced by `f(from, to, weight)`.
    pub(crate) fn map_weights<V, F>(&self, mut f: F) -> Graph<N, V>
    where
        N: Clone,
        F: FnMut(&N, &N, W) -> V,
    {
        let adjacency = self
            .adjacency
            .iter()
            .map(|(from, targets)| {
                let row = targets.iter().map(|(to, w)| (to.clone(), f(from, to, *w))).collect();
                (from.clone(), row)
            })
            .collect();
        Graph { adjacency }
    }
}

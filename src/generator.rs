//! Reproducible random graphs.
//!
//! The generators from rand and rand_chacha are used because they are
//! reproducible on different machines.

use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::distance::Weight;
use crate::graph::{Graph, WeightedEdge};

pub type Node = u32;

pub fn default_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Parameters that cannot produce a graph.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("lower weight bound {low} must be less than upper bound {high}")]
    EmptyWeightRange { low: Weight, high: Weight },

    #[error("potential shifts need non-negative weights, got lower bound {low}")]
    NegativeBaseWeight { low: Weight },

    #[error("potential spread must be at least 1, got {spread}")]
    EmptySpread { spread: Weight },

    #[error("weights below {high} shifted by potentials below {spread} overflow i64")]
    WeightOverflow { high: Weight, spread: Weight },
}

/// Parameters of a random graph. Weight and potential ranges are half-open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomGraph {
    pub nodes: Node,
    pub edges: u32,
    pub weight_range: (Weight, Weight),
    /// When set, edge weights are shifted by random vertex potentials drawn from
    /// `0..potential_spread`. This introduces negative edges but never a negative cycle.
    pub potential_spread: Option<Weight>,
}

impl RandomGraph {
    /// Checks that every weight the parameters can produce is representable.
    ///
    /// A shifted weight `w + p(from) - p(to)` lies in `low - (spread - 1) ..= (high - 1) + (spread - 1)`.
    /// With `low >= 0` only the upper end can overflow.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let (low, high) = self.weight_range;
        if low >= high {
            return Err(GeneratorError::EmptyWeightRange { low, high });
        }
        if let Some(spread) = self.potential_spread {
            if low < 0 {
                return Err(GeneratorError::NegativeBaseWeight { low });
            }
            if spread < 1 {
                return Err(GeneratorError::EmptySpread { spread });
            }
            if (high - 1).checked_add(spread - 1).is_none() {
                return Err(GeneratorError::WeightOverflow { high, spread });
            }
        }
        Ok(())
    }

    pub fn generate(&self, rng: &mut ChaCha8Rng) -> Result<Graph<Node>, GeneratorError> {
        self.validate()?;
        let edges = match self.potential_spread {
            None => weighted_edges(rng, self.nodes, self.edges, self.weight_range),
            Some(spread) => potential_edges(rng, self.nodes, self.edges, self.weight_range, spread),
        };
        // Every endpoint is below `nodes`, so no edge can be rejected.
        let graph = Graph::from_parts(0..self.nodes, edges)
            .unwrap_or_else(|err| unreachable!("generated an edge outside the vertex range: {}", err));
        Ok(graph)
    }
}

/// Generate `num_edges` random edges between `num_nodes` vertices.
/// Self loops are possible; repeated pairs keep the last weight once inserted into a graph.
fn weighted_edges(
    rng: &mut ChaCha8Rng,
    num_nodes: Node,
    num_edges: u32,
    weight_range: (Weight, Weight),
) -> Vec<WeightedEdge<Node>> {
    if num_nodes == 0 {
        return Vec::new();
    }
    let dist = Uniform::new(0 as Node, num_nodes);
    let dist_w = Uniform::new(weight_range.0, weight_range.1);
    let mut edges = Vec::with_capacity(num_edges as usize);
    for _ in 0..num_edges {
        let from = dist.sample(rng);
        let to = dist.sample(rng);
        let w = dist_w.sample(rng);
        edges.push((from, to, w));
    }
    edges
}

/// Like [`weighted_edges`], but every weight becomes `w + p(from) - p(to)` for a random
/// potential `p`. Around any cycle the potentials cancel, so cycle weights stay those of the
/// underlying non-negative weights. Callers check the bounds with [`RandomGraph::validate`].
fn potential_edges(
    rng: &mut ChaCha8Rng,
    num_nodes: Node,
    num_edges: u32,
    weight_range: (Weight, Weight),
    potential_spread: Weight,
) -> Vec<WeightedEdge<Node>> {
    if num_nodes == 0 {
        return Vec::new();
    }
    let dist_p = Uniform::new(0, potential_spread);
    let potentials: Vec<Weight> = (0..num_nodes).map(|_| dist_p.sample(rng)).collect();
    weighted_edges(rng, num_nodes, num_edges, weight_range)
        .into_iter()
        .map(|(from, to, w)| (from, to, w + potentials[from as usize] - potentials[to as usize]))
        .collect()
}

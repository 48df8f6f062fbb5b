//! All-pairs shortest paths in directed weighted graphs with Johnson's algorithm.
//!
//! Negative edge weights are allowed as long as there is no negative-weight cycle. A single
//! Bellman-Ford pass from a synthetic source computes vertex potentials, the edges are reweighted
//! to be non-negative, and Dijkstra then runs from every vertex.
//!
//! ```
//! use apsp::{compute_all_pairs, Distance, Graph};
//!
//! let mut graph = Graph::new();
//! for vertex in ["A", "B", "C"].iter() {
//!     graph.add_vertex(*vertex);
//! }
//! graph.add_edge("A", "B", 3).unwrap();
//! graph.add_edge("B", "C", -2).unwrap();
//! graph.add_edge("A", "C", 5).unwrap();
//!
//! let distances = compute_all_pairs(&graph).unwrap();
//! assert_eq!(distances.get(&"A", &"C"), Some(Distance::Finite(1)));
//! assert_eq!(distances.get(&"C", &"A"), Some(Distance::Unreachable));
//! ```

pub mod bellman_ford;
pub mod config;
pub mod dijkstra;
pub mod distance;
pub mod error;
pub mod generator;
pub mod graph;
pub mod johnson;
pub mod loader;
pub mod reference;
pub mod timer;

pub use crate::distance::{Distance, Length, Weight};
pub use crate::error::Error;
pub use crate::graph::{Augmented, Graph, WeightedEdge};
pub use crate::johnson::{compute_all_pairs, compute_all_pairs_sequential, DistanceMatrix, Potentials};

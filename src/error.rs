use std::fmt::Debug;

use thiserror::Error;

/// Failures of graph construction and of the shortest-path computation.
///
/// `UnknownVertex` is raised at edge insertion and can be recovered from by fixing the input.
/// `NegativeCycle` aborts the whole computation; no distances are produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error<N: Debug> {
    /// An edge referenced a vertex that was never added to the graph.
    #[error("unknown vertex {vertex:?}")]
    UnknownVertex { vertex: N },

    /// A negative-weight cycle is reachable; `vertex` lies on it.
    #[error("graph contains a negative-weight cycle through {vertex:?}")]
    NegativeCycle { vertex: N },
}

impl<N: Debug> Error<N> {
    /// The vertex the error refers to.
    pub fn vertex(&self) -> &N {
        match self {
            Error::UnknownVertex { vertex } | Error::NegativeCycle { vertex } => vertex,
        }
    }
}

pub type Result<T, N> = std::result::Result<T, Error<N>>;

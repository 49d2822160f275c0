#![deny(missing_docs)]
#![doc = "Core data model for graphz: vertex identifiers, colours, replayable steps and traces."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;
mod step;
mod types;

pub use errors::{ErrorInfo, GraphzError};
pub use rng::RngHandle;
pub use step::{Step, Trace, TraceRecorder};
pub use types::{Color, Position};

/// Default vertex capacity of a graph, also the default adjacency capacity per vertex.
pub const MAX_VERTICES: usize = 30;

/// Identifier for a vertex within a graph.
///
/// Identifiers are dense indices assigned in insertion order, so the n-th
/// vertex ever added has index `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    /// Creates an identifier from a dense vertex index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the dense index backing the identifier.
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

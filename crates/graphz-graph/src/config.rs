use graphz_core::MAX_VERTICES;
use serde::{Deserialize, Serialize};

/// Fixed capacities enforced by a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Maximum number of vertices the graph may hold.
    #[serde(default = "default_capacity")]
    pub max_vertices: usize,
    /// Maximum length of any single adjacency list.
    #[serde(default = "default_capacity")]
    pub max_degree: usize,
}

fn default_capacity() -> usize {
    MAX_VERTICES
}

impl GraphConfig {
    /// Creates a configuration where the degree cap equals the vertex cap.
    pub const fn with_capacity(max_vertices: usize) -> Self {
        Self {
            max_vertices,
            max_degree: max_vertices,
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::with_capacity(MAX_VERTICES)
    }
}

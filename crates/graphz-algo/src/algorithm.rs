use std::fmt;
use std::str::FromStr;

use graphz_core::{ErrorInfo, GraphzError, Trace, VertexId};
use graphz_graph::Graph;
use serde::{Deserialize, Serialize};

use crate::{bfs, bipartite_check, connect_components, dfs};

/// The traversals a trace can be recorded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Two-colouring that stops at the first conflict.
    BipartiteCheck,
    /// Component repair with bridge edges.
    ConnectComponents,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::BipartiteCheck,
        Algorithm::ConnectComponents,
    ];

    /// Short command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::BipartiteCheck => "bipartite",
            Algorithm::ConnectComponents => "connect",
        }
    }

    /// Returns `false` for traversals that scan the whole graph instead of starting at a source.
    pub fn needs_source(self) -> bool {
        !matches!(self, Algorithm::ConnectComponents)
    }

    /// Records a trace of this algorithm on `graph`.
    ///
    /// `source` is ignored when [`needs_source`](Self::needs_source) is `false`.
    pub fn run(self, graph: &Graph, source: VertexId) -> Result<Trace, GraphzError> {
        match self {
            Algorithm::Bfs => bfs(graph, source),
            Algorithm::Dfs => dfs(graph, source),
            Algorithm::BipartiteCheck => bipartite_check(graph, source),
            Algorithm::ConnectComponents => Ok(connect_components(graph)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = GraphzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "bipartite" | "bipartite-check" => Ok(Algorithm::BipartiteCheck),
            "connect" | "connect-components" => Ok(Algorithm::ConnectComponents),
            other => Err(GraphzError::Config(
                ErrorInfo::new("unknown-algorithm", "algorithm name not recognised")
                    .with_context("name", other)
                    .with_hint("expected one of: bfs, dfs, bipartite, connect"),
            )),
        }
    }
}

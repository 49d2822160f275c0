//! Summary of one recorded and replayed traversal.

use std::fmt::{self, Write as _};

use graphz_algo::{bipartite_verdict, Algorithm, Bipartiteness};
use graphz_core::{Color, GraphzError, Trace, VertexId};
use graphz_graph::{canonical_hash, trace_hash, Graph};
use graphz_replay::{ReplayCursor, ReplaySummary};
use serde::Serialize;
use tracing::info;

/// Everything `graphz-sim run` prints about a traversal.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Algorithm that recorded the trace.
    pub algorithm: Algorithm,
    /// Start vertex, absent for whole-graph scans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<VertexId>,
    /// Structural hash of the input graph.
    pub graph_hash: String,
    /// Fingerprint of the recorded step sequence.
    pub trace_hash: String,
    /// The recorded steps.
    pub trace: Trace,
    /// What happened when the trace was replayed onto a copy of the input.
    pub replay: ReplaySummary,
    /// Colour of every vertex after the replay.
    pub final_colors: Vec<Color>,
    /// Directed edge entries after the replay, bridges included.
    pub edge_count: usize,
    /// Connectivity of the graph after the replay.
    pub connected: bool,
    /// Two-colouring outcome, present for the bipartite check only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bipartite: Option<Bipartiteness>,
}

impl RunReport {
    /// Records `algorithm` on `graph`, replays it onto a copy and summarises the result.
    pub fn build(graph: &Graph, algorithm: Algorithm, source: VertexId) -> Result<Self, GraphzError> {
        let trace = algorithm.run(graph, source)?;
        let graph_hash = canonical_hash(graph);
        let trace_hash = trace_hash(&trace);

        let mut live = graph.clone();
        let mut cursor = ReplayCursor::new(trace);
        let replay = cursor.run_to_end(&mut live);
        let trace = cursor.trace().clone();

        let bipartite = matches!(algorithm, Algorithm::BipartiteCheck).then(|| bipartite_verdict(&trace));
        info!(
            %algorithm,
            steps = trace.len(),
            applied = replay.applied,
            dropped = replay.dropped,
            "traversal recorded"
        );
        Ok(Self {
            algorithm,
            source: algorithm.needs_source().then_some(source),
            graph_hash,
            trace_hash,
            replay,
            final_colors: live.colors(),
            edge_count: live.edge_count(),
            connected: live.is_connected(),
            bipartite,
            trace,
        })
    }

    /// Renders the step listing followed by the summary block.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "{self}");
        out
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            Some(source) => writeln!(f, "{} from {}: {} steps", self.algorithm, source, self.trace.len())?,
            None => writeln!(f, "{}: {} steps", self.algorithm, self.trace.len())?,
        }
        for (idx, step) in self.trace.iter().enumerate() {
            writeln!(f, "{idx:>4}  {step}")?;
        }
        writeln!(f, "graph hash: {}", self.graph_hash)?;
        writeln!(f, "trace hash: {}", self.trace_hash)?;
        writeln!(
            f,
            "replay: {} applied, {} dropped, {} skipped",
            self.replay.applied, self.replay.dropped, self.replay.skipped
        )?;
        let colors: Vec<String> = self
            .final_colors
            .iter()
            .enumerate()
            .map(|(idx, color)| format!("{idx}={color}"))
            .collect();
        writeln!(f, "final colours: {}", colors.join(" "))?;
        writeln!(f, "connected: {}", if self.connected { "yes" } else { "no" })?;
        match self.bipartite {
            Some(Bipartiteness::Bipartite) => writeln!(f, "bipartite: yes")?,
            Some(Bipartiteness::Conflict { vertex }) => {
                writeln!(f, "bipartite: no (conflict at {vertex})")?
            }
            None => {}
        }
        Ok(())
    }
}

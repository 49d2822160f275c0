use graphz_core::{Color, GraphzError, Step, Trace, VertexId};
use graphz_graph::Graph;
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of a single [`ReplayCursor::step`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The trace was already fully replayed. Nothing changed.
    Exhausted,
    /// The step was applied to the graph.
    Applied(Step),
    /// The step could not be applied and was dropped. The cursor still moved past it.
    Dropped {
        /// Step that was dropped.
        step: Step,
        /// Why the graph rejected it.
        error: GraphzError,
    },
    /// The step has no replay effect yet and was passed over.
    Skipped(Step),
}

impl Advance {
    /// Returns `true` if the cursor moved past a step.
    pub fn advanced(&self) -> bool {
        !matches!(self, Advance::Exhausted)
    }

    /// Returns the step the cursor moved past, if any.
    pub fn step(&self) -> Option<&Step> {
        match self {
            Advance::Exhausted => None,
            Advance::Applied(step) | Advance::Skipped(step) => Some(step),
            Advance::Dropped { step, .. } => Some(step),
        }
    }
}

/// Totals gathered by [`ReplayCursor::run_to_end`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// Steps applied to the graph.
    pub applied: usize,
    /// Steps dropped because the graph rejected them.
    pub dropped: usize,
    /// Steps passed over without effect.
    pub skipped: usize,
}

/// Stateful reader applying a trace to a live graph on demand.
///
/// The cursor owns its trace; the graph stays with the caller and is passed
/// to every call. Replaying a trace onto a graph other than the one it was
/// recorded from is the caller's mistake: steps naming vertices the graph
/// does not have are dropped, never applied.
#[derive(Debug, Clone)]
pub struct ReplayCursor {
    trace: Trace,
    index: usize,
    highlighted: Option<VertexId>,
}

impl ReplayCursor {
    /// Creates a cursor positioned before the first step of `trace`.
    pub fn new(trace: Trace) -> Self {
        Self {
            trace,
            index: 0,
            highlighted: None,
        }
    }

    /// The trace being replayed.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Number of steps already replayed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total number of steps in the trace.
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Returns `true` if the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Steps left to replay.
    pub fn remaining(&self) -> usize {
        self.trace.len() - self.index
    }

    /// Returns `true` once every step has been replayed.
    pub fn is_finished(&self) -> bool {
        self.index == self.trace.len()
    }

    /// The vertex examined by the last replayed step, if that step was a check.
    pub fn highlighted(&self) -> Option<VertexId> {
        self.highlighted
    }

    /// Replays the next step and reports what happened to it.
    pub fn step(&mut self, graph: &mut Graph) -> Advance {
        let Some(&step) = self.trace.get(self.index) else {
            return Advance::Exhausted;
        };
        self.index += 1;
        self.highlighted = None;

        let outcome = match step {
            Step::ColorVertex { vertex, to, .. } => graph.set_color(vertex, to),
            Step::CheckVertex { vertex } => {
                if graph.contains(vertex) {
                    self.highlighted = Some(vertex);
                    Ok(())
                } else {
                    Err(GraphzError::invalid_vertex(vertex, graph.vertex_count()))
                }
            }
            Step::AddEdge { from, to } => graph.add_edge(from, to),
            Step::AddVertex { vertex } => {
                warn!(%vertex, index = self.index - 1, "add-vertex steps have no replay effect; skipped");
                return Advance::Skipped(step);
            }
        };

        match outcome {
            Ok(()) => Advance::Applied(step),
            Err(error) => {
                warn!(%step, index = self.index - 1, %error, "replay step dropped");
                Advance::Dropped { step, error }
            }
        }
    }

    /// Replays the next step. Returns `false`, without touching the graph, once the trace is exhausted.
    pub fn advance(&mut self, graph: &mut Graph) -> bool {
        self.step(graph).advanced()
    }

    /// Rewinds to the first step and paints the graph `Unvisited`.
    ///
    /// Edges added by earlier `AddEdge` steps stay in the graph.
    pub fn reset(&mut self, graph: &mut Graph) {
        self.index = 0;
        self.highlighted = None;
        graph.reset_colors(Color::Unvisited);
    }

    /// Replays every remaining step.
    pub fn run_to_end(&mut self, graph: &mut Graph) -> ReplaySummary {
        let mut summary = ReplaySummary::default();
        loop {
            match self.step(graph) {
                Advance::Exhausted => break,
                Advance::Applied(_) => summary.applied += 1,
                Advance::Dropped { .. } => summary.dropped += 1,
                Advance::Skipped(_) => summary.skipped += 1,
            }
        }
        debug!(
            applied = summary.applied,
            dropped = summary.dropped,
            skipped = summary.skipped,
            "replay finished"
        );
        summary
    }
}

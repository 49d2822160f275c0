use std::collections::VecDeque;

use graphz_core::{Color, GraphzError, Step, Trace, VertexId};
use graphz_graph::Graph;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::working::{ensure_source, Working};

/// Two-colours the component of `source` breadth-first, recorded step by step.
///
/// The source gets `MarkA`; every unvisited neighbour gets the opposite mark
/// of the vertex being scanned. The first neighbour found carrying the same
/// mark as the scanned vertex is recoloured `Conflict` and the trace ends
/// right there, even if more clashes exist.
///
/// Only the component of `source` is examined. Checking a disconnected graph
/// needs one call per component.
pub fn bipartite_check(graph: &Graph, source: VertexId) -> Result<Trace, GraphzError> {
    ensure_source(graph, source)?;
    let mut work = Working::new(graph);
    if work.color(source) != Color::Unvisited {
        debug!(%source, "bipartite source already visited");
        return Ok(work.finish());
    }

    let mut queue = VecDeque::new();
    work.paint(source, Color::MarkA);
    queue.push_back(source);
    'scan: while let Some(v) = queue.pop_front() {
        work.check(v);
        let mark = work.color(v);
        let Some(opposite) = mark.opposite_mark() else {
            continue;
        };
        for &u in work.neighbors(v) {
            work.check(u);
            let seen = work.color(u);
            if seen == Color::Unvisited {
                work.paint(u, opposite);
                queue.push_back(u);
            } else if seen == mark {
                work.paint(u, Color::Conflict);
                debug!(%source, conflict = %u, "odd cycle detected");
                break 'scan;
            }
        }
    }

    let trace = work.finish();
    debug!(%source, steps = trace.len(), "bipartite trace recorded");
    Ok(trace)
}

/// Outcome read back from a [`bipartite_check`] trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "kebab-case")]
pub enum Bipartiteness {
    /// The examined component admits a two-colouring.
    Bipartite,
    /// The trace stopped at the first clashing vertex.
    Conflict {
        /// Vertex recoloured `Conflict`.
        vertex: VertexId,
    },
}

/// Classifies a bipartite-check trace by its `Conflict` step, if any.
pub fn bipartite_verdict(trace: &Trace) -> Bipartiteness {
    trace
        .iter()
        .find_map(|step| match step {
            Step::ColorVertex {
                vertex,
                to: Color::Conflict,
                ..
            } => Some(Bipartiteness::Conflict { vertex: *vertex }),
            _ => None,
        })
        .unwrap_or(Bipartiteness::Bipartite)
}

use std::collections::VecDeque;

use graphz_core::{Color, GraphzError, Trace, VertexId};
use graphz_graph::Graph;
use tracing::debug;

use crate::working::{ensure_source, Working};

/// Breadth-first search from `source`, recorded step by step.
///
/// The source is coloured `InProgress` before it is enqueued. Each dequeued
/// vertex is checked, then each of its neighbours is checked in adjacency
/// order and, if still unvisited, coloured `InProgress` and enqueued. Once
/// the scan ends the vertex is coloured `Done`.
///
/// Vertices that are not `Unvisited` in `graph` count as already visited. A
/// source that is already visited yields an empty trace.
pub fn bfs(graph: &Graph, source: VertexId) -> Result<Trace, GraphzError> {
    ensure_source(graph, source)?;
    let mut work = Working::new(graph);
    if work.color(source) == Color::Unvisited {
        sweep(&mut work, source);
    } else {
        debug!(%source, "bfs source already visited");
    }
    let trace = work.finish();
    debug!(%source, steps = trace.len(), "bfs trace recorded");
    Ok(trace)
}

/// Colours the component of `source` `Unvisited -> InProgress -> Done` in BFS order.
pub(crate) fn sweep(work: &mut Working<'_>, source: VertexId) {
    let mut queue = VecDeque::new();
    work.paint(source, Color::InProgress);
    queue.push_back(source);
    while let Some(v) = queue.pop_front() {
        work.check(v);
        for &u in work.neighbors(v) {
            work.check(u);
            if work.color(u) == Color::Unvisited {
                work.paint(u, Color::InProgress);
                queue.push_back(u);
            }
        }
        work.paint(v, Color::Done);
    }
}

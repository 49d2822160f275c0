use graphz_core::{Color, GraphzError, Trace, VertexId};
use graphz_graph::Graph;
use tracing::debug;

use crate::working::{ensure_source, Working};

struct Frame {
    vertex: VertexId,
    /// Next adjacency position to inspect.
    cursor: usize,
}

/// Depth-first search from `source`, recorded step by step.
///
/// Iterative: every stack frame keeps its own scan position, so each
/// adjacency entry is inspected (and checked) exactly once and the stack never
/// holds more frames than there are vertices. A vertex is checked and coloured
/// `InProgress` when it first reaches the top of the stack and coloured `Done`
/// when its scan is exhausted and it is popped.
///
/// A source that is already visited yields an empty trace.
pub fn dfs(graph: &Graph, source: VertexId) -> Result<Trace, GraphzError> {
    ensure_source(graph, source)?;
    let mut work = Working::new(graph);
    if work.color(source) != Color::Unvisited {
        debug!(%source, "dfs source already visited");
        return Ok(work.finish());
    }

    let mut stack = vec![Frame {
        vertex: source,
        cursor: 0,
    }];
    while let Some(frame) = stack.last_mut() {
        let v = frame.vertex;
        if work.color(v) == Color::Unvisited {
            work.check(v);
            work.paint(v, Color::InProgress);
        }

        let neighbors = work.neighbors(v);
        let mut descend = None;
        while let Some(&u) = neighbors.get(frame.cursor) {
            frame.cursor += 1;
            work.check(u);
            if work.color(u) == Color::Unvisited {
                descend = Some(u);
                break;
            }
        }

        match descend {
            Some(u) => stack.push(Frame {
                vertex: u,
                cursor: 0,
            }),
            None => {
                stack.pop();
                work.paint(v, Color::Done);
            }
        }
    }

    let trace = work.finish();
    debug!(%source, steps = trace.len(), "dfs trace recorded");
    Ok(trace)
}

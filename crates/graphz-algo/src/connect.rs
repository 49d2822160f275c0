use graphz_core::{Color, Trace, VertexId};
use graphz_graph::Graph;
use tracing::debug;

use crate::bfs::sweep;
use crate::working::Working;

/// Connects every component with the fewest bridge edges, recorded step by step.
///
/// Vertices are scanned in index order. Each still-unvisited vertex represents
/// a new component; if an earlier representative exists, the bridge
/// `previous -> representative` and its reverse are recorded first, then the
/// component is swept as in [`bfs`](crate::bfs). Bridges only appear in the
/// trace: the snapshot used for the sweep is not extended.
///
/// Replaying the whole trace leaves the representatives chained together and
/// every vertex `Done`.
pub fn connect_components(graph: &Graph) -> Trace {
    let mut work = Working::new(graph);
    let mut previous: Option<VertexId> = None;
    let mut components = 0usize;
    for representative in graph.vertices() {
        if work.color(representative) != Color::Unvisited {
            continue;
        }
        if let Some(previous) = previous {
            work.add_edge(previous, representative);
            work.add_edge(representative, previous);
        }
        sweep(&mut work, representative);
        previous = Some(representative);
        components += 1;
    }

    let trace = work.finish();
    debug!(components, steps = trace.len(), "connect trace recorded");
    trace
}

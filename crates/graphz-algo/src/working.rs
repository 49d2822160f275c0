use graphz_core::{Color, GraphzError, Trace, TraceRecorder, VertexId};
use graphz_graph::Graph;

/// Private colour copy of a graph plus the recorder for the run.
pub(crate) struct Working<'g> {
    graph: &'g Graph,
    colors: Vec<Color>,
    recorder: TraceRecorder,
}

impl<'g> Working<'g> {
    pub(crate) fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            colors: graph.colors(),
            recorder: TraceRecorder::new(),
        }
    }

    pub(crate) fn color(&self, vertex: VertexId) -> Color {
        self.colors[vertex.index()]
    }

    pub(crate) fn neighbors(&self, vertex: VertexId) -> &'g [VertexId] {
        // Adjacency only ever holds in-range vertices.
        self.graph.neighbors(vertex).unwrap_or(&[])
    }

    /// Recolours `vertex`, recording the colour it had before.
    pub(crate) fn paint(&mut self, vertex: VertexId, to: Color) {
        let slot = &mut self.colors[vertex.index()];
        let from = *slot;
        *slot = to;
        self.recorder.color(vertex, from, to);
    }

    pub(crate) fn check(&mut self, vertex: VertexId) {
        self.recorder.check(vertex);
    }

    pub(crate) fn add_edge(&mut self, from: VertexId, to: VertexId) {
        self.recorder.add_edge(from, to);
    }

    pub(crate) fn finish(self) -> Trace {
        self.recorder.finish()
    }
}

/// Validates a traversal source against the graph.
pub(crate) fn ensure_source(graph: &Graph, source: VertexId) -> Result<(), GraphzError> {
    if graph.contains(source) {
        Ok(())
    } else {
        Err(GraphzError::invalid_vertex(source, graph.vertex_count()).with_context("role", "source"))
    }
}

use std::collections::{BTreeSet, VecDeque};

use graphz_core::{Color, GraphzError, Position, VertexId};
use serde::Serialize;
use tracing::trace;

use crate::config::GraphConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
struct VertexRecord {
    position: Position,
    color: Color,
    adjacency: Vec<VertexId>,
}

impl VertexRecord {
    fn new(position: Position) -> Self {
        Self {
            position,
            color: Color::Unvisited,
            adjacency: Vec::new(),
        }
    }
}

/// Bounded directed graph with per-vertex colour and position.
///
/// Adjacency lists keep insertion order and may contain duplicates; an
/// undirected edge is two directed entries. Mutations either succeed
/// completely or leave the graph untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    config: GraphConfig,
    vertices: Vec<VertexRecord>,
}

impl Graph {
    /// Creates an empty graph with the provided capacities.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            vertices: Vec::new(),
        }
    }

    /// Returns the capacities enforced by this graph.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Total number of directed adjacency entries.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.adjacency.len()).sum()
    }

    /// Iterates over all vertex identifiers in index order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Returns `true` if `vertex` is below the vertex count.
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }

    /// Appends an unvisited vertex at `position` and returns its identifier.
    pub fn add_vertex(&mut self, position: Position) -> Result<VertexId, GraphzError> {
        if self.vertices.len() >= self.config.max_vertices {
            return Err(GraphzError::vertex_capacity(self.config.max_vertices));
        }
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(VertexRecord::new(position));
        trace!(vertex = %id, "vertex added");
        Ok(id)
    }

    /// Appends the directed edge `from -> to`.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<(), GraphzError> {
        self.record(from)?;
        self.record(to)?;
        let max_degree = self.config.max_degree;
        let record = self.record_mut(from)?;
        if record.adjacency.len() >= max_degree {
            return Err(GraphzError::degree_capacity(from, max_degree));
        }
        record.adjacency.push(to);
        trace!(%from, %to, "edge added");
        Ok(())
    }

    /// Appends both `u -> v` and `v -> u`, or neither.
    pub fn add_undirected_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphzError> {
        let needed_u = if u == v { 2 } else { 1 };
        let u_len = self.record(u)?.adjacency.len();
        let v_len = self.record(v)?.adjacency.len();
        let cap = self.config.max_degree;
        if u_len + needed_u > cap {
            return Err(GraphzError::degree_capacity(u, cap));
        }
        if v_len + 1 > cap {
            return Err(GraphzError::degree_capacity(v, cap));
        }
        self.add_edge(u, v)?;
        self.add_edge(v, u)
    }

    /// Paints every vertex with `color`.
    pub fn reset_colors(&mut self, color: Color) {
        for record in &mut self.vertices {
            record.color = color;
        }
    }

    /// Returns the ordered neighbour list of `vertex`.
    pub fn neighbors(&self, vertex: VertexId) -> Result<&[VertexId], GraphzError> {
        Ok(&self.record(vertex)?.adjacency)
    }

    /// Returns the colour of `vertex`.
    pub fn color(&self, vertex: VertexId) -> Result<Color, GraphzError> {
        Ok(self.record(vertex)?.color)
    }

    /// Sets the colour of `vertex`.
    pub fn set_color(&mut self, vertex: VertexId, color: Color) -> Result<(), GraphzError> {
        self.record_mut(vertex)?.color = color;
        Ok(())
    }

    /// Returns the colour of every vertex in index order.
    pub fn colors(&self) -> Vec<Color> {
        self.vertices.iter().map(|record| record.color).collect()
    }

    /// Returns the caller-supplied position of `vertex`.
    pub fn position(&self, vertex: VertexId) -> Result<Position, GraphzError> {
        Ok(self.record(vertex)?.position)
    }

    /// Moves `vertex` to `position`.
    pub fn set_position(&mut self, vertex: VertexId, position: Position) -> Result<(), GraphzError> {
        self.record_mut(vertex)?.position = position;
        Ok(())
    }

    /// Returns every vertex reachable from `source` along directed edges, `source` included.
    pub fn reachable_from(&self, source: VertexId) -> Result<BTreeSet<VertexId>, GraphzError> {
        self.record(source)?;
        let mut seen = BTreeSet::from([source]);
        let mut queue = VecDeque::from([source]);
        while let Some(v) = queue.pop_front() {
            for &u in &self.vertices[v.index()].adjacency {
                if seen.insert(u) {
                    queue.push_back(u);
                }
            }
        }
        Ok(seen)
    }

    /// Returns `true` if every vertex reaches every other vertex.
    ///
    /// For graphs built from undirected edges this is ordinary connectivity.
    /// The empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        let n = self.vertices.len();
        self.vertices().all(|v| {
            self.reachable_from(v)
                .map(|reached| reached.len() == n)
                .unwrap_or(false)
        })
    }

    fn record(&self, vertex: VertexId) -> Result<&VertexRecord, GraphzError> {
        self.vertices
            .get(vertex.index())
            .ok_or_else(|| GraphzError::invalid_vertex(vertex, self.vertices.len()))
    }

    fn record_mut(&mut self, vertex: VertexId) -> Result<&mut VertexRecord, GraphzError> {
        let count = self.vertices.len();
        self.vertices
            .get_mut(vertex.index())
            .ok_or_else(|| GraphzError::invalid_vertex(vertex, count))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

//! YAML scene descriptions: capacities, canvas, vertex positions and undirected edges.

use std::fs;
use std::path::Path;

use graphz_core::{ErrorInfo, GraphzError, Position, RngHandle, VertexId, MAX_VERTICES};
use graphz_graph::{gen_random_undirected, Graph, GraphConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Drawing area the session places new vertices on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: f32,
    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    800.0
}

fn default_height() -> f32 {
    600.0
}

impl Canvas {
    /// Centre of the canvas, where vertices added without a position land.
    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// A graph layout loaded from YAML.
///
/// Every field is optional; a missing field falls back to its default and
/// an empty document is an empty graph.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Capacities of the graph built from this scene.
    #[serde(default)]
    pub capacity: GraphConfig,
    /// Drawing area.
    #[serde(default)]
    pub canvas: Canvas,
    /// Vertex positions; vertex `i` is the `i`-th entry.
    #[serde(default)]
    pub vertices: Vec<Position>,
    /// Undirected edges as index pairs, applied in order.
    #[serde(default)]
    pub edges: Vec<[usize; 2]>,
}

impl Scene {
    /// The four-vertex starter scene: vertex 0 joined to 1, 2 and 3, plus the edge 1-2.
    pub fn demo() -> Self {
        Self {
            capacity: GraphConfig::default(),
            canvas: Canvas::default(),
            vertices: vec![
                Position::new(50.0, 50.0),
                Position::new(50.0, 100.0),
                Position::new(100.0, 100.0),
                Position::new(100.0, 50.0),
            ],
            edges: vec![[0, 1], [0, 2], [0, 3], [1, 2]],
        }
    }

    /// Reads, parses and validates a scene file.
    pub fn load(path: &Path) -> Result<Self, GraphzError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            GraphzError::Config(
                ErrorInfo::new("read-scene", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        let scene = Self::from_yaml_str(&contents).map_err(|err| err.with_context("path", path.display()))?;
        debug!(
            path = %path.display(),
            vertices = scene.vertices.len(),
            edges = scene.edges.len(),
            "scene loaded"
        );
        Ok(scene)
    }

    /// Parses and validates a scene from a YAML document.
    pub fn from_yaml_str(contents: &str) -> Result<Self, GraphzError> {
        // An empty document deserialises to unit, not to an empty mapping.
        let scene: Scene = if contents.trim().is_empty() {
            Scene::default()
        } else {
            serde_yaml::from_str(contents).map_err(|err| {
                GraphzError::Config(ErrorInfo::new("parse-scene", err.to_string()))
            })?
        };
        scene.validate()?;
        Ok(scene)
    }

    /// Checks capacities, canvas size and edge endpoints.
    pub fn validate(&self) -> Result<(), GraphzError> {
        let max_vertices = self.capacity.max_vertices;
        if max_vertices == 0 || max_vertices > MAX_VERTICES {
            return Err(invalid("max_vertices must be between 1 and the vertex limit")
                .with_context("max_vertices", max_vertices)
                .with_context("limit", MAX_VERTICES));
        }
        if self.capacity.max_degree == 0 {
            return Err(invalid("max_degree must be positive"));
        }
        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0)
            || !self.canvas.width.is_finite()
            || !self.canvas.height.is_finite()
        {
            return Err(invalid("canvas dimensions must be positive and finite")
                .with_context("width", self.canvas.width)
                .with_context("height", self.canvas.height));
        }
        if self.vertices.len() > max_vertices {
            return Err(invalid("scene lists more vertices than the capacity allows")
                .with_context("vertices", self.vertices.len())
                .with_context("max_vertices", max_vertices));
        }
        for (idx, [u, v]) in self.edges.iter().copied().enumerate() {
            if u >= self.vertices.len() || v >= self.vertices.len() {
                return Err(invalid("edge endpoint does not name a listed vertex")
                    .with_context("edge", idx)
                    .with_context("endpoints", format!("{u}-{v}"))
                    .with_context("vertices", self.vertices.len()));
            }
        }
        Ok(())
    }

    /// Builds the live graph described by this scene.
    ///
    /// Fails with `CapacityExceeded` when the edges overflow an adjacency list.
    pub fn build_graph(&self) -> Result<Graph, GraphzError> {
        self.validate()?;
        let mut graph = Graph::new(self.capacity);
        for position in &self.vertices {
            graph.add_vertex(*position)?;
        }
        for (idx, [u, v]) in self.edges.iter().copied().enumerate() {
            graph
                .add_undirected_edge(VertexId::new(u), VertexId::new(v))
                .map_err(|err| err.with_context("edge", idx))?;
        }
        Ok(graph)
    }
}

/// Builds a seeded random graph with its vertices spread on a ring across `canvas`.
pub fn random_graph(
    n_vertices: usize,
    n_edges: usize,
    seed: u64,
    canvas: &Canvas,
) -> Result<Graph, GraphzError> {
    let mut rng = RngHandle::from_seed(seed);
    let mut graph = gen_random_undirected(n_vertices, n_edges, GraphConfig::default(), &mut rng)?;
    let center = canvas.center();
    let radius = canvas.width.min(canvas.height) * 0.4;
    for vertex in 0..n_vertices {
        let angle = vertex as f32 / n_vertices as f32 * std::f32::consts::TAU;
        let position = Position::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());
        graph.set_position(VertexId::new(vertex), position)?;
    }
    debug!(seed, vertices = n_vertices, edges = graph.edge_count() / 2, "random scene generated");
    Ok(graph)
}

fn invalid(message: &str) -> GraphzError {
    GraphzError::Config(ErrorInfo::new("invalid-scene", message))
}

#[cfg(test)]
mod tests {
    use graphz_graph::demo_graph;

    use super::*;

    #[test]
    fn demo_scene_builds_demo_graph() {
        let graph = Scene::demo().build_graph().unwrap();
        assert_eq!(graph, demo_graph().unwrap());
    }

    #[test]
    fn canvas_center_is_halfway() {
        assert_eq!(Canvas::default().center(), Position::new(400.0, 300.0));
    }

    #[test]
    fn random_graph_is_reproducible() {
        let canvas = Canvas::default();
        let a = random_graph(8, 10, 42, &canvas).unwrap();
        let b = random_graph(8, 10, 42, &canvas).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.vertex_count(), 8);
    }
}

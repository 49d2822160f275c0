use graphz_core::{GraphzError, Position, RngHandle, VertexId};
use rand::Rng;

use crate::config::GraphConfig;
use crate::graph::Graph;

/// Builds the four-vertex starter scene: vertex 0 joined to 1, 2 and 3, plus the edge 1-2.
pub fn demo_graph() -> Result<Graph, GraphzError> {
    let mut graph = Graph::default();
    for (x, y) in [(50.0, 50.0), (50.0, 100.0), (100.0, 100.0), (100.0, 50.0)] {
        graph.add_vertex(Position::new(x, y))?;
    }
    for (u, v) in [(0, 1), (0, 2), (0, 3), (1, 2)] {
        graph.add_undirected_edge(VertexId::new(u), VertexId::new(v))?;
    }
    Ok(graph)
}

/// Creates `n_vertices` vertices with no edges.
pub fn isolated_vertices(n_vertices: usize, config: GraphConfig) -> Result<Graph, GraphzError> {
    let mut graph = Graph::new(config);
    for _ in 0..n_vertices {
        graph.add_vertex(Position::default())?;
    }
    Ok(graph)
}

/// Creates the undirected path `0 - 1 - ... - (n-1)`.
pub fn path_graph(n_vertices: usize, config: GraphConfig) -> Result<Graph, GraphzError> {
    let mut graph = isolated_vertices(n_vertices, config)?;
    for i in 1..n_vertices {
        graph.add_undirected_edge(VertexId::new(i - 1), VertexId::new(i))?;
    }
    Ok(graph)
}

/// Creates the undirected cycle `0 - 1 - ... - (n-1) - 0`.
///
/// Fewer than three vertices yields a path.
pub fn cycle_graph(n_vertices: usize, config: GraphConfig) -> Result<Graph, GraphzError> {
    let mut graph = path_graph(n_vertices, config)?;
    if n_vertices >= 3 {
        graph.add_undirected_edge(VertexId::new(n_vertices - 1), VertexId::new(0))?;
    }
    Ok(graph)
}

/// Creates the undirected complete graph on `n_vertices` vertices.
pub fn complete_graph(n_vertices: usize, config: GraphConfig) -> Result<Graph, GraphzError> {
    let mut graph = isolated_vertices(n_vertices, config)?;
    for u in 0..n_vertices {
        for v in (u + 1)..n_vertices {
            graph.add_undirected_edge(VertexId::new(u), VertexId::new(v))?;
        }
    }
    Ok(graph)
}

/// Generates a random undirected graph with deterministic randomness.
///
/// Up to `n_edges` undirected edges are sampled between distinct endpoints.
/// Duplicates are kept. Samples whose endpoints have a full adjacency list are
/// skipped, and generation stops early once sampling stagnates.
pub fn gen_random_undirected(
    n_vertices: usize,
    n_edges: usize,
    config: GraphConfig,
    rng: &mut RngHandle,
) -> Result<Graph, GraphzError> {
    let mut graph = isolated_vertices(n_vertices, config)?;
    if n_vertices < 2 {
        return Ok(graph);
    }

    let mut added = 0usize;
    let mut stagnation = 0usize;
    while added < n_edges {
        let u = rng.gen_range(0..n_vertices);
        let v = rng.gen_range(0..n_vertices);
        if u == v {
            continue;
        }
        match graph.add_undirected_edge(VertexId::new(u), VertexId::new(v)) {
            Ok(()) => {
                added += 1;
                stagnation = 0;
            }
            Err(err) if err.is_capacity() => {
                stagnation += 1;
                if stagnation > n_vertices * 4 {
                    break;
                }
            }
            Err(err) => return Err(err),
        }
    }

    Ok(graph)
}

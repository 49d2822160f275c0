use graphz_core::{Color, Step, Trace, VertexId};
use sha2::{Digest, Sha256};

use crate::config::GraphConfig;
use crate::graph::Graph;

/// Computes the canonical structural hash of a graph.
///
/// Covers capacities, colours and ordered adjacency. Positions are caller
/// owned and excluded.
pub fn canonical_hash(graph: &Graph) -> String {
    let mut hasher = Sha256::new();
    encode_config(graph.config(), &mut hasher);
    hasher.update((graph.vertex_count() as u64).to_le_bytes());
    for vertex in graph.vertices() {
        hasher.update([color_tag(graph.color(vertex).unwrap_or_default())]);
        let neighbors = graph.neighbors(vertex).unwrap_or(&[]);
        hasher.update((neighbors.len() as u64).to_le_bytes());
        for neighbor in neighbors {
            encode_vertex(*neighbor, &mut hasher);
        }
    }
    format!("{:x}", hasher.finalize())
}

/// Computes a fingerprint of a trace's exact step sequence.
pub fn trace_hash(trace: &Trace) -> String {
    let mut hasher = Sha256::new();
    hasher.update((trace.len() as u64).to_le_bytes());
    for step in trace {
        match *step {
            Step::ColorVertex { vertex, from, to } => {
                hasher.update(b"color");
                encode_vertex(vertex, &mut hasher);
                hasher.update([color_tag(from), color_tag(to)]);
            }
            Step::CheckVertex { vertex } => {
                hasher.update(b"check");
                encode_vertex(vertex, &mut hasher);
            }
            Step::AddVertex { vertex } => {
                hasher.update(b"add-vertex");
                encode_vertex(vertex, &mut hasher);
            }
            Step::AddEdge { from, to } => {
                hasher.update(b"add-edge");
                encode_vertex(from, &mut hasher);
                encode_vertex(to, &mut hasher);
            }
        }
    }
    format!("{:x}", hasher.finalize())
}

fn encode_config(config: &GraphConfig, hasher: &mut Sha256) {
    hasher.update(b"max-vertices");
    hasher.update((config.max_vertices as u64).to_le_bytes());
    hasher.update(b"max-degree");
    hasher.update((config.max_degree as u64).to_le_bytes());
}

fn encode_vertex(vertex: VertexId, hasher: &mut Sha256) {
    hasher.update((vertex.index() as u64).to_le_bytes());
}

fn color_tag(color: Color) -> u8 {
    match color {
        Color::Unvisited => 0,
        Color::InProgress => 1,
        Color::Done => 2,
        Color::MarkA => 3,
        Color::MarkB => 4,
        Color::Conflict => 5,
    }
}

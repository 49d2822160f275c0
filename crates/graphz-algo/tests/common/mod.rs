#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use graphz_core::{Color, Position, Step, Trace, VertexId};
use graphz_graph::{Graph, GraphConfig};

pub fn v(index: usize) -> VertexId {
    VertexId::new(index)
}

pub fn check(index: usize) -> Step {
    Step::CheckVertex { vertex: v(index) }
}

pub fn color(index: usize, from: Color, to: Color) -> Step {
    Step::ColorVertex {
        vertex: v(index),
        from,
        to,
    }
}

/// Builds a graph on `n` vertices from undirected edge pairs, inserted in order.
pub fn undirected(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new(GraphConfig::default());
    for _ in 0..n {
        graph.add_vertex(Position::default()).unwrap();
    }
    for &(a, b) in edges {
        graph.add_undirected_edge(v(a), v(b)).unwrap();
    }
    graph
}

/// Final colour per vertex after folding every colour step of `trace` over `initial`.
pub fn final_colors(initial: &[Color], trace: &Trace) -> Vec<Color> {
    let mut colors = initial.to_vec();
    for step in trace {
        if let Step::ColorVertex { vertex, to, .. } = step {
            colors[vertex.index()] = *to;
        }
    }
    colors
}

/// Number of colour steps per vertex reaching `target`.
pub fn transitions_to(trace: &Trace, target: Color) -> BTreeMap<VertexId, usize> {
    let mut counts = BTreeMap::new();
    for step in trace {
        if let Step::ColorVertex { vertex, to, .. } = step {
            if *to == target {
                *counts.entry(*vertex).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// BFS layer of every vertex reachable from `source`.
pub fn layers(graph: &Graph, source: VertexId) -> BTreeMap<VertexId, usize> {
    let mut depth = BTreeMap::from([(source, 0usize)]);
    let mut frontier = vec![source];
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for u in frontier {
            let d = depth[&u];
            for &w in graph.neighbors(u).unwrap() {
                if !depth.contains_key(&w) {
                    depth.insert(w, d + 1);
                    next.push(w);
                }
            }
        }
        frontier = next;
    }
    depth
}

/// Number of components of a graph built from undirected edges.
pub fn component_count(graph: &Graph) -> usize {
    let mut seen: BTreeSet<VertexId> = BTreeSet::new();
    let mut count = 0;
    for vertex in graph.vertices() {
        if seen.contains(&vertex) {
            continue;
        }
        count += 1;
        seen.extend(graph.reachable_from(vertex).unwrap());
    }
    count
}

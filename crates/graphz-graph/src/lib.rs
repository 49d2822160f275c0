#![deny(missing_docs)]

//! Bounded adjacency-list graph used as the live and snapshot state of graphz.

mod config;
mod generators;
mod graph;
mod hash;

pub use config::GraphConfig;
pub use generators::{
    complete_graph, cycle_graph, demo_graph, gen_random_undirected, isolated_vertices, path_graph,
};
pub use graph::Graph;
pub use hash::{canonical_hash, trace_hash};

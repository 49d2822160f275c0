#![deny(missing_docs)]

//! Traversal engine for graphz.
//!
//! Every traversal reads a [`Graph`](graphz_graph::Graph) snapshot, works on a
//! private copy of its colours, and returns the [`Trace`](graphz_core::Trace)
//! of steps it took. The caller's graph is never mutated; replaying the trace
//! is the job of `graphz-replay`.

mod algorithm;
mod bfs;
mod bipartite;
mod connect;
mod dfs;
mod working;

pub use algorithm::Algorithm;
pub use bfs::bfs;
pub use bipartite::{bipartite_check, bipartite_verdict, Bipartiteness};
pub use connect::connect_components;
pub use dfs::dfs;

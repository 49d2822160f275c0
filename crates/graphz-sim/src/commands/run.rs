use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use graphz_algo::Algorithm;
use graphz_core::VertexId;
use graphz_sim::{random_graph, Canvas, RunReport};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Traversal to record: bfs, dfs, bipartite or connect.
    #[arg(long, short, default_value = "bfs")]
    pub algorithm: Algorithm,
    /// Start vertex for source-driven traversals.
    #[arg(long, default_value_t = 0)]
    pub source: usize,
    /// YAML scene to load instead of the starter scene.
    #[arg(long, conflicts_with = "random")]
    pub scene: Option<PathBuf>,
    /// Generate a random graph with this many vertices.
    #[arg(long)]
    pub random: Option<usize>,
    /// Undirected edges to sample for `--random`; defaults to the vertex count.
    #[arg(long, requires = "random")]
    pub edges: Option<usize>,
    /// Seed for `--random`.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let graph = match args.random {
        Some(n_vertices) => random_graph(
            n_vertices,
            args.edges.unwrap_or(n_vertices),
            args.seed,
            &Canvas::default(),
        )?,
        None => super::load_scene(args.scene.as_ref())?.0,
    };

    let report = RunReport::build(&graph, args.algorithm, VertexId::new(args.source))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::Args;
use graphz_algo::Algorithm;
use graphz_core::VertexId;
use graphz_sim::{run_lines, Session};

#[derive(Args, Debug)]
pub struct SessionArgs {
    /// YAML scene to load instead of the starter scene.
    #[arg(long)]
    pub scene: Option<PathBuf>,
    /// Traversal recorded at start-up.
    #[arg(long, short, default_value = "bfs")]
    pub algorithm: Algorithm,
    /// Start vertex for source-driven traversals.
    #[arg(long, default_value_t = 0)]
    pub source: usize,
}

pub fn run(args: &SessionArgs) -> Result<(), Box<dyn Error>> {
    let (graph, canvas) = super::load_scene(args.scene.as_ref())?;
    let mut session = Session::new(graph, canvas, args.algorithm, VertexId::new(args.source))?;
    println!("{}", session.describe().trim_end());
    let stdin = io::stdin();
    run_lines(&mut session, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

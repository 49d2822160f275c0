pub mod run;
pub mod session;

use std::error::Error;
use std::path::PathBuf;

use graphz_graph::Graph;
use graphz_sim::{Canvas, Scene};

/// Builds the graph named by `--scene`, or the starter scene when absent.
pub fn load_scene(path: Option<&PathBuf>) -> Result<(Graph, Canvas), Box<dyn Error>> {
    let scene = match path {
        Some(path) => Scene::load(path)?,
        None => Scene::demo(),
    };
    Ok((scene.build_graph()?, scene.canvas))
}

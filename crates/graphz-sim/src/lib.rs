//! Scene loading, run reports and the stepping session behind the `graphz-sim` binary.

pub mod report;
pub mod scene;
pub mod session;

pub use report::RunReport;
pub use scene::{random_graph, Canvas, Scene};
pub use session::{run_lines, Command, Reply, Session};

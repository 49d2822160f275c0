use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::run::RunArgs;
use commands::session::SessionArgs;

#[derive(Parser)]
#[command(author, version, about = "Record and step through graph traversal traces")]
struct Cli {
    /// Log debug output to stderr. `RUST_LOG` takes precedence when set.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record one traversal, replay it and print the trace with a summary.
    Run(RunArgs),
    /// Step through a trace interactively, one command per stdin line.
    Session(SessionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    match cli.command {
        Command::Run(args) => commands::run::run(&args),
        Command::Session(args) => commands::session::run(&args),
    }
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

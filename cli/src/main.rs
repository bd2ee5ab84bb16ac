//! Fluent CLI - run sequence view pipelines from the command line.

mod cli;
mod commands;
mod common;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG wins; otherwise the -v count picks the level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(common::logging::default_level(cli.verbose)));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    tracing::debug!(command = ?cli.command, "dispatching");

    let result = match cli.command {
        Command::Demo => commands::demo::run(),
        Command::Join(args) => commands::join::run(args),
        Command::Upper(args) => commands::upper::run(args),
        Command::Max(args) => commands::reduce::run_max(args),
        Command::Sum(args) => commands::reduce::run_sum(args),
        Command::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        common::error::render_and_exit(e);
    }
}

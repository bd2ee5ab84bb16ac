//! The `completions` command - generate shell completions.

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};
use crate::common::CliResult;

/// Run the completions command.
pub fn run(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "fluent", &mut std::io::stdout());
    Ok(())
}

//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

/// Fluent - chainable single-pass sequence views
#[derive(Parser, Debug)]
#[command(name = "fluent", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the built-in demonstration pipelines
    Demo,

    /// Join integers, optionally multiplied and reversed
    Join(JoinArgs),

    /// Upper-case words and join them
    Upper(UpperArgs),

    /// Print the largest integer
    Max(ReduceArgs),

    /// Print the sum of the integers
    Sum(ReduceArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `join` command.
#[derive(Args, Debug)]
pub struct JoinArgs {
    /// Integers to join
    #[arg(allow_negative_numbers = true)]
    pub items: Vec<i64>,

    /// Text placed between consecutive items
    #[arg(short, long, default_value = ", ")]
    pub separator: String,

    /// Multiply every item by this factor first
    #[arg(short, long)]
    pub multiply: Option<i64>,

    /// Reverse the order before joining
    #[arg(short, long)]
    pub reverse: bool,
}

/// Arguments for the `upper` command.
#[derive(Args, Debug)]
pub struct UpperArgs {
    /// Words to upper-case
    pub words: Vec<String>,

    /// Text placed between consecutive words
    #[arg(short, long, default_value = " ")]
    pub separator: String,

    /// Reverse the order before joining
    #[arg(short, long)]
    pub reverse: bool,
}

/// Arguments for the `max` and `sum` commands.
#[derive(Args, Debug)]
pub struct ReduceArgs {
    /// Integers to reduce
    #[arg(allow_negative_numbers = true)]
    pub items: Vec<i64>,

    /// Multiply every item by this factor first
    #[arg(short, long)]
    pub multiply: Option<i64>,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

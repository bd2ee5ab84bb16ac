//! The `join` command - join integers with a separator.

use fluent::prelude::*;

use super::{print_line, scaled_view};
use crate::cli::JoinArgs;
use crate::common::CliResult;

/// Build the joined line for `args`.
pub fn render(args: &JoinArgs) -> CliResult<String> {
    let mut view = scaled_view(&args.items, args.multiply)?;
    if args.reverse {
        view.reverse();
    }
    Ok(view.join(&args.separator))
}

/// Run the join command.
pub fn run(args: JoinArgs) -> CliResult<()> {
    tracing::info!(count = args.items.len(), "joining items");
    print_line(&render(&args)?)
}

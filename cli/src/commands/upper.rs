//! The `upper` command - upper-case words and join them.

use fluent::prelude::*;

use super::print_line;
use crate::cli::UpperArgs;
use crate::common::CliResult;

/// Build the upper-cased line for `args`.
pub fn render(args: &UpperArgs) -> String {
    let mut view = list(args.words.iter()).map(upper());
    if args.reverse {
        view.reverse();
    }
    view.join(&args.separator)
}

/// Run the upper command.
pub fn run(args: UpperArgs) -> CliResult<()> {
    print_line(&render(&args))
}

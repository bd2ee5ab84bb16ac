//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod completions;
pub mod demo;
pub mod join;
pub mod reduce;
pub mod upper;

use std::io::Write;

use fluent::prelude::*;

use crate::common::{CliError, CliResult};

/// Write one line of command output to stdout.
pub(crate) fn print_line(line: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}")?;
    Ok(())
}

/// View over `items`, each multiplied by `factor` when one is given.
///
/// Products that do not fit in an `i64` are reported instead of wrapping.
pub(crate) fn scaled_view(
    items: &[i64],
    factor: Option<i64>,
) -> CliResult<SequenceView<i64>> {
    let mut view = list(items.iter().copied());
    let Some(factor) = factor else {
        return Ok(view);
    };
    let products: Option<Vec<i64>> = view
        .map(|item| item.checked_mul(factor))
        .into_iter()
        .collect();
    products
        .map(SequenceView::from)
        .ok_or(CliError::Overflow {
            operation: "multiply",
        })
}

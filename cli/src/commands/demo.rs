//! The `demo` command - run the built-in demonstration pipelines.

use fluent::prelude::*;

use super::print_line;
use crate::common::CliResult;

/// Compute the demonstration results, one output line each.
pub fn lines() -> Vec<String> {
    let joined = list![1, 2, 3, 4, 5].map(multiply(2)).reverse().join(", ");

    let largest = list![1, 3, 67, 300, 3, 4, 67]
        .map(multiply(2))
        .reduce(max());

    let total = list![1, 3, 67, 300, 3, 4, 67].reduce(sum());

    vec![
        joined,
        super::reduce::describe(largest),
        super::reduce::describe(total),
    ]
}

/// Run the demo command.
pub fn run() -> CliResult<()> {
    for line in lines() {
        print_line(&line)?;
    }
    Ok(())
}

//! The `max` and `sum` commands - reduce integers to one value.
//!
//! Reducing zero items has no result; that prints `none` rather than failing.
//! Results that do not fit in an `i64` fail with [`CliError::Overflow`].

use fluent::prelude::*;

use super::{print_line, scaled_view};
use crate::cli::ReduceArgs;
use crate::common::{CliError, CliResult};

/// Output text for a reduction result.
pub fn describe(result: Option<i64>) -> String {
    match result {
        Some(value) => value.to_string(),
        None => "none".to_string(),
    }
}

/// Largest of the (optionally multiplied) items.
pub fn largest(args: &ReduceArgs) -> CliResult<Option<i64>> {
    Ok(scaled_view(&args.items, args.multiply)?.reduce(max()))
}

/// Sum of the (optionally multiplied) items.
pub fn total(args: &ReduceArgs) -> CliResult<Option<i64>> {
    // `None` in the accumulator marks an overflow and stays sticky.
    let checked_sum = |memo: Option<i64>, item: Option<i64>| {
        memo.zip(item).and_then(|(memo, item)| memo.checked_add(item))
    };
    match scaled_view(&args.items, args.multiply)?
        .map(Some)
        .reduce(checked_sum)
    {
        None => Ok(None),
        Some(Some(value)) => Ok(Some(value)),
        Some(None) => Err(CliError::Overflow { operation: "sum" }),
    }
}

/// Run the max command.
pub fn run_max(args: ReduceArgs) -> CliResult<()> {
    let result = largest(&args)?;
    if result.is_none() {
        tracing::warn!("max of an empty sequence");
    }
    print_line(&describe(result))
}

/// Run the sum command.
pub fn run_sum(args: ReduceArgs) -> CliResult<()> {
    let result = total(&args)?;
    if result.is_none() {
        tracing::warn!("sum of an empty sequence");
    }
    print_line(&describe(result))
}

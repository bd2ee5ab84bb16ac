//! Common utilities shared across CLI commands.

pub mod error;
pub mod logging;

pub use error::{CliError, CliResult};

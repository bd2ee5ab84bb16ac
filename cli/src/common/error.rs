//! Error handling utilities for the CLI.

use thiserror::Error;

/// Errors a command can hit after argument parsing succeeded.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// An intermediate or final value does not fit in an `i64`.
    #[error("integer overflow while computing {operation}")]
    Overflow { operation: &'static str },
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError) -> ! {
    tracing::error!(%error, "command failed");
    eprintln!("error: {error}");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let e = CliError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert!(e.to_string().contains("failed to write output"));
        assert!(e.to_string().contains("pipe closed"));
    }

    #[test]
    fn overflow_error_display() {
        let e = CliError::Overflow { operation: "sum" };
        assert_eq!(e.to_string(), "integer overflow while computing sum");
    }
}

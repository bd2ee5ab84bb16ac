//! Log level selection for the CLI subscriber.

/// Default filter directive for `verbose` repetitions of `-v`.
///
/// Used only when `RUST_LOG` is unset.
pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

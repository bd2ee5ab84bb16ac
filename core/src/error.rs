//! Error types for sequence views.
//!
//! The only failure a view can report is pulling an element after the cursor
//! has run out. Reducing an empty view is not an error; it yields `None`.

use thiserror::Error;

/// Errors produced by [`FluentIterator`](crate::FluentIterator) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// `next()` was called on a view with no remaining elements.
    ///
    /// Callers are expected to check `has_next()` first, so this signals a
    /// programming error rather than a recoverable condition.
    #[error("sequence view is exhausted: no elements remain")]
    ExhaustedIteration,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

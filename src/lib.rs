//! Fluent - chainable single-pass sequence views
//!
//! # Overview
//!
//! A [`SequenceView`] wraps an ordered sequence and exposes a small vocabulary
//! of draining operations that can be chained:
//!
//! - `map` - transform every remaining element into a new view
//! - `reduce` / `reduce_with` - fold the remaining elements into one value
//! - `join` - render the remaining elements with a separator
//! - `reverse` - flip the remaining elements in place
//!
//! Each element is visited at most once. Once a view is exhausted every
//! operation treats it as empty, except `next`, which reports
//! [`Error::ExhaustedIteration`].
//!
//! # Quick Start
//!
//! ```
//! use fluent::prelude::*;
//!
//! let s = list![1, 2, 3, 4, 5].map(multiply(2)).reverse().join(", ");
//! assert_eq!(s, "10, 8, 6, 4, 2");
//!
//! let total = list![1, 3, 67, 300, 3, 4, 67].reduce(sum());
//! assert_eq!(total, Some(445));
//!
//! // Reducing nothing is an explicit absence, not a panic.
//! let mut empty: SequenceView<i32> = list![];
//! assert_eq!(empty.reduce(max()), None);
//! ```
//!
//! # Pull-based iteration
//!
//! ```
//! use fluent::{Error, prelude::*};
//!
//! let mut view = list!["a", "b"];
//! while view.has_next() {
//!     let item = view.next()?;
//!     assert!(!item.is_empty());
//! }
//! assert_eq!(view.next(), Err(Error::ExhaustedIteration));
//! # Ok::<(), Error>(())
//! ```

// Re-export public API from fluent_core
pub use fluent_core::{
    Error, FluentIterator, Result, SequenceView, combinators, list, prelude, view,
};

// Re-export the ready-made mappers and reducers
pub use fluent_core::{max, multiply, sum, upper};

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Fluent sequence views.
//!
//! A [`SequenceView`] is a single-pass cursor over an owned, ordered sequence.
//! Draining operations (`map`, `reduce`, `join`, `reverse`) consume whatever
//! elements remain and can be chained:
//!
//! ```
//! use fluent_core::prelude::*;
//!
//! let s = list![1, 2, 3, 4, 5].map(multiply(2)).reverse().join(", ");
//! assert_eq!(s, "10, 8, 6, 4, 2");
//!
//! let largest = list![1, 3, 67, 300, 3, 4, 67].map(multiply(2)).reduce(max());
//! assert_eq!(largest, Some(600));
//! ```

// Needed so that `list!` can uniformly refer to `::fluent_core` and still work
// from within this crate or a different one.
extern crate self as fluent_core;

extern crate alloc;

// Exports some symbols publicly so that macros can always refer to these.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod combinators;
pub mod error;
mod macros;
pub mod view;

pub use combinators::{max, multiply, sum, upper};
pub use error::{Error, Result};
pub use view::{FluentIterator, SequenceView, list};

/// Everything needed to build and chain views.
///
/// ```
/// use fluent_core::prelude::*;
///
/// assert_eq!(list![1, 3, 67, 300, 3, 4, 67].reduce(sum()), Some(445));
/// ```
pub mod prelude {
    pub use crate::combinators::{max, multiply, sum, upper};
    pub use crate::list;
    pub use crate::view::{FluentIterator, SequenceView};
}

//! Variadic view construction.

/// Build a [`SequenceView`](crate::SequenceView) from a list of elements.
///
/// Accepts zero or more comma-separated expressions, with an optional
/// trailing comma.
///
/// ```
/// use fluent_core::prelude::*;
///
/// let mut words = list!["fluent", "views"];
/// assert_eq!(words.join(" "), "fluent views");
///
/// let mut empty: SequenceView<i32> = list![];
/// assert!(!empty.has_next());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::view::list($crate::shim::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::view::list($crate::shim::vec![$($item),+])
    };
}

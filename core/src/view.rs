//! Single-pass sequence views.
//!
//! [`FluentIterator`] describes the contract: pull-based traversal through
//! `has_next`/`next` plus a small vocabulary of draining operations.
//! [`SequenceView`] is the concrete cursor over an owned, materialized
//! sequence.
//!
//! Each element of a backing sequence is visited at most once. A view is
//! ACTIVE while elements remain and EXHAUSTED afterwards; only `reverse` can
//! install a new backing sequence on the same view.

use core::fmt::Display;

use crate::error::{Error, Result};
use crate::{String, ToString, Vec, vec};

/// Pull-based iteration with chainable, draining transformations.
///
/// Mappers are any `FnMut(T) -> R` and reducers any `FnMut(T, T) -> T`; see
/// [`combinators`](crate::combinators) for ready-made ones. Both are expected
/// to be pure: ordering and reduction results are only meaningful when they
/// are.
///
/// Every operation except [`next`](FluentIterator::next) is total. An
/// exhausted view behaves like an empty one.
pub trait FluentIterator<T> {
    /// Returns `true` while at least one element remains.
    fn has_next(&self) -> bool;

    /// Advance the cursor and return the element under it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExhaustedIteration`] when no elements remain.
    fn next(&mut self) -> Result<T>;

    /// Apply `mapper` to every remaining element, in order, exactly once.
    ///
    /// Returns a new view over the results. This view is left exhausted.
    fn map<R, F>(&mut self, mapper: F) -> SequenceView<R>
    where
        F: FnMut(T) -> R;

    /// Fold the remaining elements into `initial`, left to right.
    ///
    /// Computes `reducer(...reducer(reducer(initial, e0), e1)..., en)`.
    /// Returns `initial` unchanged when nothing remains.
    fn reduce_with<F>(&mut self, reducer: F, initial: T) -> T
    where
        F: FnMut(T, T) -> T;

    /// Like [`reduce_with`](FluentIterator::reduce_with), seeded with the
    /// first remaining element.
    ///
    /// Returns `None` when no elements remain.
    fn reduce<F>(&mut self, reducer: F) -> Option<T>
    where
        F: FnMut(T, T) -> T;

    /// Render the remaining elements with `separator` between neighbours.
    ///
    /// Zero elements produce the empty string; there is never a leading or
    /// trailing separator.
    fn join(&mut self, separator: &str) -> String
    where
        T: Display;

    /// Replace the remaining elements with the same elements in reverse
    /// order, returning this view for further chaining.
    fn reverse(&mut self) -> &mut Self;
}

/// A single-pass cursor over an owned, ordered sequence.
///
/// Build one with [`list`], the [`list!`](crate::list) macro, or any of the
/// `From`/`FromIterator` conversions.
#[derive(Debug)]
pub struct SequenceView<T> {
    cursor: vec::IntoIter<T>,
}

/// Create a view positioned before the first of `items`.
///
/// An empty input yields a valid, already exhausted view.
pub fn list<T>(items: impl IntoIterator<Item = T>) -> SequenceView<T> {
    items.into_iter().collect()
}

impl<T> SequenceView<T> {
    /// Number of elements not yet consumed.
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Returns `true` once every element has been consumed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The remaining elements, without consuming them.
    pub fn as_slice(&self) -> &[T] {
        self.cursor.as_slice()
    }
}

impl<T> FluentIterator<T> for SequenceView<T> {
    fn has_next(&self) -> bool {
        !self.is_empty()
    }

    fn next(&mut self) -> Result<T> {
        self.cursor.next().ok_or(Error::ExhaustedIteration)
    }

    fn map<R, F>(&mut self, mapper: F) -> SequenceView<R>
    where
        F: FnMut(T) -> R,
    {
        let mapped: Vec<R> = self.cursor.by_ref().map(mapper).collect();
        tracing::trace!(count = mapped.len(), "mapped sequence view");
        SequenceView::from(mapped)
    }

    fn reduce_with<F>(&mut self, mut reducer: F, initial: T) -> T
    where
        F: FnMut(T, T) -> T,
    {
        let mut count = 0usize;
        let mut result = initial;
        for item in self.cursor.by_ref() {
            result = reducer(result, item);
            count += 1;
        }
        tracing::trace!(count, "reduced sequence view");
        result
    }

    fn reduce<F>(&mut self, reducer: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        let Some(seed) = self.cursor.next() else {
            tracing::trace!("reduce over exhausted sequence view");
            return None;
        };
        Some(self.reduce_with(reducer, seed))
    }

    fn join(&mut self, separator: &str) -> String
    where
        T: Display,
    {
        let mut out = String::new();
        if let Some(first) = self.cursor.next() {
            out.push_str(&first.to_string());
            for item in self.cursor.by_ref() {
                out.push_str(separator);
                out.push_str(&item.to_string());
            }
        }
        tracing::trace!(len = out.len(), "joined sequence view");
        out
    }

    fn reverse(&mut self) -> &mut Self {
        let mut reversed: Vec<T> = self.cursor.by_ref().collect();
        reversed.reverse();
        tracing::trace!(count = reversed.len(), "reversed sequence view");
        self.cursor = reversed.into_iter();
        self
    }
}

impl<T> Default for SequenceView<T> {
    fn default() -> Self {
        Self::from(Vec::new())
    }
}

impl<T> From<Vec<T>> for SequenceView<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            cursor: items.into_iter(),
        }
    }
}

impl<T> FromIterator<T> for SequenceView<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        tracing::trace!(count = items.len(), "built sequence view");
        Self::from(items)
    }
}

/// Hands the remaining elements to standard iterator adapters.
impl<T> IntoIterator for SequenceView<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

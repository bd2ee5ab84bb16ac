//! Ready-made mappers and reducers.
//!
//! A mapper is any `FnMut(T) -> R` and a reducer any `FnMut(T, T) -> T`, so
//! plain closures work everywhere these do. The functions here just name the
//! common cases.
//!
//! # Examples
//! - `list![1, 2, 3].map(multiply(2))` → `[2, 4, 6]`
//! - `list!["a", "b"].map(upper())` → `["A", "B"]`
//! - `list![3, 9, 4].reduce(max())` → `Some(9)`
//! - `list![3, 9, 4].reduce(sum())` → `Some(16)`

use core::ops::{Add, Mul};

use crate::String;

/// Mapper that multiplies each element by `factor`.
///
/// Uses plain `*`: integer overflow panics in debug builds and wraps in
/// release builds. Map with `checked_mul` when inputs are untrusted.
pub fn multiply<T>(factor: T) -> impl Fn(T) -> T
where
    T: Mul<Output = T> + Copy,
{
    move |item| item * factor
}

/// Mapper that upper-cases each string element.
pub fn upper<S>() -> impl Fn(S) -> String
where
    S: AsRef<str>,
{
    |item| item.as_ref().to_uppercase()
}

/// Reducer that keeps the greater of the accumulator and the element.
///
/// On ties the accumulator wins, so the earliest maximal element survives.
pub fn max<T: Ord>() -> impl Fn(T, T) -> T {
    |memo, item| if item > memo { item } else { memo }
}

/// Reducer that adds each element to the accumulator.
///
/// Uses plain `+`, with the same overflow behaviour as [`multiply`].
pub fn sum<T: Add<Output = T>>() -> impl Fn(T, T) -> T {
    |memo, item| memo + item
}

#[cfg(test)]
#[path = "combinators_test.rs"]
mod combinators_test;

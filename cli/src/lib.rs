//! Fluent CLI library.
//!
//! This crate provides the command-line front end for fluent sequence views.
//! The public modules are primarily exposed for testing purposes.

pub mod cli;
pub mod commands;
pub mod common;

//! Command-line front end for the `ugraph` binary.

pub mod commands;

pub use commands::{NamedGraph, TraverseOptions};

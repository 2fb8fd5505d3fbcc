//! Command-line interface module
//!
//! Handles argument parsing for both binaries

pub mod args;

pub use args::*;

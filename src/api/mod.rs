//! Compute API access
//!
//! Thin blocking HTTP layer over the authenticate and collections endpoints

pub mod client;

pub use client::*;

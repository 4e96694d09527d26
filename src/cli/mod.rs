//! CLI module for raid
//!
//! Command-line argument definitions.

pub mod commands;

pub use commands::*;

//! Utility functions module
//!
//! Helpers shared by the settings loader.

pub mod datetime;

pub use datetime::*;

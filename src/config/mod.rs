//! Configuration management module
//!
//! Startup settings are resolved in two steps: `sources` registers defaults
//! and ingests one YAML file, `settings` decodes and validates the result.

pub mod settings;
pub mod sources;

pub use settings::*;
pub use sources::*;

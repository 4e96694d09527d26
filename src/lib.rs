//! raid - air raid alert notification service
//!
//! Startup settings loading for the service: built-in defaults overlaid by a
//! single YAML settings file, decoded and validated once before the service
//! starts.

pub mod cli;
pub mod config;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use crate::config::{load_settings, ConfigSource, Settings, SettingsLoader};
pub use crate::error::{RaidError, Result};

//! Command-line arguments
//!
//! The service takes at most one positional argument: an explicit settings
//! file. Without it the conventional locations are searched.

use crate::config::ConfigSource;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "raid",
    version,
    about = "Air raid alert notification service",
    long_about = None
)]
pub struct Cli {
    /// Settings file to load. When omitted, settings.yml is looked up in
    /// /etc/raid, ~/.raid and the current directory, in that order.
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Source selection implied by the arguments
    pub fn config_source(&self) -> ConfigSource {
        ConfigSource::from_arg(self.config.clone())
    }
}

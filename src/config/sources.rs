//! Settings source registration and ingestion
//!
//! Registers the built-in defaults into a layered `config` store, selects a
//! YAML settings file (explicit path or directory search) and merges it over
//! the defaults.

use crate::config::settings::Settings;
use crate::error::{RaidError, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Conventional settings file name looked up during directory search
pub const SETTINGS_FILE_NAME: &str = "settings.yml";

pub const DEFAULT_TELEGRAM_CHANNEL: &str = "air_alert_ua";
pub const DEFAULT_TIMEZONE_NAME: &str = "Europe/Kiev";
pub const DEFAULT_BACKLOG_SIZE: usize = 500;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 10101;

/// Where the settings file comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit path given on the command line; never falls back to a search
    File(PathBuf),
    /// First `file_name` found in `dirs`, in order
    Search {
        file_name: String,
        dirs: Vec<PathBuf>,
    },
}

impl ConfigSource {
    /// Explicit path when an argument is present, default search otherwise
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) => Self::File(path),
            None => Self::default_search(),
        }
    }

    /// `settings.yml` in `/etc/raid`, `$HOME/.raid` and the working directory
    pub fn default_search() -> Self {
        Self::Search {
            file_name: SETTINGS_FILE_NAME.to_string(),
            dirs: default_search_dirs(),
        }
    }

    /// Resolve the source to a concrete file path
    pub fn locate(&self) -> Result<PathBuf> {
        match self {
            Self::File(path) => Ok(path.clone()),
            Self::Search { file_name, dirs } => {
                let mut searched = Vec::with_capacity(dirs.len());
                for dir in dirs {
                    let candidate = dir.join(file_name);
                    debug!("Looking for settings at {}", candidate.display());
                    if candidate.is_file() {
                        return Ok(candidate);
                    }
                    searched.push(dir.clone());
                }
                Err(RaidError::source_not_found(file_name.as_str(), searched))
            }
        }
    }
}

/// Candidate directories in priority order. The home entry is skipped when
/// no home directory can be determined.
pub fn default_search_dirs() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("/etc/raid")];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".raid"));
    }
    candidates.push(PathBuf::from("."));
    candidates
}

/// Layered settings store with the defaults registered
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    builder: ConfigBuilder<DefaultState>,
}

impl SettingsLoader {
    /// Register a default for every recognised key
    pub fn new() -> Result<Self> {
        let builder = Config::builder()
            .set_default("telegram_channel", DEFAULT_TELEGRAM_CHANNEL)?
            .set_default("timezone_name", DEFAULT_TIMEZONE_NAME)?
            .set_default("api_keys", Vec::<String>::new())?
            .set_default("debug", false)?
            .set_default("trace", false)?
            .set_default("backlog_size", DEFAULT_BACKLOG_SIZE as i64)?
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?;

        Ok(Self { builder })
    }

    /// Read the selected file and merge it over the defaults
    pub fn ingest(self, source: &ConfigSource) -> Result<LoadedConfig> {
        let path = source.locate()?;
        debug!("Reading settings from {}", path.display());

        let bytes = std::fs::read(&path).map_err(|e| RaidError::source_unreadable(&path, e))?;
        self.merge_yaml(path, bytes)
    }

    fn merge_yaml(self, path: PathBuf, bytes: Vec<u8>) -> Result<LoadedConfig> {
        let text = String::from_utf8(bytes)
            .map_err(|e| RaidError::source_malformed(&path, foreign(e)))?;
        let overrides = drop_null_keys(&text).map_err(|e| RaidError::source_malformed(&path, e))?;

        let config = self
            .builder
            .add_source(File::from_str(&overrides, FileFormat::Yaml))
            .build()
            .map_err(|e| RaidError::source_malformed(&path, e))?;

        Ok(LoadedConfig {
            config,
            origin: path,
        })
    }
}

/// Top-level nulls (`port:`, `---`, `~`) count as absent keys so the
/// registered defaults still apply. Non-mapping documents pass through
/// unchanged and are rejected by the store.
fn drop_null_keys(text: &str) -> std::result::Result<String, config::ConfigError> {
    let document: serde_yaml::Value = serde_yaml::from_str(text).map_err(foreign)?;
    let mapping: serde_yaml::Mapping = match document {
        serde_yaml::Value::Null => serde_yaml::Mapping::new(),
        serde_yaml::Value::Mapping(mapping) => mapping
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .collect(),
        _ => return Ok(text.to_string()),
    };

    serde_yaml::to_string(&mapping).map_err(foreign)
}

fn foreign<E>(error: E) -> config::ConfigError
where
    E: std::error::Error + Send + Sync + 'static,
{
    config::ConfigError::Foreign(Box::new(error))
}

/// Defaults merged with one settings file, not yet decoded
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    config: Config,
    origin: PathBuf,
}

impl LoadedConfig {
    /// File the overrides were read from
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// Raw merged view
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decode and validate into `Settings`
    pub fn resolve(&self) -> Result<Settings> {
        Settings::from_loaded(self)
    }
}

/// Register defaults, ingest `source` and resolve the result
pub fn load_settings(source: &ConfigSource) -> Result<Settings> {
    SettingsLoader::new()?.ingest(source)?.resolve()
}

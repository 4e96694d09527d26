//! Resolved service settings
//!
//! Decodes the merged configuration into `Settings`, resolves the timezone
//! and enforces the startup invariants.

use crate::config::sources::LoadedConfig;
use crate::error::{RaidError, Result};
use crate::utils::datetime::{now_in, parse_timezone};
use chrono::DateTime;
use chrono_tz::Tz;
use serde::Deserialize;
use std::fmt;
use tracing::info;

/// Shape of the settings file after defaults are applied
#[derive(Debug, Deserialize)]
struct RawSettings {
    telegram_channel: String,
    timezone_name: String,
    api_keys: Vec<String>,
    debug: bool,
    trace: bool,
    backlog_size: usize,
    host: String,
    port: u16,
}

/// Validated service settings, resolved once at startup
#[derive(Clone, PartialEq)]
pub struct Settings {
    pub telegram_channel: String,
    pub timezone_name: String,
    /// Always the zone named by `timezone_name`
    pub timezone: Tz,
    pub api_keys: Vec<String>,
    pub debug: bool,
    pub trace: bool,
    pub backlog_size: usize,
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub(crate) fn from_loaded(loaded: &LoadedConfig) -> Result<Self> {
        let raw: RawSettings = loaded
            .config()
            .clone()
            .try_deserialize()
            .map_err(|e| RaidError::source_malformed(loaded.origin(), e))?;

        let timezone = parse_timezone(&raw.timezone_name)?;

        let settings = Self {
            telegram_channel: raw.telegram_channel,
            timezone_name: raw.timezone_name,
            timezone,
            api_keys: raw.api_keys,
            debug: raw.debug,
            trace: raw.trace,
            backlog_size: raw.backlog_size,
            host: raw.host,
            port: raw.port,
        };
        settings.validate()?;

        info!("settings: loaded {} API keys", settings.api_keys.len());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_keys.is_empty() {
            return Err(RaidError::CredentialsMissing);
        }

        Ok(())
    }

    /// `host:port` for the HTTP listener
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Current time in the configured timezone
    pub fn now(&self) -> DateTime<Tz> {
        now_in(self.timezone)
    }

    /// Log filter implied by the trace/debug flags; `trace` wins
    pub fn log_directive(&self) -> Option<&'static str> {
        if self.trace {
            Some("raid=trace")
        } else if self.debug {
            Some("raid=debug")
        } else {
            None
        }
    }
}

// API keys are credentials; only their count is printed.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("telegram_channel", &self.telegram_channel)
            .field("timezone_name", &self.timezone_name)
            .field("timezone", &self.timezone)
            .field("api_keys", &format_args!("[REDACTED; {}]", self.api_keys.len()))
            .field("debug", &self.debug)
            .field("trace", &self.trace)
            .field("backlog_size", &self.backlog_size)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

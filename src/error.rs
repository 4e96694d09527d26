use std::path::PathBuf;
use thiserror::Error;

/// Main error type for raid settings loading
#[derive(Debug, Error)]
pub enum RaidError {
    #[error("settings: open settings file {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings: read config: no {file_name} found in {}", display_paths(searched))]
    SourceNotFound {
        file_name: String,
        searched: Vec<PathBuf>,
    },

    #[error("settings: parse {}: {source}", path.display())]
    SourceMalformed {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    #[error("settings: load timezone '{name}': {reason}")]
    TimezoneUnresolvable { name: String, reason: String },

    #[error("settings: no API keys were loaded")]
    CredentialsMissing,

    #[error("Configuration loading error: {0}")]
    ConfigLoadError(#[from] config::ConfigError),
}

impl RaidError {
    pub fn source_unreadable<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source,
        }
    }

    pub fn source_not_found<S: Into<String>>(file_name: S, searched: Vec<PathBuf>) -> Self {
        Self::SourceNotFound {
            file_name: file_name.into(),
            searched,
        }
    }

    pub fn source_malformed<P: Into<PathBuf>>(path: P, source: config::ConfigError) -> Self {
        Self::SourceMalformed {
            path: path.into(),
            source,
        }
    }

    pub fn timezone_unresolvable<S: Into<String>, R: Into<String>>(name: S, reason: R) -> Self {
        Self::TimezoneUnresolvable {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no candidate directories".to_string();
    }

    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for raid operations
pub type Result<T> = std::result::Result<T, RaidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_searched_paths() {
        let err = RaidError::source_not_found(
            "settings.yml",
            vec![PathBuf::from("/etc/raid"), PathBuf::from(".")],
        );
        assert_eq!(
            err.to_string(),
            "settings: read config: no settings.yml found in /etc/raid, ."
        );
    }

    #[test]
    fn test_timezone_message_names_value() {
        let err = RaidError::timezone_unresolvable("Mars/Olympus", "unknown zone");
        assert!(err.to_string().contains("'Mars/Olympus'"));
    }

    #[test]
    fn test_unreadable_keeps_io_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = RaidError::source_unreadable("/nope/settings.yml", io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("settings: open settings file /nope/settings.yml"));
    }
}

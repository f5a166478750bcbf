//! Console shell settings loaded from TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::io::ButtonSnapshot;

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Left and right buttons are both mapped to '{0}'")]
    SameKey(char),
}

/// Settings for the console shell.
///
/// Every field is optional in the file; missing fields take their defaults.
///
/// ```rust
/// use pressfsm::config::Settings;
///
/// let settings = Settings::from_toml("right_key = 'k'\nhistory_limit = 32").unwrap();
/// assert_eq!(settings.left_key, 'l');
/// assert_eq!(settings.right_key, 'k');
/// assert_eq!(settings.history_limit, Some(32));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key that stands for a left button press
    pub left_key: char,
    /// Key that stands for a right button press
    pub right_key: char,
    /// Record up to this many transitions
    pub history_limit: Option<usize>,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            left_key: 'l',
            right_key: 'r',
            history_limit: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Load settings from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Log filter from a `RUST_LOG` value, falling back to `log_level`,
    /// then to `info`. Unparsable directives never abort startup.
    ///
    /// ```rust
    /// use pressfsm::config::Settings;
    /// use tracing_subscriber::filter::LevelFilter;
    ///
    /// let settings = Settings::default();
    /// let filter = settings.log_filter(Some("pressfsm=debug"));
    /// assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    /// ```
    pub fn log_filter(&self, env: Option<&str>) -> EnvFilter {
        env.and_then(|directives| EnvFilter::try_new(directives).ok())
            .or_else(|| EnvFilter::try_new(&self.log_level).ok())
            .unwrap_or_else(|| EnvFilter::new("info"))
    }

    /// Map one console line to a press snapshot.
    ///
    /// Only a line that is exactly one of the keys, ignoring surrounding
    /// whitespace, counts as a press.
    pub fn snapshot_for_line(&self, line: &str) -> ButtonSnapshot {
        let mut chars = line.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) if key == self.left_key => ButtonSnapshot::LEFT,
            (Some(key), None) if key == self.right_key => ButtonSnapshot::RIGHT,
            _ => ButtonSnapshot::NONE,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.left_key == self.right_key {
            return Err(ConfigError::SameKey(self.left_key));
        }
        Ok(())
    }
}

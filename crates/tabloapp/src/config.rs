//! Application configuration.
//!
//! Layered lowest-to-highest: built-in defaults, then `tablonette.toml` in
//! the data directory, then `TABLONETTE_*` environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use confique::Config;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("", "", "tablonette"));

/// Platform data directory for the board, e.g. `~/.config/tablonette`.
pub fn default_data_dir() -> PathBuf {
    PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Milliseconds between due-task polls.
    #[config(default = 30000, env = "TABLONETTE_POLL_INTERVAL_MS")]
    pub poll_interval_ms: u64,

    /// Where the record documents live. Unset means the platform default.
    #[config(env = "TABLONETTE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 30000,
            data_dir: None,
        }
    }
}

impl BoardConfig {
    pub fn load() -> Result<Self> {
        let config_file = default_data_dir().join("tablonette.toml");

        let mut builder = Self::builder().env();
        if config_file.exists() {
            builder = builder.file(&config_file);
        }
        builder
            .load()
            .map_err(|err| BoardError::Store(format!("invalid configuration: {err}")))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map(Path::to_path_buf)
            .unwrap_or_else(default_data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_poll_interval_is_thirty_seconds() {
        let config = BoardConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_data_dir_falls_back_to_platform_default() {
        let config = BoardConfig::default();
        assert_eq!(config.data_dir(), default_data_dir());
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = BoardConfig {
            data_dir: Some(PathBuf::from("/tmp/board")),
            ..Default::default()
        };
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/board"));
    }
}

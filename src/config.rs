use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Filter;
use crate::{tlog_debug, Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Completion filter selected on startup.
    #[serde(default)]
    pub default_filter: Filter,
    /// Start with the keymap legend expanded.
    #[serde(default)]
    pub show_keymap: bool,
}

impl Config {
    pub fn todo_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".todo"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::todo_dir()?.join("todo.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        tlog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            tlog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        tlog_debug!(
            "Config loaded: default_filter={}, show_keymap={}",
            config.default_filter,
            config.show_keymap
        );
        Ok(config)
    }

    /// Apply the `--filter` flag. A flag given on the command line wins
    /// over `default_filter` from the file.
    pub fn with_cli_filter(mut self, filter: Option<Filter>) -> Self {
        if let Some(filter) = filter {
            tlog_debug!("Config: --filter {} overrides {}", filter, self.default_filter);
            self.default_filter = filter;
        }
        self
    }
}

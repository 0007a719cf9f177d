use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{Result, WifiMonError};

const DEFAULT_REFRESH_MS: u64 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Disable the wifi panel entirely
    #[serde(default)]
    pub disable_wifi: bool,
    /// Interfaces excluded from scanning, by exact name or `prefix*` pattern
    #[serde(default)]
    pub hidden_interfaces: Vec<String>,
    /// Refresh interval for the live monitor, in milliseconds
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,
}

fn default_refresh_ms() -> u64 {
    DEFAULT_REFRESH_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disable_wifi: false,
            hidden_interfaces: Vec::new(),
            refresh_ms: DEFAULT_REFRESH_MS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(&config_path)?;

        // If the file is empty or corrupted, return default config
        // (this can happen when the config format changes)
        if data.is_empty() {
            Ok(Config::default())
        } else {
            Ok(serde_json::from_str(&data).unwrap_or_default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, data)?;

        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| WifiMonError::config("Could not determine config directory"))?;

        Ok(config_dir.join("wifimon").join("config.json"))
    }

    /// Whether an interface is excluded from scanning.
    ///
    /// A pattern ending in `*` matches any interface with that prefix;
    /// anything else must match the name exactly.
    pub fn is_hide(&self, name: &str) -> bool {
        self.hidden_interfaces
            .iter()
            .any(|pattern| match pattern.strip_suffix('*') {
                Some(prefix) => name.starts_with(prefix),
                None => pattern == name,
            })
    }

    pub fn hide_interface(&mut self, name: String) {
        if !self.hidden_interfaces.contains(&name) {
            self.hidden_interfaces.push(name);
        }
    }

    /// Returns true if the pattern was present.
    pub fn unhide_interface(&mut self, name: &str) -> bool {
        let before = self.hidden_interfaces.len();
        self.hidden_interfaces.retain(|pattern| pattern != name);
        self.hidden_interfaces.len() != before
    }
}

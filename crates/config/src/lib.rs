//! Configuration management for smartclip.
//!
//! Loads and saves settings in TOML format under the XDG config directory.

mod settings;

pub use settings::{Config, EditorSettings, LoggingSettings};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "smartclip";

/// `<base>/smartclip`, where `base` is an XDG base directory from `dirs`
fn app_dir(base: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
    base.map(|p| p.join(APP_NAME))
        .with_context(|| format!("Failed to determine {} directory", kind))
}

/// Default values as constants
pub mod defaults {
    pub const COPY_WITH_EMPTY_SELECTION: bool = true;
    pub const PASTE_FROM_HISTORY_QUICK_PANEL: bool = true;
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const LOG_FILE_NAME: &str = "smartclip.log";
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// On first run, creates the config file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path.
    ///
    /// Missing files are created with defaults; missing keys are filled in
    /// and written back so the file always lists every setting.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::validate_content(&original_content)?;

        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// `$XDG_CONFIG_HOME/smartclip/config.toml`
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(app_dir(dirs::config_dir(), "config")?.join("config.toml"))
    }

    /// Configured log file, or `$XDG_CACHE_HOME/smartclip/smartclip.log`.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.logging.file_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(app_dir(dirs::cache_dir(), "cache")?.join(defaults::LOG_FILE_NAME)),
        }
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }
}

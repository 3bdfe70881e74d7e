use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::DEFAULT_COVER_DESCRIPTION;

/// Configuration for retag.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (RETAG_* prefix)
/// 3. Config file (~/.config/retag/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset and no `-v` flag is given.
    ///
    /// Can be set via:
    /// - CLI: -v, -vv, -vvv
    /// - ENV: RETAG_LOG_LEVEL
    /// - Config: log_level = "info"
    /// - Default: warn
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Description stored with embedded cover images.
    ///
    /// Can be set via:
    /// - ENV: RETAG_COVER_DESCRIPTION
    /// - Config: cover_description = "Front"
    /// - Default: Cover
    #[serde(default = "default_cover_description")]
    pub cover_description: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            cover_description: default_cover_description(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/retag/config.toml
    /// Reads environment variables with RETAG_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        // Create Confygery builder
        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        // If config file exists, load it
        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        // Set up environment variable scanning with RETAG_ prefix
        let env_opts = env::Options::with_top_level("retag");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        // Build and deserialize into Config
        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        Ok(config)
    }
}

fn default_log_level() -> String {
    String::from("warn")
}

fn default_cover_description() -> String {
    DEFAULT_COVER_DESCRIPTION.to_string()
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/retag/config.toml
/// - macOS: ~/Library/Application Support/retag/config.toml
/// - Windows: %APPDATA%\retag\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("retag")
        .join("config.toml")
}

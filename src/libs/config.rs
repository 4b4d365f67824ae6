//! Application configuration management.
//!
//! Handles the persistent settings of the pointage CLI: which badge portal
//! to talk to and under which account. Configuration lives in a JSON file
//! in the platform application data directory and is created through an
//! interactive setup wizard.
//!
//! ## Storage and Security
//!
//! - Configuration files are stored in JSON format in platform-specific directories
//! - Passwords are never stored in the configuration file
//! - Session tokens and credentials use separate encrypted storage mechanisms
//!
//! Per-login presentation preferences (theme, weekly objective) are not part
//! of this file; they live in the profile store next to it.

use super::data_storage::DataStorage;
use crate::api::portal::PortalConfig;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
///
/// The file is stored in platform-specific application data directories:
/// - **Windows**: `%LOCALAPPDATA%\mgillet\pointage\config.json`
/// - **macOS**: `~/Library/Application Support/mgillet/pointage/config.json`
/// - **Linux**: `~/.local/share/mgillet/pointage/config.json`
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Main configuration container for the application.
///
/// The portal module is optional so the tool can run (and explain what is
/// missing) before `init` has ever been executed. Unconfigured modules are
/// omitted from the JSON output entirely.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Badge portal connection parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal: Option<PortalConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error: a default (empty) configuration is
    /// returned so first-run commands can detect the unconfigured state
    /// themselves. A present but unparseable file is reported as an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    /// Saves the current configuration with pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file.
    ///
    /// Returns `true` when a file existed and was deleted, `false` when
    /// there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Existing values are used as defaults so re-running `init` only
    /// updates what the user actually changes. The returned configuration
    /// still has to be saved by the caller.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        config.portal = Some(PortalConfig::init(&config.portal)?);
        Ok(config)
    }

    /// Returns the portal configuration or a descriptive error when the
    /// application has not been initialized yet.
    pub fn portal(&self) -> Result<PortalConfig> {
        self.portal.clone().ok_or_else(|| msg_error_anyhow!(Message::ConfigPortalMissing))
    }
}

//! Console Configuration
//!
//! Backend server settings and list defaults, persisted as TOML.

use crate::constants::{
    DEFAULT_EMAIL_TEMPLATE_TYPE_ITEM_LIMIT, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_URL,
};
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

const CONFIG_FILE_NAME: &str = "idm-console.toml";

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Also write a daily log file under the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

/// Console configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Identity server base URL
    pub server_url: String,
    /// Per-request timeout
    pub request_timeout_secs: u64,
    /// Initial page size of the email template type list
    pub email_template_type_item_limit: usize,
    /// Identity providers that must never be deleted from the console
    pub do_not_delete_identity_providers: Vec<String>,
    pub log: LogConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            email_template_type_item_limit: DEFAULT_EMAIL_TEMPLATE_TYPE_ITEM_LIMIT,
            do_not_delete_identity_providers: Vec::new(),
            log: LogConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a TOML document. An empty document yields the defaults.
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the console cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.email_template_type_item_limit == 0 {
            return Err(Error::InvalidConfiguration {
                message: "email_template_type_item_limit must be greater than zero".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::InvalidConfiguration {
                message: "request_timeout_secs must be greater than zero".to_string(),
            });
        }
        if self.server_url.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "server_url must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Point the console at another server, e.g. from `--server`
    pub fn override_server_url(&mut self, server_url: impl Into<String>) -> Result<()> {
        self.server_url = server_url.into();
        self.validate()
    }

    /// Load from an explicit file path
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;
        Self::from_toml(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })
    }

    /// Load from the default location, creating an empty file on first use
    pub fn load() -> Result<Self> {
        let path = get_config_path()?;
        Self::load_from(&path)
    }

    /// Write to an explicit file path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Get or create the config file path
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);

    #[cfg(debug_assertions)]
    info!("Console config file: {}", path.display());

    if !path.exists() {
        std::fs::write(&path, "")?;
    }

    Ok(path)
}

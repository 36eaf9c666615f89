//! Project configuration.
//!
//! Reads optional defaults from `.sakura-secret.toml` in the working
//! directory. Command-line flags and environment variables take
//! precedence over anything set here.
//!
//! ```toml
//! zone = "is1b"
//! vault_id = "113700000000"
//! broker = "/usr/local/bin/usacloud"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::types::{VaultId, Zone};
use crate::error::{ConfigError, Result};

/// Defaults loaded from `.sakura-secret.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Zone the vault lives in
    #[serde(default)]
    pub zone: Option<Zone>,
    /// Secret Manager vault id
    #[serde(default)]
    pub vault_id: Option<VaultId>,
    /// Broker program name or path
    #[serde(default)]
    pub broker: Option<String>,
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `.sakura-secret.toml` from the current directory.
    ///
    /// A missing file yields the empty configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load a configuration file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Layer explicit values over this configuration.
    ///
    /// `Some` values win; `None` keeps whatever the file provided.
    pub fn merge(self, zone: Option<Zone>, vault_id: Option<VaultId>, broker: Option<String>) -> Self {
        Self {
            zone: zone.or(self.zone),
            vault_id: vault_id.or(self.vault_id),
            broker: broker.or(self.broker),
        }
    }

    /// Broker program to run.
    pub fn broker_program(&self) -> &str {
        self.broker.as_deref().unwrap_or(constants::DEFAULT_BROKER)
    }
}

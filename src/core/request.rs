//! Lookup request.
//!
//! Holds the caller's secret names and vault coordinates, and checks them
//! before any broker is invoked.

use tracing::debug;

use crate::core::constants::DEFAULT_ZONE;
use crate::core::types::{SecretName, VaultId, Zone};
use crate::error::{ConfigError, Result};

/// A batch of secrets to fetch from one vault.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupRequest {
    secret_names: Vec<SecretName>,
    zone: Option<Zone>,
    vault_id: Option<VaultId>,
}

impl LookupRequest {
    /// Create a request for the given names, with no zone or vault set.
    pub fn new<I, S>(secret_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SecretName>,
    {
        Self {
            secret_names: secret_names.into_iter().map(Into::into).collect(),
            zone: None,
            vault_id: None,
        }
    }

    /// Set the zone. An empty string falls back to the default zone.
    pub fn zone(mut self, zone: impl Into<Zone>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// Set the vault identifier.
    pub fn vault_id(mut self, vault_id: impl Into<VaultId>) -> Self {
        self.vault_id = Some(vault_id.into());
        self
    }

    /// Names to resolve, in order.
    pub fn secret_names(&self) -> &[SecretName] {
        &self.secret_names
    }

    /// Zone lookups run in, with the default applied.
    pub fn effective_zone(&self) -> &str {
        match self.zone.as_deref() {
            Some(zone) if !zone.is_empty() => zone,
            _ => DEFAULT_ZONE,
        }
    }

    /// Check the request and return the vault id to use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVaultId` if no non-empty vault id is set,
    /// `ConfigError::NoSecretNames` if the name list is empty, and
    /// `ConfigError::EmptySecretName` for a blank name.
    pub fn validate(&self) -> Result<&str> {
        debug!(
            names = self.secret_names.len(),
            zone = self.effective_zone(),
            "validating lookup request"
        );

        let vault_id = match self.vault_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => return Err(ConfigError::MissingVaultId.into()),
        };

        if self.secret_names.is_empty() {
            return Err(ConfigError::NoSecretNames.into());
        }

        if let Some(i) = self.secret_names.iter().position(|n| n.is_empty()) {
            return Err(ConfigError::EmptySecretName(i + 1).into());
        }

        Ok(vault_id)
    }
}

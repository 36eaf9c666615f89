//! Type aliases and small value types for domain concepts.

use std::fmt;

/// A secret name as stored in the vault (e.g. `db-password`).
pub type SecretName = String;

/// A Secret Manager vault identifier (e.g. `113700000000`).
pub type VaultId = String;

/// A Sakura Cloud zone (e.g. `tk1a`, `is1b`).
pub type Zone = String;

/// The secret a single broker call is resolving.
///
/// Attached to every per-secret error so the message says what failed
/// and where.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretTarget {
    name: SecretName,
    vault_id: VaultId,
    zone: Zone,
}

impl SecretTarget {
    /// Create a target from its three coordinates.
    pub fn new(
        name: impl Into<SecretName>,
        vault_id: impl Into<VaultId>,
        zone: impl Into<Zone>,
    ) -> Self {
        Self {
            name: name.into(),
            vault_id: vault_id.into(),
            zone: zone.into(),
        }
    }

    /// Secret name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vault identifier
    pub fn vault_id(&self) -> &str {
        &self.vault_id
    }

    /// Zone the vault lives in
    pub fn zone(&self) -> &str {
        &self.zone
    }
}

impl fmt::Display for SecretTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "secret '{}' from vault '{}' in zone '{}'",
            self.name, self.vault_id, self.zone
        )
    }
}

//! Constants used throughout sakura-secret.
//!
//! Centralizes magic strings and configuration values.

/// Zone used when none is configured.
pub const DEFAULT_ZONE: &str = "tk1a";

/// Broker executable looked up on PATH by default.
pub const DEFAULT_BROKER: &str = "usacloud";

/// Project configuration file name (.sakura-secret.toml).
pub const CONFIG_FILE: &str = ".sakura-secret.toml";

/// Environment variable overriding the zone.
pub const ZONE_ENV: &str = "SAKURA_SECRET_ZONE";

/// Environment variable supplying the vault id.
pub const VAULT_ID_ENV: &str = "SAKURA_SECRET_VAULT_ID";

/// Environment variable pointing at the broker binary.
pub const BROKER_ENV: &str = "SAKURA_SECRET_BROKER";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "SAKURA_SECRET_LOG";

/// Error message used when a rejected response carries no `error_msg`.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Resource path of the unveil endpoint for a vault.
pub fn unveil_path(vault_id: &str) -> String {
    format!("/secretmanager/vaults/{}/secrets/unveil", vault_id)
}

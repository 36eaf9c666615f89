//! Test fixtures and constants.

/// Vault id used by the command shortcuts.
pub const VAULT_ID: &str = "123456789012";

/// Unveil path for `VAULT_ID`.
pub const UNVEIL_PATH: &str = "/secretmanager/vaults/123456789012/secrets/unveil";

/// Standard test secrets used across multiple tests.
pub const STANDARD_SECRETS: &[(&str, &str)] = &[
    ("db-password", "postgres-p4ss"),
    ("api-token", "sk-test-12345"),
    ("jwt-secret", "super-secret-jwt-token"),
];

/// A rejection carrying structured error detail.
pub const REJECTED_WITH_ERRORS: &str =
    r#"{"is_ok": false, "error_msg": "nope", "Errors": {"field":"bad"}}"#;

/// A rejection with only a message.
pub const REJECTED_PLAIN: &str = r#"{"is_ok": false, "error_msg": "nope"}"#;

//! Error types.
//!
//! Every failure while resolving a single secret carries the
//! [`SecretTarget`] it happened on, so messages name the secret, vault
//! and zone without re-running at a higher verbosity.

use thiserror::Error;

use crate::core::types::SecretTarget;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{broker} command not found while retrieving {target}. Please ensure {broker} CLI is installed and available in PATH")]
    BrokerNotFound {
        broker: String,
        target: SecretTarget,
    },

    #[error("failed to retrieve {target}: {message}")]
    BrokerExecution {
        target: SecretTarget,
        message: String,
    },

    #[error("failed to parse JSON response from {broker} for {target}: {source}")]
    ResponseParse {
        broker: String,
        target: SecretTarget,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to retrieve {target}: unexpected response structure ({reason})")]
    MalformedResponse {
        target: SecretTarget,
        reason: String,
    },

    #[error(
        "failed to retrieve {target}: {error_msg}{}",
        .errors.as_deref().map(|e| format!(" - {e}")).unwrap_or_default()
    )]
    BrokerRejected {
        target: SecretTarget,
        error_msg: String,
        errors: Option<String>,
    },

    #[error("unexpected error retrieving {target}: {message}")]
    Unexpected {
        target: SecretTarget,
        message: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The secret being resolved when this error occurred, if any.
    pub fn target(&self) -> Option<&SecretTarget> {
        match self {
            Error::BrokerNotFound { target, .. }
            | Error::BrokerExecution { target, .. }
            | Error::ResponseParse { target, .. }
            | Error::MalformedResponse { target, .. }
            | Error::BrokerRejected { target, .. }
            | Error::Unexpected { target, .. } => Some(target),
            Error::Config(_) | Error::Io(_) | Error::Json(_) => None,
        }
    }
}

/// Invalid lookup parameters or configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("vault_id parameter is required for sakura_secret lookup")]
    MissingVaultId,

    #[error("at least one secret name is required for sakura_secret lookup")]
    NoSecretNames,

    #[error("secret name at position {0} is empty")]
    EmptySecretName(usize),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid secret binding '{binding}': {reason}")]
    InvalidBinding { binding: String, reason: String },

    #[error("no command specified")]
    NoCommand,
}

pub type Result<T> = std::result::Result<T, Error>;

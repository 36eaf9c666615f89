//! Environment variable bindings for `run`.
//!
//! A binding maps an environment variable to a secret name. It is written
//! as `VAR=secret-name`, or just `secret-name`, in which case the variable
//! name is derived from the secret name.

use std::str::FromStr;

use crate::core::types::SecretName;
use crate::error::{ConfigError, Error};

/// One `VAR=secret-name` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    var: String,
    secret: SecretName,
}

impl Binding {
    /// Environment variable receiving the value
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Secret to resolve
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

/// Derive an environment variable name from a secret name.
///
/// Upper-cases ASCII letters and maps every other non-alphanumeric
/// character to `_`. A leading digit gets a `_` prefix.
pub fn env_var_name(secret: &str) -> String {
    let mut var: String = secret
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if var.starts_with(|c: char| c.is_ascii_digit()) {
        var.insert(0, '_');
    }
    var
}

fn invalid(binding: &str, reason: &str) -> Error {
    ConfigError::InvalidBinding {
        binding: binding.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl FromStr for Binding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (var, secret) = match s.split_once('=') {
            Some((var, secret)) => (var.to_string(), secret),
            None => (env_var_name(s), s),
        };

        if secret.is_empty() {
            return Err(invalid(s, "secret name is empty"));
        }
        if var.is_empty() {
            return Err(invalid(s, "variable name is empty"));
        }
        if var.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid(s, "variable name cannot start with a digit"));
        }
        if let Some(ch) = var.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(invalid(
                s,
                &format!("invalid character '{}' in variable name", ch),
            ));
        }

        Ok(Self {
            var,
            secret: secret.to_string(),
        })
    }
}

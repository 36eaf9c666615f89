//! Broker invocation.
//!
//! A broker is the external program that performs the authenticated
//! Secret Manager call. The resolver only sees the [`Broker`] trait, so
//! tests can swap in a fake without spawning processes.
//!
//! ## Adding a New Broker
//!
//! 1. Implement the `Broker` trait
//! 2. Add the implementation in a new file next to `usacloud.rs`
//! 3. Re-export from this module

use std::fmt;

use crate::core::constants;
use crate::core::types::{SecretName, SecretTarget, VaultId, Zone};
use crate::error::Result;

mod usacloud;

pub use usacloud::Usacloud;

/// External secret broker.
pub trait Broker {
    /// Broker name for diagnostics (e.g. "usacloud").
    fn name(&self) -> &str;

    /// Execute one unveil call and return the raw stdout.
    ///
    /// # Errors
    ///
    /// Returns `Error::BrokerNotFound` if the broker binary is missing,
    /// `Error::BrokerExecution` if it fails to run or exits non-zero.
    fn invoke(&self, command: &BrokerCommand) -> Result<String>;
}

impl<B: Broker + ?Sized> Broker for &B {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn invoke(&self, command: &BrokerCommand) -> Result<String> {
        (**self).invoke(command)
    }
}

/// Arguments of a single unveil call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerCommand {
    zone: Zone,
    vault_id: VaultId,
    secret_name: SecretName,
}

impl BrokerCommand {
    /// Build the command for one secret.
    pub fn new(
        zone: impl Into<Zone>,
        vault_id: impl Into<VaultId>,
        secret_name: impl Into<SecretName>,
    ) -> Self {
        Self {
            zone: zone.into(),
            vault_id: vault_id.into(),
            secret_name: secret_name.into(),
        }
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn vault_id(&self) -> &str {
        &self.vault_id
    }

    pub fn secret_name(&self) -> &str {
        &self.secret_name
    }

    /// REST path of the vault's unveil endpoint.
    pub fn path(&self) -> String {
        constants::unveil_path(&self.vault_id)
    }

    /// JSON request body: `{"Secret":{"Name":<secret_name>}}`.
    pub fn body(&self) -> String {
        serde_json::json!({ "Secret": { "Name": self.secret_name } }).to_string()
    }

    /// Arguments passed to `usacloud`, excluding the program itself.
    pub fn args(&self) -> Vec<String> {
        vec![
            "rest".to_string(),
            "request".to_string(),
            "--zone".to_string(),
            self.zone.clone(),
            self.path(),
            "-XPOST".to_string(),
            "-d".to_string(),
            self.body(),
        ]
    }

    /// The secret this command resolves, for error context.
    pub fn target(&self) -> SecretTarget {
        SecretTarget::new(&*self.secret_name, &*self.vault_id, &*self.zone)
    }
}

impl fmt::Display for BrokerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args().join(" "))
    }
}

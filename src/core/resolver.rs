//! Batch secret resolution.
//!
//! Resolves a [`LookupRequest`] one name at a time, in order. The first
//! failure aborts the batch; values resolved before it are dropped and
//! zeroized, never returned.

use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::core::broker::{Broker, BrokerCommand, Usacloud};
use crate::core::request::LookupRequest;
use crate::core::response::Envelope;
use crate::error::Result;

/// Secret values in the order they were requested.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LookupResult {
    values: Vec<Zeroizing<String>>,
}

impl LookupResult {
    /// Values, one per requested name.
    pub fn values(&self) -> &[Zeroizing<String>] {
        &self.values
    }

    /// Iterate values as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<Zeroizing<String>> {
        self.values
    }
}

/// Resolves lookup requests through a broker.
pub struct Resolver<B> {
    broker: B,
}

impl<B: Broker> Resolver<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    /// The broker used for each call.
    pub fn broker(&self) -> &B {
        &self.broker
    }

    /// Resolve every name in the request.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` before any broker call if the request is
    /// invalid, otherwise the first per-secret error encountered.
    pub fn lookup(&self, request: &LookupRequest) -> Result<LookupResult> {
        let vault_id = request.validate()?;
        let zone = request.effective_zone();

        debug!(
            vault_id,
            zone,
            names = request.secret_names().len(),
            "resolving secrets"
        );

        let mut values = Vec::with_capacity(request.secret_names().len());
        for name in request.secret_names() {
            let command = BrokerCommand::new(zone, vault_id, name.as_str());
            values.push(self.resolve(&command)?);
        }

        Ok(LookupResult { values })
    }

    /// Resolve a single secret.
    pub fn resolve(&self, command: &BrokerCommand) -> Result<Zeroizing<String>> {
        let target = command.target();
        let raw = Zeroizing::new(self.broker.invoke(command)?);
        let value = Envelope::decode(&raw, self.broker.name(), &target)?.into_value(&target)?;
        trace!(secret = command.secret_name(), len = value.len(), "secret resolved");
        Ok(value)
    }
}

impl Default for Resolver<Usacloud> {
    fn default() -> Self {
        Self::new(Usacloud::new())
    }
}

/// Resolve secrets with `usacloud` from PATH.
///
/// # Example
///
/// ```no_run
/// let values = sakura_secret::lookup(["db-password"], None, Some("123456789012"))?;
/// println!("{}", values.values()[0].as_str());
/// # Ok::<(), sakura_secret::error::Error>(())
/// ```
pub fn lookup<I, S>(secret_names: I, zone: Option<&str>, vault_id: Option<&str>) -> Result<LookupResult>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut request = LookupRequest::new(secret_names);
    if let Some(zone) = zone {
        request = request.zone(zone);
    }
    if let Some(vault_id) = vault_id {
        request = request.vault_id(vault_id);
    }
    Resolver::default().lookup(&request)
}

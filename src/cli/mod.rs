//! Command-line interface.

pub mod completions;
pub mod get;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::core::broker::Usacloud;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::request::LookupRequest;
use crate::core::resolver::{LookupResult, Resolver};
use crate::error::Result;

/// sakura-secret - Fetch secrets from Sakura Cloud Secret Manager.
#[derive(Parser)]
#[command(
    name = "sakura-secret",
    about = "Fetch secrets from Sakura Cloud Secret Manager via usacloud",
    version
)]
pub struct Cli {
    /// Enable debug logging (shows the usacloud command line)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Zone the vault lives in [default: tk1a]
    #[arg(long, global = true, env = constants::ZONE_ENV)]
    pub zone: Option<String>,

    /// Secret Manager vault id
    #[arg(long, global = true, env = constants::VAULT_ID_ENV)]
    pub vault_id: Option<String>,

    /// usacloud binary name or path [default: usacloud]
    #[arg(long, global = true, env = constants::BROKER_ENV)]
    pub broker: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print secret values, one per line in the order given
    Get {
        /// Secret names
        #[arg(required = true)]
        names: Vec<String>,
        /// Output as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Run a command with secrets injected as env vars
    Run {
        /// VAR=secret-name, or secret-name to derive VAR from the name
        #[arg(short, long = "secret", value_name = "BINDING", required = true)]
        secrets: Vec<String>,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Vault coordinates after layering flags, env and config file.
#[derive(Debug)]
pub struct Options {
    config: Config,
}

impl Options {
    /// Combine command-line values with `.sakura-secret.toml`.
    pub fn load(zone: Option<String>, vault_id: Option<String>, broker: Option<String>) -> Result<Self> {
        let config = Config::load()?.merge(zone, vault_id, broker);
        debug!(?config, "effective options");
        Ok(Self { config })
    }

    /// Build a request for `names` against the configured vault.
    pub fn request<I, S>(&self, names: I) -> LookupRequest
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut request = LookupRequest::new(names);
        if let Some(zone) = &self.config.zone {
            request = request.zone(zone.as_str());
        }
        if let Some(vault_id) = &self.config.vault_id {
            request = request.vault_id(vault_id.as_str());
        }
        request
    }

    /// Resolve `names` through the configured broker.
    pub fn lookup<I, S>(&self, names: I) -> Result<LookupResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let resolver = Resolver::new(Usacloud::with_program(self.config.broker_program()));
        resolver.lookup(&self.request(names))
    }
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    match cli.command {
        Get { names, json } => {
            let options = Options::load(cli.zone, cli.vault_id, cli.broker)?;
            get::execute(&options, &names, json)
        }
        Run { secrets, command } => {
            let options = Options::load(cli.zone, cli.vault_id, cli.broker)?;
            run::execute(&options, &secrets, &command)
        }
        Completions { shell } => completions::execute(shell),
    }
}

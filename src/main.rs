//! sakura-secret - Fetch secrets from Sakura Cloud Secret Manager.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sakura_secret::cli::output;
use sakura_secret::cli::{execute, Cli};
use sakura_secret::core::constants::LOG_ENV;
use sakura_secret::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sakura_secret=debug")
        } else {
            EnvFilter::new("sakura_secret=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::BrokerNotFound { .. } => {
                Some("install usacloud (https://docs.usacloud.jp/) or pass --broker <path>")
            }
            Error::Config(ConfigError::MissingVaultId) => {
                Some("pass --vault-id, set SAKURA_SECRET_VAULT_ID, or add vault_id to .sakura-secret.toml")
            }
            Error::BrokerExecution { .. } => Some("check usacloud credentials: usacloud config"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

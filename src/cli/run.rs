//! Run command.
//!
//! Executes a command with resolved secrets injected as environment variables.

use tracing::debug;

use crate::cli::Options;
use crate::core::binding::Binding;
use crate::error::{ConfigError, Result};

/// Run a command with secrets injected as environment variables.
pub fn execute(options: &Options, bindings: &[String], command: &[String]) -> Result<()> {
    let exit_code = run_with_secrets(options, bindings, command)?;
    std::process::exit(exit_code);
}

/// Resolve the bindings as one batch, then run the command.
fn run_with_secrets(options: &Options, bindings: &[String], command: &[String]) -> Result<i32> {
    let (program, args) = command.split_first().ok_or(ConfigError::NoCommand)?;

    let bindings = bindings
        .iter()
        .map(|b| b.parse::<Binding>())
        .collect::<Result<Vec<_>>>()?;

    let values = options.lookup(bindings.iter().map(Binding::secret))?;

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);
    for (binding, value) in bindings.iter().zip(values.iter()) {
        debug!(var = binding.var(), secret = binding.secret(), "injecting secret");
        cmd.env(binding.var(), value);
    }

    let status = cmd.status()?;
    // Wipes the resolver's copies only; `cmd` keeps its own environment
    drop(values);
    Ok(status.code().unwrap_or(1))
}

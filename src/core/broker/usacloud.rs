//! usacloud broker.
//!
//! Calls the Secret Manager unveil endpoint through `usacloud rest request`.
//!
//! ## Requirements
//!
//! - `usacloud` CLI must be installed
//! - It must be authenticated with access to the vault (`usacloud config`)

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, trace};

use super::{Broker, BrokerCommand};
use crate::core::constants::DEFAULT_BROKER;
use crate::error::{Error, Result};

/// Broker backed by the `usacloud` CLI.
#[derive(Debug, Clone)]
pub struct Usacloud {
    /// Program name looked up on PATH, or a path to the binary.
    program: OsString,
}

impl Usacloud {
    /// Use `usacloud` from PATH.
    pub fn new() -> Self {
        Self::with_program(DEFAULT_BROKER)
    }

    /// Use a specific program name or path.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve the program to the path that will be launched.
    ///
    /// Bare names are searched on PATH. Anything with a path separator is
    /// used as given and classified when the launch fails.
    fn locate(&self, command: &BrokerCommand) -> Result<PathBuf> {
        let program = Path::new(&self.program);
        if program.components().count() > 1 {
            return Ok(program.to_path_buf());
        }
        which::which(&self.program).map_err(|e| {
            debug!(program = ?self.program, error = %e, "broker lookup failed");
            self.not_found(command)
        })
    }

    /// Classify a launch failure.
    ///
    /// Only a missing program is `BrokerNotFound`. A program that exists but
    /// cannot run (no exec bit, a directory, a missing interpreter) is
    /// `BrokerExecution`.
    fn launch_error(&self, program: &Path, command: &BrokerCommand, e: std::io::Error) -> Error {
        if e.kind() == ErrorKind::NotFound && !program.exists() {
            return self.not_found(command);
        }
        Error::BrokerExecution {
            target: command.target(),
            message: format!("failed to run {}: {}", self.name(), e),
        }
    }

    fn not_found(&self, command: &BrokerCommand) -> Error {
        Error::BrokerNotFound {
            broker: self.name().to_string(),
            target: command.target(),
        }
    }
}

impl Default for Usacloud {
    fn default() -> Self {
        Self::new()
    }
}

impl Broker for Usacloud {
    fn name(&self) -> &str {
        self.program.to_str().unwrap_or(DEFAULT_BROKER)
    }

    fn invoke(&self, command: &BrokerCommand) -> Result<String> {
        let program = self.locate(command)?;

        debug!("Running command: {} {}", program.display(), command);

        let output = Command::new(&program)
            .args(command.args())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.launch_error(&program, command, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                format!("{} exited with {}", self.name(), output.status)
            } else {
                stderr.to_string()
            };
            return Err(Error::BrokerExecution {
                target: command.target(),
                message,
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| Error::Unexpected {
            target: command.target(),
            message: format!("{} output is not valid UTF-8: {}", self.name(), e),
        })?;

        trace!(stdout_len = stdout.len(), "broker finished");
        Ok(stdout)
    }
}

//! Get command.
//!
//! Prints resolved secret values for scripting.

use std::io::Write;
use tracing::info;

use crate::cli::Options;
use crate::error::Result;

/// Resolve `names` and print the values in the same order.
pub fn execute(options: &Options, names: &[String], json: bool) -> Result<()> {
    info!("Fetching {} secret(s)", names.len());
    let result = options.lookup(names.iter().map(String::as_str))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        let values: Vec<&str> = result.iter().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&values)?)?;
    } else {
        // Plain output for scripting - no decoration
        for value in result.iter() {
            writeln!(out, "{}", value)?;
        }
    }
    Ok(())
}

//! Test support utilities for sakura-secret integration tests.
//!
//! Provides an isolated working directory and a fake `usacloud` whose
//! responses are files in a per-test temp directory.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// No process-global state is mutated. Child processes use
/// `.current_dir()` and explicit env vars so tests can run in parallel.
pub struct Test {
    /// Working directory the CLI runs in
    pub dir: TempDir,
    /// Canned broker responses and the call log
    pub broker: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let broker = TempDir::new().expect("failed to create broker dir");
        Self { dir, broker }
    }

    /// Create a test environment whose broker knows these secrets.
    pub fn with_secrets(secrets: &[(&str, &str)]) -> Self {
        let t = Self::new();
        for (name, value) in secrets {
            t.value(name, value);
        }
        t
    }

    /// Make the broker print `json` for `name`.
    pub fn respond(&self, name: &str, json: &str) {
        std::fs::write(self.broker.path().join(format!("{}.json", name)), json)
            .expect("failed to write broker response");
    }

    /// Make the broker unveil `value` for `name`.
    pub fn value(&self, name: &str, value: &str) {
        let json = serde_json::json!({ "is_ok": true, "Secret": { "Name": name, "Value": value } });
        self.respond(name, &json.to_string());
    }

    /// Make the broker exit 1 with `stderr` for `name`.
    pub fn fail(&self, name: &str, stderr: &str) {
        std::fs::write(self.broker.path().join(format!("{}.err", name)), stderr)
            .expect("failed to write broker error");
    }

    /// Write `.sakura-secret.toml` into the working directory.
    pub fn config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(".sakura-secret.toml"), contents)
            .expect("failed to write config");
    }

    /// Broker invocations so far, as `(zone, path, name)`.
    pub fn calls(&self) -> Vec<(String, String, String)> {
        let log = self.broker.path().join("calls.log");
        let Ok(contents) = std::fs::read_to_string(log) else {
            return Vec::new();
        };
        contents
            .lines()
            .map(|line| {
                let mut parts = line.splitn(3, ' ');
                let zone = parts.next().unwrap_or_default().to_string();
                let path = parts.next().unwrap_or_default().to_string();
                let name = parts.next().unwrap_or_default().to_string();
                (zone, path, name)
            })
            .collect()
    }

    /// Secret names the broker was asked for, in order.
    pub fn called_names(&self) -> Vec<String> {
        self.calls().into_iter().map(|(_, _, name)| name).collect()
    }
}

/// Path to the fake `usacloud` script.
///
/// The fixture is committed executable. If a checkout lost the mode bits
/// they are restored once; failing to do so aborts the test.
pub fn fake_broker() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/fake-usacloud.sh");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path)
            .expect("missing tests/fixtures/fake-usacloud.sh")
            .permissions()
            .mode();
        if mode & 0o111 != 0o111 {
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("failed to make fake-usacloud.sh executable");
        }
    }
    path
}

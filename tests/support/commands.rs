//! Command helper methods for Test.

use super::{fake_broker, Test, VAULT_ID};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a sakura-secret command wired to the fake broker.
    ///
    /// Returns a Command configured with:
    /// - the working directory set to the test directory
    /// - SAKURA_SECRET_BROKER pointing at the fake usacloud script
    /// - inherited SAKURA_SECRET_* settings removed
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("sakura-secret").expect("failed to find sakura-secret binary");
        cmd.current_dir(self.dir.path());
        cmd.env("SAKURA_SECRET_BROKER", fake_broker());
        cmd.env("FAKE_USACLOUD_DIR", self.broker.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("SAKURA_SECRET_ZONE");
        cmd.env_remove("SAKURA_SECRET_VAULT_ID");
        cmd.env_remove("SAKURA_SECRET_LOG");
        cmd
    }

    /// Shortcut for `sakura-secret get --vault-id VAULT_ID <names>`.
    pub fn get(&self, names: &[&str]) -> Output {
        self.cmd()
            .args(["get", "--vault-id", VAULT_ID])
            .args(names)
            .output()
            .expect("failed to run sakura-secret get")
    }

    /// Shortcut for `sakura-secret get --json`.
    pub fn get_json(&self, names: &[&str]) -> Output {
        self.cmd()
            .args(["get", "--json", "--vault-id", VAULT_ID])
            .args(names)
            .output()
            .expect("failed to run sakura-secret get --json")
    }

    /// Shortcut for `sakura-secret run -s <binding>... -- <command>`.
    pub fn run(&self, bindings: &[&str], command: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.args(["run", "--vault-id", VAULT_ID]);
        for binding in bindings {
            cmd.args(["-s", binding]);
        }
        cmd.arg("--")
            .args(command)
            .output()
            .expect("failed to run sakura-secret run")
    }
}

//! Test support utilities for stagekey integration tests.
//!
//! Provides an isolated working directory, a preconfigured CLI command and
//! an in-memory secret store that counts its calls.

#![allow(dead_code)]

pub mod assertions;
pub mod skip;
pub mod store;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use store::*;

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables the binary reads; cleared so the host shell
/// cannot leak into a test.
const ENV_VARS: &[&str] = &[
    "NODE_ENV",
    "DATABASE_URL",
    "DB_SECRET_ARN",
    "AWS_REGION",
    "STAGEKEY_FETCH_TIMEOUT",
    "STAGEKEY_LOG",
    "STAGEKEY_LOG_FORMAT",
];

/// Test environment with an isolated temp directory.
///
/// Child processes use `.current_dir()`, so tests can run in parallel.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with a `cdk.json` holding `context`.
    pub fn with_cdk_json(context: &str) -> Self {
        let t = Self::new();
        t.write("cdk.json", &format!(r#"{{"app": "true", "context": {}}}"#, context));
        t
    }

    /// Write a file into the test directory.
    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.dir.path().join(name), contents).expect("failed to write file");
    }

    /// A stagekey command running in the test directory with a clean env.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("stagekey").expect("failed to find stagekey binary");
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }
}

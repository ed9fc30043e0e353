//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios. Fake tools live in a
/// separate `bin` directory that becomes the whole PATH of `rsw`.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Directory holding fake tool scripts
    pub bin: TempDir,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            bin: TempDir::new().expect("Failed to create bin directory"),
        }
    }

    /// Get the path to the test project directory
    ///
    /// Canonicalized, since `rsw` sees the real working directory.
    pub fn path(&self) -> PathBuf {
        self.dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize project directory")
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Write `.rswrc.json`
    pub fn write_config(&self, json: &str) {
        self.create_file(".rswrc.json", json);
    }

    /// File every fake tool appends its invocation to
    pub fn log_path(&self) -> PathBuf {
        self.bin.path().join("calls.log")
    }

    /// Recorded invocations as `tool|cwd|args` lines
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .map(|s| s.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    /// Install a fake tool that records its call, prints to stdout like a
    /// real tool, and exits 0, or 1 when its arguments contain `fail_on`
    #[cfg(unix)]
    pub fn install_tool(&self, name: &str, fail_on: Option<&str>) {
        use std::os::unix::fs::PermissionsExt;

        let fail = fail_on
            .map(|needle| format!("case \" $* \" in *\" {needle} \"*) exit 1 ;; esac\n"))
            .unwrap_or_default();
        let script = format!(
            "#!/bin/sh\necho \"{name}|$(pwd -P)|$*\" >> \"$RSW_TEST_LOG\"\necho \"{name}: done\"\n{fail}exit 0\n"
        );

        let path = self.bin.path().join(name);
        std::fs::write(&path, script).expect("Failed to write fake tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake tool executable");
    }

    /// Install fake `wasm-pack` and `npm` that always succeed
    #[cfg(unix)]
    pub fn install_tools(&self) {
        self.install_tool("wasm-pack", None);
        self.install_tool("npm", None);
    }

    /// Run rsw in the project with only the fake tools on PATH
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_rsw"))
            .current_dir(self.dir.path())
            .args(args)
            .env("PATH", self.bin.path())
            .env("RSW_TEST_LOG", self.log_path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute rsw")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample config with one plain and one scoped crate
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"{
  "root": ".",
  "crates": ["foo", "@bar/baz"]
}"#;

// Shared test helpers for integration tests.
// Used by cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub const CONFIG_FILE: &str = ".pre-commit-config.yaml";

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_pre-commit-init"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// A temp project with a `.git` directory and a nested `src/deep` subdirectory.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp project");
        std::fs::create_dir(dir.path().join(".git")).expect("failed to create .git");
        std::fs::create_dir_all(dir.path().join("src").join("deep"))
            .expect("failed to create subdirectory");
        Project { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn subdir(&self) -> PathBuf {
        self.root().join("src").join("deep")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join(CONFIG_FILE)
    }

    pub fn read_config(&self) -> Option<String> {
        std::fs::read_to_string(self.config_path()).ok()
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("failed to seed config");
    }
}

/// Runs the binary in `cwd` with the given args.
/// Returns (stdout, stderr, exit_code).
pub fn run_in(cwd: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Parses the generated YAML into a generic value.
pub fn parse_config(content: &str) -> serde_yaml::Value {
    serde_yaml::from_str(content).expect("generated config should be valid YAML")
}

/// Hook ids in document order.
pub fn hook_ids(config: &serde_yaml::Value) -> Vec<String> {
    hooks(config)
        .iter()
        .map(|h| h["id"].as_str().expect("hook id must be a string").to_string())
        .collect()
}

pub fn hooks(config: &serde_yaml::Value) -> Vec<serde_yaml::Value> {
    config["repos"]
        .as_sequence()
        .expect("repos must be a list")
        .iter()
        .flat_map(|repo| {
            repo["hooks"]
                .as_sequence()
                .expect("hooks must be a list")
                .clone()
        })
        .collect()
}

pub fn string_list(value: &serde_yaml::Value) -> Vec<String> {
    value
        .as_sequence()
        .map(|seq| {
            seq.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".seedlog");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("seed_logs")
    }

    /// Run seedlog with this fixture's data directory
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("seedlog").expect("Failed to find seedlog binary");
        cmd.env_remove("SEEDLOG_PATH");
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd
    }

    /// Record one seed into a named session
    pub fn record(&self, seed: u64, label: &str, session: &str) {
        self.command()
            .arg("record")
            .arg("--seed")
            .arg(seed.to_string())
            .arg("--label")
            .arg(label)
            .arg("--session")
            .arg(session)
            .assert()
            .success();
    }

    /// Extract the artifact path from "Exported N records to <path>" output
    pub fn exported_path(stdout: &[u8]) -> PathBuf {
        let text = String::from_utf8_lossy(stdout);
        let (_, path) = text
            .trim()
            .rsplit_once(" to ")
            .expect("export output should name the artifact path");
        PathBuf::from(path)
    }
}

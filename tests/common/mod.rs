//! Shared testing utilities for ovite CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory the CLI is invoked from.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `ovite` binary in the work directory.
    ///
    /// Stdin is closed, so no prompt can block, and log filtering is pinned.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ovite").expect("Failed to locate ovite binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env("OVITE_LOG", "warn")
            .env("GIT_TERMINAL_PROMPT", "0")
            .write_stdin("");
        cmd
    }

    /// Create a directory under the work directory, with one file inside.
    pub fn existing_project(&self, name: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::create_dir_all(&path).expect("Failed to create project directory");
        fs::write(path.join("keep.txt"), "mine").expect("Failed to write marker file");
        path
    }

    /// Write a `.ovite.toml` settings file into the work directory.
    pub fn write_settings(&self, content: &str) {
        fs::write(self.work_dir.join(".ovite.toml"), content).expect("Failed to write settings");
    }

    /// Names of the entries directly under the work directory.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.work_dir)
            .expect("Failed to read work directory")
            .map(|entry| {
                entry.expect("Failed to read entry").file_name().to_string_lossy().into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

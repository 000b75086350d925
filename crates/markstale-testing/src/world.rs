//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated mirror tree (`<temp>/packages/<project>/...`)
//! - Placing marker and artifact files with a chosen modification time
//! - Executing the CLI from inside the tree

use anyhow::Result;
use assert_cmd::Command;
use filetime::FileTime;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use markstale_testing::world::{DAY, TestWorld};
///
/// let world = TestWorld::new()
///     .with_marker("requests", "requests-2.31.0.tar.gz.hash", 10 * DAY)
///     .with_project("empty");
///
/// let result = world.run(&["5"]).unwrap();
/// assert!(result.success());
/// assert_eq!(result.stale_lines(), vec!["./requests"]);
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    root: PathBuf,
    cwd: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated mirror tree. Commands run from its root.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("packages");
        std::fs::create_dir_all(&root).expect("Failed to create mirror root");

        Self {
            cwd: root.clone(),
            temp_dir,
            root,
        }
    }

    /// The mirror root (`<temp>/packages`).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Change the working directory (relative to the temp root).
    pub fn enter_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        let new_cwd = if path.as_ref().is_absolute() {
            path.as_ref().to_path_buf()
        } else {
            self.temp_dir.path().join(path)
        };

        std::fs::create_dir_all(&new_cwd).expect("Failed to create directory");
        self.cwd = new_cwd;
        self
    }

    /// Create an empty project directory.
    pub fn with_project(self, project: &str) -> Self {
        std::fs::create_dir_all(self.root.join(project)).expect("Failed to create project dir");
        self
    }

    /// Place a marker in `project` last modified `age` ago.
    pub fn with_marker(self, project: &str, file_name: &str, age: Duration) -> Self {
        self.with_marker_at(project, file_name, SystemTime::now() - age)
    }

    /// Place a marker in `project` with an exact modification time.
    pub fn with_marker_at(self, project: &str, file_name: &str, modified: SystemTime) -> Self {
        let path = self.root.join(project).join(file_name);
        write_with_mtime(&path, "sha256=0000", modified).expect("Failed to write marker");
        self
    }

    /// Place any file, relative to the mirror root, last modified `age` ago.
    pub fn with_file(self, relative: &str, age: Duration) -> Self {
        let path = self.root.join(relative);
        write_with_mtime(&path, "", SystemTime::now() - age).expect("Failed to write file");
        self
    }

    /// Execute the `markstale` binary with `args` from the current working directory.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("markstale")
            .map_err(|e| anyhow::anyhow!("Failed to find markstale binary: {}", e))?;

        cmd.current_dir(&self.cwd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

fn write_with_mtime(path: &Path, contents: &str, modified: SystemTime) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    filetime::set_file_mtime(path, FileTime::from_system_time(modified))?;
    Ok(())
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Plain-format stdout without the leading threshold line.
    pub fn stale_lines(&self) -> Vec<&str> {
        self.stdout.lines().skip(1).collect()
    }
}

//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated workspace with a projects root
//! - Placing project directories, metadata and content modules
//! - Pinning directory modification times
//! - Executing CLI commands against the workspace

use anyhow::Result;
use assert_cmd::Command;
use filetime::FileTime;
use protoyard_core::INDEX_FILE;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use protoyard_testing::TestWorld;
///
/// let world = TestWorld::new()
///     .with_project("alpha")
///     .with_modified("alpha", 1_700_000_000);
///
/// let result = world.run(&["aggregate"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    projects_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated workspace. The projects root is not created
    /// until a project is added.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let projects_dir = temp_dir.path().join("projects");

        Self {
            temp_dir,
            projects_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Workspace root, passed to the CLI as `--root`.
    pub fn workspace_root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.projects_dir.join(INDEX_FILE)
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Create the projects root without any projects in it.
    pub fn with_projects_root(self) -> Self {
        std::fs::create_dir_all(&self.projects_dir).expect("Failed to create projects dir");
        self
    }

    /// Add a project with valid metadata whose id matches its directory.
    pub fn with_project(self, id: &str) -> Self {
        self.with_metadata(id, fixtures::valid_metadata(id))
    }

    /// Add a project directory with the given metadata document.
    pub fn with_metadata(self, dir_name: &str, metadata: Value) -> Self {
        fixtures::write_metadata(&self.projects_dir, dir_name, &metadata)
            .expect("Failed to write metadata");
        self
    }

    /// Add a project directory whose `metadata.json` holds `raw` verbatim.
    pub fn with_raw_metadata(self, dir_name: &str, raw: &str) -> Self {
        fixtures::write_raw_metadata(&self.projects_dir, dir_name, raw)
            .expect("Failed to write metadata");
        self
    }

    /// Add a directory with no metadata at all.
    pub fn with_dir(self, dir_name: &str) -> Self {
        std::fs::create_dir_all(self.projects_dir.join(dir_name))
            .expect("Failed to create project dir");
        self
    }

    /// Add a `page.html` content module to a project.
    pub fn with_page(self, dir_name: &str, html: &str) -> Self {
        fixtures::write_page(&self.projects_dir, dir_name, html).expect("Failed to write page");
        self
    }

    /// Pin a project directory's mtime. Call after all files in the
    /// directory have been written.
    pub fn with_modified(self, dir_name: &str, unix_seconds: i64) -> Self {
        self.set_modified(dir_name, unix_seconds);
        self
    }

    pub fn set_modified(&self, dir_name: &str, unix_seconds: i64) {
        let time = FileTime::from_unix_time(unix_seconds, 0);
        filetime::set_file_mtime(self.projects_dir.join(dir_name), time)
            .expect("Failed to set directory mtime");
    }

    /// Parse the aggregated index as written on disk.
    pub fn read_index(&self) -> Result<Value> {
        let content = std::fs::read_to_string(self.index_path())?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("protoyard")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--root").arg(self.workspace_root());

        cmd.current_dir(self.workspace_root());
        cmd.env_remove("PROTOYARD_ROOT");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("protoyard")
            .map_err(|e| anyhow::anyhow!("Failed to find protoyard binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
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
}

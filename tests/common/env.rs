//! Test environment builder for isolated sshw runs.
//!
//! Every run gets its own home (through `SSHW_TEST_HOME`, which works on
//! platforms where `dirs::home_dir()` ignores `HOME`), working directory and
//! settings directory. stdin is always null, so the picker is never reachable
//! and a test can never hang waiting for keys.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Variables read by sshw that must not leak in from the developer's shell.
const SCRUBBED_VARS: &[&str] = &[
    "SSHW_CONFIG",
    "SSHW_PAGE_SIZE",
    "SSHW_LABEL",
    "SSHW_COLOR",
];

/// Result of running the sshw binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated directories plus helpers to run the CLI inside them.
pub struct TestEnv {
    pub home_dir: TempDir,
    pub work_dir: TempDir,
    pub config_dir: TempDir,
    extra_path: Option<PathBuf>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: TempDir::new().expect("create home dir"),
            work_dir: TempDir::new().expect("create work dir"),
            config_dir: TempDir::new().expect("create config dir"),
            extra_path: None,
        }
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    pub fn write_home_file(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.home_path(relative), content)
    }

    pub fn write_work_file(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.work_dir.path().join(relative), content)
    }

    /// Write `<config_dir>/sshw/config.toml`.
    pub fn write_settings(&self, content: &str) -> PathBuf {
        write_file(&self.config_dir.path().join("sshw/config.toml"), content)
    }

    /// Put `dir` in front of `PATH` for every run, e.g. to shadow `ssh`.
    pub fn prepend_path(&mut self, dir: &Path) {
        self.extra_path = Some(dir.to_path_buf());
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sshw"));
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("SSHW_TEST_HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.config_dir.path())
            .env("NO_COLOR", "1")
            .stdin(Stdio::null());

        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        if let Some(dir) = &self.extra_path {
            let path = std::env::var_os("PATH").unwrap_or_default();
            let mut dirs = vec![dir.clone()];
            dirs.extend(std::env::split_paths(&path));
            cmd.env("PATH", std::env::join_paths(dirs).expect("join PATH"));
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("Failed to execute sshw"))
    }
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
    path.to_path_buf()
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

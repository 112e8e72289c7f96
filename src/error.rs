//! Error types for sshw
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sshw operations
pub type SshwResult<T> = Result<T, SshwError>;

/// Main error type for sshw operations
#[derive(Error, Debug)]
pub enum SshwError {
    /// Switching the terminal into raw mode failed
    #[error("failed to take control of the terminal: {0}")]
    TerminalAcquire(#[source] std::io::Error),

    /// The picker was asked for without an interactive stdin
    #[error("stdin is not a terminal; the host picker needs an interactive terminal")]
    NotInteractive,

    /// Reading from the input device failed or the device was closed
    #[error("failed to read terminal input: {0}")]
    InputRead(#[source] std::io::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Host file or settings file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// No host file exists at any of the searched locations
    #[error("no host file found (searched: {})", display_paths(.searched))]
    ConfigNotFound { searched: Vec<PathBuf> },

    /// Setting value out of range
    #[error("invalid setting '{key}': {message}")]
    InvalidSetting { key: String, message: String },

    /// Home directory could not be resolved
    #[error("cannot determine home directory")]
    HomeNotFound,

    /// No public key to provision
    #[error("no public key found (searched: {})", display_paths(.searched))]
    NoPublicKey { searched: Vec<PathBuf> },

    /// External ssh invocation exited unsuccessfully
    #[error("'{command}' failed: {status}")]
    CommandFailed { command: String, status: String },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

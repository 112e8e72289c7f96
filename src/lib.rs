//! sshw - interactive SSH host picker
//!
//! Hosts are kept in a YAML tree of groups and leaves. sshw draws a
//! searchable, paginated list below the shell prompt, lets the operator
//! drill into groups, and hands the picked host to the system `ssh` client.

pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod ssh;
pub mod ui;

// Re-exports for convenience
pub use config::{ColorMode, Settings};
pub use domain::{find_alias, Node};
pub use error::{SshwError, SshwResult};

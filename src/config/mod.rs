//! Configuration
//!
//! Settings precedence:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SSHW_*)
//! 3. User settings (`<config_dir>/sshw/config.toml`)
//! 4. Built-in defaults (lowest priority)
//!
//! Hosts come from a YAML host file or, with `-s`, from `~/.ssh/config`.

mod hosts;
mod loader;
mod ssh_config;
mod types;

pub use hosts::{
    expand_keypaths, load_host_file, load_hosts, locate, parse_hosts, HostFile, SSHW_CONFIG_VAR,
};
pub use loader::{settings_path, with_env_overrides, ConfigWarning};
pub use ssh_config::{default_ssh_config_path, load_ssh_config, parse_ssh_config};
pub use types::{ColorMode, OutputSettings, PickerSettings, Settings, DEFAULT_LABEL};

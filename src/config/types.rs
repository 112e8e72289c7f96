//! Settings type definitions

use std::path::Path;

use serde::Deserialize;

use crate::error::SshwResult;
use crate::ui::picker::DEFAULT_PAGE_SIZE;

use super::loader::{self, ConfigWarning};

pub const DEFAULT_LABEL: &str = "select host";

/// Picker configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickerSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            label: default_label(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stderr is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    /// Resolve against what the terminal supports.
    pub fn enabled(self, terminal_supports_color: bool) -> bool {
        match self {
            Self::Auto => terminal_supports_color,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Settings file contents (`<config_dir>/sshw/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub picker: PickerSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

impl Settings {
    pub fn load_with_warnings(path: &Path) -> SshwResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the user settings file if present, then apply `SSHW_*` overrides.
    pub fn load_or_default() -> SshwResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default()
    }
}

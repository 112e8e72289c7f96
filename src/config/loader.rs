//! Settings loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SshwError, SshwResult};
use crate::ui::picker::MAX_PAGE_SIZE;

use super::types::{ColorMode, Settings};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    /// Build a warning for an unknown key path reported by `serde_ignored`.
    pub(crate) fn unknown_key(
        path: &str,
        file: &Path,
        content: &str,
        known: &[&str],
    ) -> Self {
        let key = path.split('.').next_back().unwrap_or(path).to_string();
        Self {
            line: find_line_number(content, &key),
            suggestion: suggest_key(&key, known),
            file: file.to_path_buf(),
            key,
        }
    }
}

const SETTINGS_KEYS: &[&str] = &["picker", "page_size", "label", "output", "color", "unicode"];

/// Load settings and collect unknown-key warnings.
pub fn load_with_warnings(path: &Path) -> SshwResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SshwError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|p| ConfigWarning::unknown_key(p, path, &content, SETTINGS_KEYS))
        .collect();

    Ok((settings, warnings))
}

/// Load the user settings file, or defaults when there is none.
///
/// Environment overrides are applied and the result validated.
pub fn load_or_default() -> SshwResult<(Settings, Vec<ConfigWarning>)> {
    let (settings, warnings) = match settings_path() {
        Some(path) if path.is_file() => load_with_warnings(&path)?,
        _ => (Settings::default(), Vec::new()),
    };

    let settings = with_env_overrides(settings, |key| std::env::var(key).ok())?;
    validate(&settings)?;
    Ok((settings, warnings))
}

/// `<config_dir>/sshw/config.toml`
///
/// `XDG_CONFIG_HOME` wins over the platform directory so tests can point
/// it at a temp dir on every platform.
pub fn settings_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("sshw").join("config.toml"))
}

/// Apply `SSHW_PAGE_SIZE`, `SSHW_LABEL` and `SSHW_COLOR`.
pub fn with_env_overrides(
    mut settings: Settings,
    get_env: impl Fn(&str) -> Option<String>,
) -> SshwResult<Settings> {
    if let Some(raw) = get_env("SSHW_PAGE_SIZE") {
        settings.picker.page_size =
            raw.trim()
                .parse()
                .map_err(|_| SshwError::InvalidSetting {
                    key: "SSHW_PAGE_SIZE".to_string(),
                    message: format!("expected a positive number, got '{}'", raw),
                })?;
    }

    if let Some(label) = get_env("SSHW_LABEL") {
        settings.picker.label = label;
    }

    if let Some(raw) = get_env("SSHW_COLOR") {
        settings.output.color =
            ColorMode::parse(&raw).ok_or_else(|| SshwError::InvalidSetting {
                key: "SSHW_COLOR".to_string(),
                message: format!("expected auto, always or never, got '{}'", raw),
            })?;
    }

    Ok(settings)
}

pub fn validate(settings: &Settings) -> SshwResult<()> {
    let page_size = settings.picker.page_size;
    if page_size == 0 {
        return Err(SshwError::InvalidSetting {
            key: "picker.page_size".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    if page_size > MAX_PAGE_SIZE {
        return Err(SshwError::InvalidSetting {
            key: "picker.page_size".to_string(),
            message: format!("must be at most {}, got {}", MAX_PAGE_SIZE, page_size),
        });
    }
    Ok(())
}

pub(crate) fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str, known: &[&str]) -> Option<String> {
    known
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

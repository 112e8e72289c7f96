//! Host file discovery and parsing.
//!
//! The host file is YAML: a sequence of nodes, each either a host or a
//! group with `children`.
//!
//! ```yaml
//! - name: prod
//!   children:
//!     - { name: web, host: 10.0.0.1, user: deploy }
//!     - { name: db, host: 10.0.0.2, port: 2222, keypath: ~/.ssh/db }
//! - name: bastion
//!   alias: jump
//!   host: jump.example.com
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Node;
use crate::error::{SshwError, SshwResult};
use crate::fs::{expand_home, sshw_home_dir};

use super::loader::ConfigWarning;

/// Environment variable naming the host file explicitly.
pub const SSHW_CONFIG_VAR: &str = "SSHW_CONFIG";

/// File names tried in the home directory, then in the working directory.
const DEFAULT_NAMES: &[&str] = &[".sshw", ".sshw.yml", ".sshw.yaml"];

const NODE_KEYS: &[&str] = &["name", "alias", "user", "host", "port", "keypath", "children"];

/// A parsed host file.
#[derive(Debug, Clone)]
pub struct HostFile {
    pub path: PathBuf,
    pub nodes: Vec<Node>,
    pub warnings: Vec<ConfigWarning>,
}

/// Locate and load the host file.
///
/// `explicit` (from `--config`) wins, then `SSHW_CONFIG`, then the default
/// locations in the home and working directories.
pub fn load_hosts(explicit: Option<&Path>) -> SshwResult<HostFile> {
    let env_path = std::env::var_os(SSHW_CONFIG_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let cwd = std::env::current_dir()?;
    let path = locate(explicit, env_path, sshw_home_dir().as_deref(), &cwd)?;
    load_host_file(&path)
}

/// First existing host file among the candidates.
pub fn locate(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    home: Option<&Path>,
    cwd: &Path,
) -> SshwResult<PathBuf> {
    let searched = candidate_paths(explicit, env_path, home, cwd);
    searched
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .ok_or(SshwError::ConfigNotFound { searched })
}

fn candidate_paths(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    home: Option<&Path>,
    cwd: &Path,
) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }
    if let Some(path) = env_path {
        return vec![path];
    }

    let dirs = home.into_iter().chain(std::iter::once(cwd));
    dirs.flat_map(|dir| DEFAULT_NAMES.iter().map(move |name| dir.join(name)))
        .collect()
}

pub fn load_host_file(path: &Path) -> SshwResult<HostFile> {
    let content = fs::read_to_string(path).map_err(|e| SshwError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let (mut nodes, warnings) = parse_hosts(&content, path)?;
    expand_keypaths(&mut nodes)?;
    Ok(HostFile {
        path: path.to_path_buf(),
        nodes,
        warnings,
    })
}

/// Parse host file text. `path` is only used for messages.
pub fn parse_hosts(content: &str, path: &Path) -> SshwResult<(Vec<Node>, Vec<ConfigWarning>)> {
    if content.trim().is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);
    let nodes: Vec<Node> = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SshwError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|p| ConfigWarning::unknown_key(p, path, content, NODE_KEYS))
        .collect();

    Ok((nodes, warnings))
}

/// Replace a leading `~` in every `keypath` of the tree.
pub fn expand_keypaths(nodes: &mut [Node]) -> SshwResult<()> {
    for node in nodes {
        if let Some(keypath) = node.keypath.as_mut() {
            *keypath = expand_home(keypath)?.to_string_lossy().into_owned();
        }
        expand_keypaths(&mut node.children)?;
    }
    Ok(())
}

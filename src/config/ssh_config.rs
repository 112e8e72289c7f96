//! Import hosts from an OpenSSH client config (`~/.ssh/config`).
//!
//! Only the keywords sshw can act on are read: `Host`, `HostName`, `User`,
//! `Port` and `IdentityFile`. Wildcard patterns and `Match` blocks are
//! skipped. As in `ssh`, the first value seen for a host wins.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Node;
use crate::error::{SshwError, SshwResult};
use crate::fs::sshw_home_dir;

use super::hosts::expand_keypaths;

/// `~/.ssh/config`
pub fn default_ssh_config_path() -> SshwResult<PathBuf> {
    let home = sshw_home_dir().ok_or(SshwError::HomeNotFound)?;
    Ok(home.join(".ssh").join("config"))
}

pub fn load_ssh_config(path: &Path) -> SshwResult<Vec<Node>> {
    let content = fs::read_to_string(path).map_err(|e| SshwError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut nodes = parse_ssh_config(&content);
    expand_keypaths(&mut nodes)?;
    Ok(nodes)
}

/// Turn every concrete `Host` pattern into a leaf node.
pub fn parse_ssh_config(content: &str) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::new();
    // Indices into `nodes` the current block applies to.
    let mut block: Vec<usize> = Vec::new();

    for line in content.lines() {
        let Some((keyword, value)) = split_line(line) else {
            continue;
        };

        match keyword.to_ascii_lowercase().as_str() {
            "host" => {
                block = value
                    .split_whitespace()
                    .map(unquote)
                    .filter(|p| is_concrete(p))
                    .map(|pattern| match nodes.iter().position(|n| n.name == pattern) {
                        Some(i) => i,
                        None => {
                            nodes.push(Node::new(pattern));
                            nodes.len() - 1
                        }
                    })
                    .collect();
            }
            "match" => block.clear(),
            "hostname" => apply(&mut nodes, &block, |n| &mut n.host, value),
            "user" => apply(&mut nodes, &block, |n| &mut n.user, value),
            "identityfile" => apply(&mut nodes, &block, |n| &mut n.keypath, value),
            "port" => {
                if let Ok(port) = unquote(value).parse::<u16>() {
                    for &i in &block {
                        nodes[i].port.get_or_insert(port);
                    }
                }
            }
            _ => {}
        }
    }

    for node in &mut nodes {
        if node.host.is_none() {
            node.host = Some(node.name.clone());
        }
    }
    nodes
}

/// Split `Keyword value`, `Keyword=value` or `Keyword = value`.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let end = line
        .find(|c: char| c.is_whitespace() || c == '=')
        .unwrap_or(line.len());
    let (keyword, rest) = line.split_at(end);
    let value = rest.trim_start();
    let value = value.strip_prefix('=').unwrap_or(value).trim();
    Some((keyword, value))
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

fn is_concrete(pattern: &str) -> bool {
    !pattern.is_empty() && !pattern.starts_with('!') && !pattern.contains(['*', '?'])
}

fn apply(
    nodes: &mut [Node],
    block: &[usize],
    field: impl Fn(&mut Node) -> &mut Option<String>,
    value: &str,
) {
    let value = unquote(value);
    if value.is_empty() {
        return;
    }
    for &i in block {
        field(&mut nodes[i]).get_or_insert_with(|| value.to_string());
    }
}

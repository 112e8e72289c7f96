//! Home directory resolution and tilde expansion.
//!
//! `dirs::home_dir()` uses system APIs on some platforms, so setting `HOME`
//! in tests has no effect there. [`sshw_home_dir`] checks `SSHW_TEST_HOME`
//! first and falls back to `dirs::home_dir()`.

use std::path::PathBuf;

use crate::error::{SshwError, SshwResult};

/// Environment variable for test isolation of the home directory.
pub const SSHW_TEST_HOME_VAR: &str = "SSHW_TEST_HOME";

/// Home directory used for host files, ssh config and public keys.
pub fn sshw_home_dir() -> Option<PathBuf> {
    std::env::var(SSHW_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Expand a leading `~` to the home directory.
///
/// Only `~` on its own or followed by a path separator is expanded;
/// `~user/...` and every other path are returned unchanged.
pub fn expand_home(path: &str) -> SshwResult<PathBuf> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };
    if !rest.is_empty() && !rest.starts_with('/') && !rest.starts_with('\\') {
        return Ok(PathBuf::from(path));
    }
    let home = sshw_home_dir().ok_or(SshwError::HomeNotFound)?;
    let rest = rest.trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

//! Handing a picked host to the system `ssh` client.
//!
//! sshw never speaks the SSH protocol itself. Login runs `ssh` with the
//! terminal inherited and reports its exit code.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::domain::Node;
use crate::error::{SshwError, SshwResult};

/// Public keys tried by `--copy-id`, in order, relative to the home directory.
pub const PUBLIC_KEY_CANDIDATES: &[&str] = &[".ssh/id_rsa.pub", ".ssh/id_ed25519.pub"];

/// Remote command appending stdin to the authorized keys file.
pub const AUTHORIZED_KEYS_SCRIPT: &str =
    "umask 077; mkdir -p ~/.ssh && cat >> ~/.ssh/authorized_keys";

/// `user@host`, or just `host` without a user.
///
/// A node without `host` is addressed by its name, which lets `ssh` resolve
/// it through its own config.
pub fn destination(node: &Node) -> String {
    let host = node.host().unwrap_or(&node.name);
    match node.user() {
        Some(user) => format!("{}@{}", user, host),
        None => host.to_string(),
    }
}

/// `user@host` for messages; the user defaults to `root`.
pub fn display_target(node: &Node) -> String {
    format!(
        "{}@{}",
        node.user().unwrap_or("root"),
        node.host().unwrap_or(&node.name)
    )
}

/// `[-p port] [-i keypath] destination`
pub fn login_args(node: &Node) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(port) = node.port {
        args.push("-p".to_string());
        args.push(port.to_string());
    }
    if let Some(keypath) = node.keypath.as_deref().filter(|k| !k.is_empty()) {
        args.push("-i".to_string());
        args.push(keypath.to_string());
    }
    args.push(destination(node));
    args
}

pub fn copy_id_args(node: &Node) -> Vec<String> {
    let mut args = login_args(node);
    args.push(AUTHORIZED_KEYS_SCRIPT.to_string());
    args
}

/// Log in to `node`, returning the exit code of `ssh`.
pub fn login(node: &Node) -> SshwResult<i32> {
    let status = Command::new("ssh")
        .args(login_args(node))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;
    Ok(exit_code(status))
}

/// Append `public_key` to the remote `~/.ssh/authorized_keys`.
pub fn copy_id(node: &Node, public_key: &[u8]) -> SshwResult<()> {
    let mut child = Command::new("ssh")
        .args(copy_id_args(node))
        .stdin(Stdio::piped())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?;

    // The child is reaped even when it closes stdin early.
    let written = match child.stdin.take() {
        Some(stdin) => write_key(stdin, public_key),
        None => Ok(()),
    };
    let status = child.wait()?;
    check_copy_id(node, status, written)
}

/// Send the key, newline-terminated, and close the pipe.
fn write_key(mut stdin: impl Write, public_key: &[u8]) -> std::io::Result<()> {
    stdin.write_all(public_key)?;
    if !public_key.ends_with(b"\n") {
        stdin.write_all(b"\n")?;
    }
    stdin.flush()
}

/// A failed `ssh` explains a broken pipe, so its status is reported first.
fn check_copy_id(
    node: &Node,
    status: ExitStatus,
    written: std::io::Result<()>,
) -> SshwResult<()> {
    if !status.success() {
        return Err(SshwError::CommandFailed {
            command: format!("ssh {}", destination(node)),
            status: status.to_string(),
        });
    }
    written?;
    Ok(())
}

/// Read the first public key found under `home`.
pub fn find_public_key(home: &Path) -> SshwResult<(PathBuf, Vec<u8>)> {
    let searched: Vec<PathBuf> = PUBLIC_KEY_CANDIDATES
        .iter()
        .map(|rel| home.join(rel))
        .collect();

    for path in &searched {
        if let Ok(key) = fs::read(path) {
            return Ok((path.clone(), key));
        }
    }
    Err(SshwError::NoPublicKey { searched })
}

/// Exit code to propagate; killed by a signal maps to `128 + signal` on Unix.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn bare_host_has_no_options() {
        let node = Node::new("web").with_host("10.0.0.1");
        assert_eq!(login_args(&node), vec!["10.0.0.1"]);
    }

    #[test]
    fn port_key_and_user_are_passed() {
        let node = Node {
            keypath: Some("/keys/id".to_string()),
            ..Node::new("db")
                .with_host("10.0.0.2")
                .with_user("deploy")
                .with_port(2222)
        };
        assert_eq!(
            login_args(&node),
            vec!["-p", "2222", "-i", "/keys/id", "deploy@10.0.0.2"]
        );
    }

    #[test]
    fn empty_fields_are_left_out() {
        let node = Node {
            keypath: Some(String::new()),
            ..Node::new("x").with_host("h").with_user("")
        };
        assert_eq!(login_args(&node), vec!["h"]);
    }

    #[test]
    fn missing_host_falls_back_to_name() {
        let node = Node::new("jump-box");
        assert_eq!(destination(&node), "jump-box");
        assert_eq!(display_target(&node), "root@jump-box");
    }

    #[test]
    fn copy_id_appends_remote_script() {
        let node = Node::new("a").with_host("h").with_user("u");
        let args = copy_id_args(&node);
        assert_eq!(args[0], "u@h");
        assert_eq!(args[1], AUTHORIZED_KEYS_SCRIPT);
    }

    #[test]
    fn display_target_defaults_user_to_root() {
        let node = Node::new("a").with_host("10.0.0.9");
        assert_eq!(display_target(&node), "root@10.0.0.9");
        let node = node.with_user("ops");
        assert_eq!(display_target(&node), "ops@10.0.0.9");
    }

    #[test]
    fn key_gets_trailing_newline() {
        let mut sent = Vec::new();
        write_key(&mut sent, b"ssh-rsa AAA").unwrap();
        assert_eq!(sent, b"ssh-rsa AAA\n");

        let mut sent = Vec::new();
        write_key(&mut sent, b"ssh-rsa AAA\n").unwrap();
        assert_eq!(sent, b"ssh-rsa AAA\n");
    }

    #[cfg(unix)]
    #[test]
    fn failed_ssh_wins_over_broken_pipe() {
        use std::io::{Error, ErrorKind};
        use std::os::unix::process::ExitStatusExt;

        let node = Node::new("a").with_host("h");
        let broken = || Err(Error::from(ErrorKind::BrokenPipe));

        let err = check_copy_id(&node, ExitStatus::from_raw(255 << 8), broken()).unwrap_err();
        assert!(matches!(err, SshwError::CommandFailed { .. }));

        let err = check_copy_id(&node, ExitStatus::from_raw(0), broken()).unwrap_err();
        assert!(matches!(err, SshwError::Io(_)));

        assert!(check_copy_id(&node, ExitStatus::from_raw(0), Ok(())).is_ok());
    }

    #[test]
    fn rsa_key_is_preferred() {
        let dir = tempdir().unwrap();
        let ssh = dir.path().join(".ssh");
        fs::create_dir_all(&ssh).unwrap();
        fs::write(ssh.join("id_ed25519.pub"), "ssh-ed25519 AAA").unwrap();
        fs::write(ssh.join("id_rsa.pub"), "ssh-rsa BBB").unwrap();

        let (path, key) = find_public_key(dir.path()).unwrap();
        assert_eq!(path, ssh.join("id_rsa.pub"));
        assert_eq!(key, b"ssh-rsa BBB");
    }

    #[test]
    fn ed25519_key_is_the_fallback() {
        let dir = tempdir().unwrap();
        let ssh = dir.path().join(".ssh");
        fs::create_dir_all(&ssh).unwrap();
        fs::write(ssh.join("id_ed25519.pub"), "ssh-ed25519 AAA").unwrap();

        let (path, _) = find_public_key(dir.path()).unwrap();
        assert_eq!(path, ssh.join("id_ed25519.pub"));
    }

    #[test]
    fn no_key_lists_searched_paths() {
        let dir = tempdir().unwrap();
        match find_public_key(dir.path()).unwrap_err() {
            SshwError::NoPublicKey { searched } => assert_eq!(searched.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

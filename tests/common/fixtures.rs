//! Reusable host file contents.

/// Two groups and a top-level host with an alias.
pub const HOSTS_YAML: &str = r#"
- name: prod
  children:
    - name: web
      host: 10.0.0.1
      user: deploy
    - name: db
      host: 10.0.0.2
      port: 2222
- name: bastion
  alias: jump
  host: jump.example.com
  user: ops
"#;

/// A host file with a misspelled key.
pub const HOSTS_WITH_TYPO_YAML: &str = r#"
- name: bastion
  alias: jump
  hots: jump.example.com
"#;

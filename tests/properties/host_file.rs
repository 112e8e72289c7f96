//! Property tests for host file and ssh config parsing.

use std::path::Path;

use proptest::prelude::*;

use sshw::config::{parse_hosts, parse_ssh_config};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Host file parsing never panics; it parses or reports an error.
    #[test]
    fn property_host_file_parse_never_panics(content in "\\PC{0,200}") {
        let _ = parse_hosts(&content, Path::new("hosts.yml"));
    }

    /// PROPERTY: Every generated host entry comes back with its fields.
    #[test]
    fn property_generated_hosts_round_trip(
        entries in proptest::collection::vec(("[a-z]{1,8}", "[a-z0-9.]{1,12}", 1u16..), 1..8),
    ) {
        let yaml: String = entries
            .iter()
            .map(|(name, host, port)| format!("- name: \"{name}\"\n  host: \"{host}\"\n  port: {port}\n"))
            .collect();

        let (nodes, warnings) = parse_hosts(&yaml, Path::new("hosts.yml")).unwrap();
        prop_assert!(warnings.is_empty());
        prop_assert_eq!(nodes.len(), entries.len());
        for (node, (name, host, port)) in nodes.iter().zip(&entries) {
            prop_assert_eq!(&node.name, name);
            prop_assert_eq!(node.host(), Some(host.as_str()));
            prop_assert_eq!(node.port, Some(*port));
        }
    }

    /// PROPERTY: ssh config import never panics and never yields wildcard hosts.
    #[test]
    fn property_ssh_config_has_no_wildcards(content in "(?s)[ -~\n\t=#*?!\"]{0,300}") {
        for node in parse_ssh_config(&content) {
            prop_assert!(!node.name.contains(['*', '?']));
            prop_assert!(!node.name.starts_with('!'));
            prop_assert!(node.host().is_some());
        }
    }
}

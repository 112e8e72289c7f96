#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Host file and ssh config parsing should never panic
        let _ = sshw::config::parse_hosts(content, Path::new("fuzz.yml"));
        let _ = sshw::config::parse_ssh_config(content);
    }
});

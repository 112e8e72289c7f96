#![no_main]

use libfuzzer_sys::fuzz_target;
use sshw::ui::picker::filter;
use sshw::Node;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    // First line is the search, the rest are host names.
    let mut lines = content.lines();
    let search = lines.next().unwrap_or_default();
    let hosts: Vec<Node> = lines.map(|l| Node::new(l).with_host(l)).collect();

    let indices = filter(&hosts, search);
    assert!(indices.len() <= hosts.len());
    assert!(indices.windows(2).all(|w| w[0] < w[1]));
});

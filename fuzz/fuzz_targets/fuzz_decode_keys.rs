#![no_main]

use libfuzzer_sys::fuzz_target;
use sshw::ui::picker::{decode, Key};

fuzz_target!(|data: &[u8]| {
    // Any chunk the terminal hands over must classify without panicking.
    if let Key::Char(c) = decode(data) {
        assert!(c.is_ascii() && !c.is_ascii_control());
    }
});

//! Property tests for key decoding.

use proptest::prelude::*;

use sshw::ui::picker::{decode, Key};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Decoding never panics on arbitrary chunks.
    #[test]
    fn property_decode_never_panics(chunk in proptest::collection::vec(any::<u8>(), 0..16)) {
        let _ = decode(&chunk);
    }

    /// PROPERTY: Every printable ASCII byte is a search character.
    #[test]
    fn property_printable_byte_is_char(b in 0x20u8..=0x7e) {
        prop_assert_eq!(decode(&[b]), Key::Char(char::from(b)));
    }

    /// PROPERTY: Chunks longer than three bytes are never a known key.
    #[test]
    fn property_long_chunks_are_unrecognized(
        chunk in proptest::collection::vec(any::<u8>(), 4..32),
    ) {
        prop_assert_eq!(decode(&chunk), Key::Unrecognized);
    }
}

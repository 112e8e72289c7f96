//! Raw input decoding.
//!
//! The terminal is read in chunks and each chunk is classified as a whole,
//! so the three bytes of an arrow-key sequence always arrive as one key.

/// A decoded keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Ctrl+C
    Cancel,
    /// Enter
    Confirm,
    Backspace,
    Up,
    Down,
    /// Printable ASCII character
    Char(char),
    Unrecognized,
}

const CTRL_C: u8 = 0x03;
const ENTER: u8 = 0x0D;
const DELETE: u8 = 0x7F;
const ESC: u8 = 0x1B;

/// Classify one chunk read from the terminal.
pub fn decode(chunk: &[u8]) -> Key {
    match chunk {
        [CTRL_C] => Key::Cancel,
        [ENTER] => Key::Confirm,
        [DELETE] => Key::Backspace,
        [b] if (0x20..=0x7E).contains(b) => Key::Char(char::from(*b)),
        [ESC, b'[', b'A'] => Key::Up,
        [ESC, b'[', b'B'] => Key::Down,
        _ => Key::Unrecognized,
    }
}

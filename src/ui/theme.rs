use crossterm::style::Color;

/// Design tokens for the sshw picker.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All glyphs drawn by the picker must be sourced from this module
pub mod colors {
    use super::Color;

    /// Prompt label
    pub const SUCCESS: Color = Color::Green;
    /// Error messages
    pub const ERROR: Color = Color::Red;
    /// Alias of the active host
    pub const WARNING: Color = Color::Yellow;
    /// Name of the active host
    pub const INFO: Color = Color::Cyan;
    /// Everything that is not under the cursor
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const POINTER: &str = "➤";
    pub const LABEL: &str = "✨";
    pub const NAVIGATE: &str = "↓ ↑";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const POINTER: &str = ">";
    pub const LABEL: &str = "*";
    pub const NAVIGATE: &str = "down/up";
}

/// Glyph set chosen once per session from the terminal's Unicode support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub error: &'static str,
    pub warning: &'static str,
    pub pointer: &'static str,
    pub label: &'static str,
    pub navigate: &'static str,
}

impl Glyphs {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                error: icons::ERROR,
                warning: icons::WARNING,
                pointer: icons::POINTER,
                label: icons::LABEL,
                navigate: icons::NAVIGATE,
            }
        } else {
            Self {
                error: icons_ascii::ERROR,
                warning: icons_ascii::WARNING,
                pointer: icons_ascii::POINTER,
                label: icons_ascii::LABEL,
                navigate: icons_ascii::NAVIGATE,
            }
        }
    }
}

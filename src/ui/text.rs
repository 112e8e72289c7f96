use std::borrow::Cow;
use std::fmt;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthChar;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Success))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Error))
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Warning))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Info))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Dim))
    }

    fn new(text: impl Into<String>, color: Option<SemanticColor>) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn render(&self, supports_color: bool) -> String {
        style(&self.text, self.color, self.bold, supports_color)
    }
}

fn style(text: &str, color: Option<SemanticColor>, bold: bool, supports_color: bool) -> String {
    if !supports_color || text.is_empty() {
        return text.to_string();
    }

    let Some(color) = color else {
        if bold {
            return format!("{}", text.bold());
        }
        return text.to_string();
    };

    let mut styled = match color {
        SemanticColor::Success => text.with(theme::colors::SUCCESS),
        SemanticColor::Error => text.with(theme::colors::ERROR),
        SemanticColor::Warning => text.with(theme::colors::WARNING),
        SemanticColor::Info => text.with(theme::colors::INFO),
        SemanticColor::Dim => text.with(theme::colors::DIM),
    };

    if bold {
        styled = styled.bold();
    }

    format!("{}", styled)
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One terminal line built from styled segments.
///
/// Rendering can cap the line at a display width so it never wraps; the
/// cap is applied to the visible text before any escape codes are added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    segments: Vec<ColoredText>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, segment: ColoredText) -> Self {
        if !segment.text.is_empty() {
            self.segments.push(segment);
        }
        self
    }

    /// Visible text without styling.
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn render(&self, supports_color: bool, max_width: Option<usize>) -> String {
        let mut out = String::new();
        let mut budget = max_width.unwrap_or(usize::MAX);

        for segment in &self.segments {
            if budget == 0 {
                break;
            }
            let text = printable(&segment.text);
            let (visible, used) = take_width(&text, budget);
            budget -= used;
            out.push_str(&style(visible, segment.color, segment.bold, supports_color));
        }

        out
    }
}

/// `text` with control characters shown as `?`, so tabs cannot widen the
/// line and stray escapes never reach the terminal.
fn printable(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_control) {
        Cow::Owned(
            text.chars()
                .map(|ch| if ch.is_control() { '?' } else { ch })
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}

/// Longest prefix of `text` that fits in `budget` columns, and its width.
fn take_width(text: &str, budget: usize) -> (&str, usize) {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            return (&text[..idx], used);
        }
        used += w;
    }
    (text, used)
}

//! Frame composition for the picker.
//!
//! A frame is a hint line, the label line, an optional search line and
//! exactly `page_size` item lines. Composition is pure; the live region
//! takes care of erasing the previous frame.

use crate::ui::text::{ColoredText, Line};
use crate::ui::theme::Glyphs;

use super::state::SelectionState;
use super::Candidate;

/// How frames are drawn on the current terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStyle {
    pub color: bool,
    pub unicode: bool,
    /// Lines are cut to this many columns so they never wrap.
    pub width: Option<usize>,
}

impl FrameStyle {
    /// No color, ASCII glyphs, no width limit.
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
            width: None,
        }
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
            width: None,
        }
    }
}

/// Slice of the filtered list that is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub start: usize,
    pub visible: usize,
}

/// Compute the window for `cursor` over `len` filtered items.
///
/// The window starts at the top and only scrolls as far as needed to keep
/// the cursor on the last visible row.
pub fn viewport(cursor: usize, len: usize, page_size: usize) -> Viewport {
    let visible = page_size.min(len);
    let mut start = 0;
    if visible > 0 && cursor >= start + visible {
        start = cursor + 1 - visible;
    }
    Viewport { start, visible }
}

/// Compose every line of one frame.
pub fn compose_frame<T: Candidate>(
    label: &str,
    items: &[T],
    state: &SelectionState,
    page_size: usize,
    style: FrameStyle,
) -> Vec<String> {
    let glyphs = Glyphs::new(style.unicode);
    let mut lines = Vec::with_capacity(page_size.saturating_add(3));

    let hint = Line::new().push(ColoredText::dim(format!(
        "Use the arrow keys to navigate: {}",
        glyphs.navigate
    )));
    lines.push(hint);

    lines.push(
        Line::new()
            .push(ColoredText::plain(format!("{} ", glyphs.label)))
            .push(ColoredText::success(label)),
    );

    if !state.search().is_empty() {
        lines.push(
            Line::new()
                .push(ColoredText::dim("search: "))
                .push(ColoredText::plain(state.search())),
        );
    }

    let filtered = state.filtered();
    let window = viewport(state.cursor(), filtered.len(), page_size);
    for row in 0..page_size {
        let idx = window.start + row;
        let line = match filtered.get(idx) {
            Some(&original) if idx == state.cursor() => active_line(&items[original], &glyphs),
            Some(&original) => inactive_line(&items[original]),
            None => Line::new(),
        };
        lines.push(line);
    }

    lines
        .iter()
        .map(|line| line.render(style.color, style.width))
        .collect()
}

fn active_line<T: Candidate>(item: &T, glyphs: &Glyphs) -> Line {
    let line = Line::new()
        .push(ColoredText::plain(format!("  {} ", glyphs.pointer)))
        .push(ColoredText::info(item.name()));
    let line = match item.alias() {
        Some(alias) => line
            .push(ColoredText::plain("("))
            .push(ColoredText::warning(alias))
            .push(ColoredText::plain(")")),
        None => line,
    };
    with_address(line, item)
}

fn inactive_line<T: Candidate>(item: &T) -> Line {
    let line = Line::new()
        .push(ColoredText::plain("    "))
        .push(ColoredText::dim(item.name()));
    let line = match item.alias() {
        Some(alias) => line
            .push(ColoredText::plain("("))
            .push(ColoredText::dim(alias))
            .push(ColoredText::plain(")")),
        None => line,
    };
    with_address(line, item)
}

fn with_address<T: Candidate>(line: Line, item: &T) -> Line {
    let Some(host) = item.host() else {
        return line;
    };
    let line = line.push(ColoredText::plain(" "));
    let line = match item.user() {
        Some(user) => line.push(ColoredText::dim(format!("{user}@"))),
        None => line,
    };
    line.push(ColoredText::dim(host))
}

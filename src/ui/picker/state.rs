//! Selection state for one flat pick.

use super::filter::filter;
use super::input::Key;
use super::Candidate;

/// Result of applying one key to the selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State may have changed; redraw.
    Changed,
    /// Nothing happened; skip the redraw.
    Ignored,
    /// Index into the original item list.
    Selected(usize),
    Cancelled,
}

/// Cursor, search buffer and matching indices for one flat selection.
///
/// `cursor` indexes into `filtered`, which holds indices into the original
/// item list. Both are recomputed together whenever the search changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    cursor: usize,
    search: String,
    filtered: Vec<usize>,
}

impl SelectionState {
    pub fn new<T: Candidate>(items: &[T]) -> Self {
        Self {
            cursor: 0,
            search: String::new(),
            filtered: filter(items, ""),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    /// Original index of the item under the cursor.
    pub fn current(&self) -> Option<usize> {
        self.filtered.get(self.cursor).copied()
    }

    pub fn apply<T: Candidate>(&mut self, items: &[T], key: Key) -> Outcome {
        match key {
            Key::Cancel => Outcome::Cancelled,
            Key::Confirm => match self.current() {
                Some(index) => Outcome::Selected(index),
                None => Outcome::Ignored,
            },
            Key::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                Outcome::Changed
            }
            Key::Down => {
                if self.cursor + 1 < self.filtered.len() {
                    self.cursor += 1;
                }
                Outcome::Changed
            }
            Key::Char(c) => {
                self.search.push(c);
                self.refilter(items);
                Outcome::Changed
            }
            Key::Backspace => {
                if self.search.pop().is_none() {
                    return Outcome::Ignored;
                }
                self.refilter(items);
                Outcome::Changed
            }
            Key::Unrecognized => Outcome::Ignored,
        }
    }

    fn refilter<T: Candidate>(&mut self, items: &[T]) {
        self.filtered = filter(items, &self.search);
        self.cursor = 0;
    }
}

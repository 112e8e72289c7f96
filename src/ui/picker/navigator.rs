//! Drill-down navigation through host groups.
//!
//! Picking a group descends into its children, which are listed behind a
//! synthetic "go up" row. The host tree itself is never modified: each
//! visit builds a fresh list of [`Entry`] values borrowing from it.
//!
//! Cancelling at any depth ends the whole interaction; it does not step
//! back one level.

use std::io::{Read, Write};

use crate::domain::Node;
use crate::error::SshwResult;
use crate::ui::session::TerminalSession;

use super::render::FrameStyle;
use super::select::Prompt;
use super::Candidate;

/// Name shown for the synthetic "go up" row.
pub const PARENT_MARKER: &str = "-parent-";

/// One row of a level as presented to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    /// Back to the enclosing level.
    Parent,
    Node(&'a Node),
}

impl Candidate for Entry<'_> {
    fn name(&self) -> &str {
        match self {
            Entry::Parent => PARENT_MARKER,
            Entry::Node(node) => &node.name,
        }
    }

    fn alias(&self) -> Option<&str> {
        match self {
            Entry::Parent => None,
            Entry::Node(node) => node.alias(),
        }
    }

    fn user(&self) -> Option<&str> {
        match self {
            Entry::Parent => None,
            Entry::Node(node) => node.user(),
        }
    }

    fn host(&self) -> Option<&str> {
        match self {
            Entry::Parent => None,
            Entry::Node(node) => node.host(),
        }
    }
}

/// A list of sibling nodes, and whether it sits below some group.
#[derive(Debug, Clone, Copy)]
struct Level<'a> {
    nodes: &'a [Node],
    nested: bool,
}

impl<'a> Level<'a> {
    fn root(nodes: &'a [Node]) -> Self {
        Self {
            nodes,
            nested: false,
        }
    }

    fn children(node: &'a Node) -> Self {
        Self {
            nodes: &node.children,
            nested: true,
        }
    }

    /// Rows to present: the "go up" row first for nested levels.
    fn entries(&self) -> Vec<Entry<'a>> {
        let parent = self.nested.then_some(Entry::Parent);
        parent
            .into_iter()
            .chain(self.nodes.iter().map(Entry::Node))
            .collect()
    }
}

/// Walks a host tree with a [`Prompt`] until a leaf is picked or the
/// operator cancels.
pub struct Navigator<'a, R, W> {
    prompt: Prompt<R, W>,
    root: &'a [Node],
    label: String,
}

impl<'a, R: Read, W: Write> Navigator<'a, R, W> {
    pub fn new(prompt: Prompt<R, W>, root: &'a [Node], label: impl Into<String>) -> Self {
        Self {
            prompt,
            root,
            label: label.into(),
        }
    }

    pub fn into_prompt(self) -> Prompt<R, W> {
        self.prompt
    }

    /// Pick a leaf host starting at the root level.
    ///
    /// Only the most recent parent level is remembered: going up from a
    /// level reached by going up lands on the root.
    pub fn choose(&mut self) -> SshwResult<Option<&'a Node>> {
        let mut parent: Option<Level<'a>> = None;
        let mut current = Level::root(self.root);

        loop {
            let entries = current.entries();
            let Some(index) = self.prompt.select_one(&self.label, &entries)? else {
                return Ok(None);
            };

            match entries[index] {
                Entry::Parent => {
                    current = parent.take().unwrap_or_else(|| Level::root(self.root));
                }
                Entry::Node(node) if node.is_group() => {
                    parent = Some(current);
                    current = Level::children(node);
                }
                Entry::Node(node) => return Ok(Some(node)),
            }
        }
    }
}

/// Pick a leaf host from `root` on the controlling terminal.
///
/// The terminal is held in raw mode for the whole walk, across levels.
pub fn choose<'a>(
    root: &'a [Node],
    label: &str,
    page_size: usize,
    style: FrameStyle,
) -> SshwResult<Option<&'a Node>> {
    let _session = TerminalSession::acquire()?;
    let prompt = Prompt::stdio(style).with_page_size(page_size);
    Navigator::new(prompt, root, label).choose()
}

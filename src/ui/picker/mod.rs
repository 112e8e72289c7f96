//! Interactive host picker
//!
//! A single-terminal, synchronous picker with incremental search, drawn in
//! place on stderr below the shell prompt.
//!
//! # Module Structure
//!
//! - `input` - raw byte chunks to keys
//! - `filter` - search matching
//! - `state` - cursor/search state machine for one flat pick
//! - `render` - frame composition and viewport
//! - `select` - the read/update/redraw loop
//! - `navigator` - drill-down through host groups

mod filter;
mod input;
mod navigator;
mod render;
mod select;
mod state;


pub use filter::{filter, matches};
pub use input::{decode, Key};
pub use navigator::{choose, Entry, Navigator, PARENT_MARKER};
pub use render::{compose_frame, viewport, FrameStyle, Viewport};
pub use select::{select_one, Prompt, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use state::{Outcome, SelectionState};

use crate::domain::Node;

/// Something the picker can list and search.
pub trait Candidate {
    fn name(&self) -> &str;

    fn alias(&self) -> Option<&str> {
        None
    }

    fn user(&self) -> Option<&str> {
        None
    }

    fn host(&self) -> Option<&str> {
        None
    }

    /// Text the search is matched against: name, user and host.
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name(),
            self.user().unwrap_or_default(),
            self.host().unwrap_or_default()
        )
    }
}

impl Candidate for Node {
    fn name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> Option<&str> {
        Node::alias(self)
    }

    fn user(&self) -> Option<&str> {
        Node::user(self)
    }

    fn host(&self) -> Option<&str> {
        Node::host(self)
    }
}

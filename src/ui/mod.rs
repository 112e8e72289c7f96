//! Terminal UI: the interactive picker and the pieces it is drawn with.

pub mod live_region;
pub mod output;
pub mod picker;
pub mod session;
pub mod terminal;
pub mod text;
pub mod theme;

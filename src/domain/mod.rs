//! Domain model: the host tree the picker navigates.

mod node;

pub use node::{find_alias, Node};

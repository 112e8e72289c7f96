//! Host tree node.

use serde::Deserialize;

/// A selectable host, or a group of hosts when `children` is non-empty.
///
/// Nodes are owned by the caller; the picker only ever borrows them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub keypath: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn alias(&self) -> Option<&str> {
        non_empty(self.alias.as_deref())
    }

    pub fn user(&self) -> Option<&str> {
        non_empty(self.user.as_deref())
    }

    pub fn host(&self) -> Option<&str> {
        non_empty(self.host.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Depth-first search for the first node whose alias equals `alias`.
pub fn find_alias<'a>(nodes: &'a [Node], alias: &str) -> Option<&'a Node> {
    for node in nodes {
        if node.alias() == Some(alias) {
            return Some(node);
        }
        if let Some(found) = find_alias(&node.children, alias) {
            return Some(found);
        }
    }
    None
}

use std::fmt;

use derive_more::IsVariant;

use crate::filesystem::render::render;

/// A single entry of a filesystem snapshot.
///
/// Nodes are plain values: a directory owns its children and nothing refers
/// back to a parent. Two nodes are equal when their paths and names match
/// and, for directories, their children are equal in order.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Node {
    File {
        path: String,
        name: String,
    },
    SymbolicLink {
        path: String,
        name: String,
    },
    Directory {
        path: String,
        name: String,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn file(path: impl Into<String>, name: impl Into<String>) -> Self {
        Node::File {
            path: path.into(),
            name: name.into(),
        }
    }

    pub fn symbolic_link(path: impl Into<String>, name: impl Into<String>) -> Self {
        Node::SymbolicLink {
            path: path.into(),
            name: name.into(),
        }
    }

    pub fn directory(
        path: impl Into<String>,
        name: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Node::Directory {
            path: path.into(),
            name: name.into(),
            children,
        }
    }

    /// Path the entry was discovered at.
    pub fn path(&self) -> &str {
        match self {
            Node::File { path, .. }
            | Node::SymbolicLink { path, .. }
            | Node::Directory { path, .. } => path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. }
            | Node::SymbolicLink { name, .. }
            | Node::Directory { name, .. } => name,
        }
    }

    /// Children of a directory, `None` for files and symbolic links.
    pub fn contents(&self) -> Option<&[Node]> {
        match self {
            Node::Directory { children, .. } => Some(children),
            Node::File { .. } | Node::SymbolicLink { .. } => None,
        }
    }

    /// Children of a directory, empty for files and symbolic links.
    pub fn children(&self) -> &[Node] {
        self.contents().unwrap_or_default()
    }

    /// Dot-prefixed names are hidden.
    pub fn is_hidden(&self) -> bool {
        self.name().starts_with('.')
    }

    /// Rebuilds a directory around a new set of children, keeping its path
    /// and name. Files and symbolic links are returned as they are.
    pub(crate) fn with_children(&self, children: Vec<Node>) -> Node {
        match self {
            Node::Directory { path, name, .. } => {
                Node::directory(path.clone(), name.clone(), children)
            }
            other => other.clone(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, false))
    }
}

use derive_more::Display;

use crate::filesystem::Node;

/// Lazy pre-order walk over a tree: a node, then each child's subtree in
/// child order.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        PreOrder::new(self)
    }
}

impl Node {
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(self)
    }

    /// Names of every directory in the tree, this node included.
    pub fn directory_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|node| node.is_directory())
            .map(Node::name)
            .collect()
    }

    /// Names of every regular file in the tree. Symbolic links are not files.
    pub fn file_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|node| node.is_file())
            .map(Node::name)
            .collect()
    }

    pub fn symbolic_link_count(&self) -> usize {
        self.iter().filter(|node| node.is_symbolic_link()).count()
    }
}

/// Directory and file totals printed under the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{directories} directories\t{files} files")]
pub struct Summary {
    pub directories: usize,
    pub files: usize,
}

impl From<&Node> for Summary {
    fn from(node: &Node) -> Self {
        Self {
            directories: node.directory_names().len(),
            files: node.file_names().len(),
        }
    }
}

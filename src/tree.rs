/*!
 * Directory structure built from listed entries
 *
 * Children are kept in insertion order so the rendered list follows the
 * order of the lister, not the alphabet.
 */

use indexmap::IndexMap;

use crate::types::{EntryKind, FileEntry};

/// Payload of a tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Leaf file
    File,
    /// Directory with its children keyed by name
    Directory(IndexMap<String, TreeNode>),
}

/// A named node of the directory structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Entry name (a single path segment)
    pub name: String,
    /// File leaf or directory children
    pub kind: NodeKind,
}

impl TreeNode {
    /// Create an empty directory node
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory(IndexMap::new()),
        }
    }

    /// Create a file leaf
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory(_))
    }

    /// Children of a directory; empty for files
    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        let children = match &self.kind {
            NodeKind::Directory(children) => Some(children.values()),
            NodeKind::File => None,
        };
        children.into_iter().flatten()
    }

    /// Insert an entry below this node, creating intermediate directories.
    ///
    /// Inserting a path whose directories already exist keeps their children.
    /// A leaf that later turns out to have children is promoted to a directory.
    pub fn insert(&mut self, entry: &FileEntry) {
        let segments = entry.segments();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut node = self;
        for segment in parents {
            node = node.child_dir_mut(segment);
        }

        match entry.kind {
            EntryKind::Directory => {
                node.child_dir_mut(last);
            }
            EntryKind::File => {
                node.children_mut()
                    .entry(last.clone())
                    .or_insert_with(|| TreeNode::file(last.clone()));
            }
        }
    }

    /// Render this node and its subtree as an indented bullet list.
    ///
    /// Directories are suffixed with `/` and expanded before their next sibling.
    pub fn render_with_root(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, 0, self);
        self.render_into(1, &mut out);
        out
    }

    fn render_into(&self, depth: usize, out: &mut String) {
        for child in self.children() {
            push_line(out, depth, child);
            child.render_into(depth + 1, out);
        }
    }

    fn children_mut(&mut self) -> &mut IndexMap<String, TreeNode> {
        if let NodeKind::File = self.kind {
            self.kind = NodeKind::Directory(IndexMap::new());
        }
        match &mut self.kind {
            NodeKind::Directory(children) => children,
            NodeKind::File => unreachable!("file node promoted above"),
        }
    }

    fn child_dir_mut(&mut self, name: &str) -> &mut TreeNode {
        let child = self
            .children_mut()
            .entry(name.to_string())
            .or_insert_with(|| TreeNode::directory(name));
        if let NodeKind::File = child.kind {
            child.kind = NodeKind::Directory(IndexMap::new());
        }
        child
    }
}

fn push_line(out: &mut String, depth: usize, node: &TreeNode) {
    out.push_str(&"  ".repeat(depth));
    out.push_str("- ");
    out.push_str(&node.name);
    if node.is_dir() {
        out.push('/');
    }
    out.push('\n');
}

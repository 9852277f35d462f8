//! Cursor over the directory tree
//!
//! The navigator owns the tree plus a current-position cursor, and exposes
//! the operations the shell commands are built from: path reconstruction,
//! single-segment `cd`, sorted listings, and aggregate size.

use thiserror::Error;

use crate::tree::{NodeId, Tree, sample_tree};

/// Navigation failure. Non-fatal: the cursor never moves on error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// The target is missing from the current directory, or exists but is a
    /// file. Both render the same way to the user.
    #[error("no such directory: {0}")]
    NoSuchDirectory(String),
}

/// One row of a directory listing. `size` is `None` for directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub size: Option<u64>,
}

/// Tracks a current position inside a [`Tree`].
///
/// The navigator owns the tree; the cursor is just a node id, reassigned by
/// [`change_directory`](Navigator::change_directory) and never owning
/// anything itself.
pub struct Navigator {
    tree: Tree,
    current: NodeId,
}

impl Navigator {
    /// Wrap an existing tree with the cursor at its root.
    pub fn new(tree: Tree) -> Self {
        let current = tree.root();
        Self { tree, current }
    }

    /// Navigator over the built-in sample hierarchy.
    pub fn sample() -> Self {
        Self::new(sample_tree())
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Absolute path of the current position: `/`-joined names from root to
    /// cursor, or exactly `"/"` at the root.
    pub fn path(&self) -> String {
        if self.current == self.tree.root() {
            return "/".to_string();
        }

        let mut names = Vec::new();
        let mut node = self.current;
        while let Some(parent) = self.tree.parent(node) {
            names.push(self.tree.name(node));
            node = parent;
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    /// Move the cursor.
    ///
    /// Accepts the empty string (no-op), `"/"` (jump to root), `".."` (up
    /// one level, no-op at root), or the name of a direct child directory.
    /// Multi-segment paths are not supported; each segment is its own `cd`.
    pub fn change_directory(&mut self, path: &str) -> Result<(), NavError> {
        match path {
            "" => Ok(()),
            "/" => {
                self.current = self.tree.root();
                Ok(())
            }
            ".." => {
                if let Some(parent) = self.tree.parent(self.current) {
                    self.current = parent;
                }
                Ok(())
            }
            name => match self.tree.child(self.current, name) {
                Some(child) if self.tree.is_dir(child) => {
                    self.current = child;
                    Ok(())
                }
                _ => Err(NavError::NoSuchDirectory(name.to_string())),
            },
        }
    }

    /// Sorted listing of the current directory.
    pub fn entries(&self) -> Vec<Entry> {
        self.tree
            .list(self.current)
            .into_iter()
            .map(|(name, id)| Entry {
                name: name.to_string(),
                size: self.tree.file_size(id),
            })
            .collect()
    }

    /// Aggregate size of everything beneath the current position.
    pub fn current_size(&self) -> u64 {
        self.tree.size(self.current)
    }
}

//! Arena-backed node storage for the simulated tree.

use std::collections::BTreeMap;

/// Handle to a node inside a [`Tree`].
///
/// A plain index into the tree's arena: cheap to copy, and only meaningful
/// for the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
enum NodeKind {
    File { size: u64 },
    Directory { children: BTreeMap<String, NodeId> },
}

#[derive(Debug)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    kind: NodeKind,
}

/// Tree that owns every node in a flat arena.
///
/// Parent links are indices rather than owning references, so upward
/// navigation ("..") needs no reference counting and no cycles exist in the
/// ownership graph.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree containing only a root directory.
    pub fn new(root_name: &str) -> Self {
        Self {
            nodes: vec![Node {
                name: root_name.to_string(),
                parent: None,
                kind: NodeKind::Directory {
                    children: BTreeMap::new(),
                },
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Add a file under `dir`, replacing any existing entry of the same name.
    ///
    /// Panics if `dir` refers to a file; callers only obtain directory ids
    /// from navigation and construction, so this is a contract violation on
    /// the order of an out-of-bounds index.
    pub fn add_file(&mut self, dir: NodeId, name: &str, size: u64) -> NodeId {
        self.insert(dir, name, NodeKind::File { size })
    }

    /// Add an empty directory under `dir`, replacing any existing entry of
    /// the same name.
    pub fn add_directory(&mut self, dir: NodeId, name: &str) -> NodeId {
        self.insert(
            dir,
            name,
            NodeKind::Directory {
                children: BTreeMap::new(),
            },
        )
    }

    fn insert(&mut self, dir: NodeId, name: &str, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_string(),
            parent: Some(dir),
            kind,
        });
        match &mut self.nodes[dir.0].kind {
            NodeKind::Directory { children } => {
                // Last insert wins; a displaced node stays in the arena but
                // is no longer reachable.
                children.insert(name.to_string(), id);
            }
            NodeKind::File { .. } => panic!("cannot add a child to a file"),
        }
        id
    }

    /// Look up a direct child of `dir` by name. Does not recurse.
    pub fn child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        match &self.nodes[dir.0].kind {
            NodeKind::Directory { children } => children.get(name).copied(),
            NodeKind::File { .. } => None,
        }
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn is_dir(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].kind, NodeKind::Directory { .. })
    }

    /// Size of a file in bytes, or `None` for a directory.
    pub fn file_size(&self, id: NodeId) -> Option<u64> {
        match self.nodes[id.0].kind {
            NodeKind::File { size } => Some(size),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Aggregate size: a file's own size, or the recursive sum of every file
    /// reachable beneath a directory. Recomputed on each call.
    pub fn size(&self, id: NodeId) -> u64 {
        match &self.nodes[id.0].kind {
            NodeKind::File { size } => *size,
            NodeKind::Directory { children } => {
                children.values().map(|&child| self.size(child)).sum()
            }
        }
    }

    /// Direct children of `dir`, sorted lexicographically by name with files
    /// and directories interleaved.
    pub fn list(&self, dir: NodeId) -> Vec<(&str, NodeId)> {
        match &self.nodes[dir.0].kind {
            NodeKind::Directory { children } => children
                .iter()
                .map(|(name, &id)| (name.as_str(), id))
                .collect(),
            NodeKind::File { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty_directory() {
        let tree = Tree::new("/");
        let root = tree.root();
        assert_eq!(tree.name(root), "/");
        assert!(tree.is_dir(root));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.size(root), 0);
        assert!(tree.list(root).is_empty());
    }

    #[test]
    fn test_add_file_sets_parent_and_size() {
        let mut tree = Tree::new("/");
        let root = tree.root();
        let file = tree.add_file(root, "test.txt", 1024);

        assert_eq!(tree.name(file), "test.txt");
        assert_eq!(tree.parent(file), Some(root));
        assert_eq!(tree.file_size(file), Some(1024));
        assert!(!tree.is_dir(file));
        assert_eq!(tree.child(root, "test.txt"), Some(file));
    }

    #[test]
    fn test_child_lookup_does_not_recurse() {
        let mut tree = Tree::new("/");
        let root = tree.root();
        let sub = tree.add_directory(root, "sub");
        tree.add_file(sub, "nested.txt", 256);

        assert_eq!(tree.child(root, "nested.txt"), None);
        assert!(tree.child(sub, "nested.txt").is_some());
        assert_eq!(tree.child(root, "nonexistent"), None);
    }

    #[test]
    fn test_aggregate_size_sums_nested_files() {
        let mut tree = Tree::new("/");
        let root = tree.root();
        tree.add_file(root, "test.txt", 512);
        let sub = tree.add_directory(root, "sub");
        tree.add_file(sub, "nested.txt", 256);

        assert_eq!(tree.size(sub), 256);
        assert_eq!(tree.size(root), 768);
    }

    #[test]
    fn test_empty_directory_has_zero_size() {
        let mut tree = Tree::new("/");
        let root = tree.root();
        let empty = tree.add_directory(root, "empty");
        assert_eq!(tree.size(empty), 0);
    }

    #[test]
    fn test_list_sorted_regardless_of_insertion_order() {
        let mut tree = Tree::new("/");
        let root = tree.root();
        tree.add_file(root, "zebra.txt", 1);
        tree.add_directory(root, "alpha");
        tree.add_file(root, "mango.txt", 1);

        let names: Vec<&str> = tree.list(root).iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["alpha", "mango.txt", "zebra.txt"]);
    }

    #[test]
    fn test_duplicate_name_overwrites() {
        let mut tree = Tree::new("/");
        let root = tree.root();
        tree.add_file(root, "test.txt", 100);
        let replacement = tree.add_file(root, "test.txt", 900);

        assert_eq!(tree.child(root, "test.txt"), Some(replacement));
        assert_eq!(tree.size(root), 900);
        assert_eq!(tree.list(root).len(), 1);
    }

    #[test]
    fn test_names_repeat_across_directories() {
        let mut tree = Tree::new("/");
        let root = tree.root();
        let a = tree.add_directory(root, "a");
        let b = tree.add_directory(root, "b");
        tree.add_file(a, "same.txt", 10);
        tree.add_file(b, "same.txt", 20);

        assert_eq!(tree.size(a), 10);
        assert_eq!(tree.size(b), 20);
        assert_eq!(tree.size(root), 30);
    }

    #[test]
    #[should_panic(expected = "cannot add a child to a file")]
    fn test_adding_child_to_file_panics() {
        let mut tree = Tree::new("/");
        let root = tree.root();
        let file = tree.add_file(root, "test.txt", 1);
        tree.add_file(file, "impossible.txt", 1);
    }
}

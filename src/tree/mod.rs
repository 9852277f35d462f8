//! In-memory directory tree
//!
//! The tree is a flat arena of nodes addressed by [`NodeId`]. A node is
//! either a file with a fixed size or a directory with name-keyed children;
//! parent links point back up the tree for `..` navigation and path
//! reconstruction without owning anything.

mod node;
mod sample;

pub use node::{NodeId, Tree};
pub use sample::sample_tree;

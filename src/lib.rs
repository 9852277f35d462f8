//! Dirsim - an interactive in-memory file system simulator

pub mod format;
pub mod navigator;
pub mod shell;
pub mod tree;

pub use format::{format_entry, format_size};
pub use navigator::{Entry, NavError, Navigator};
pub use shell::{Outcome, Shell};
pub use tree::{NodeId, Tree, sample_tree};

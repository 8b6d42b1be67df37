//! Tree construction module.

/// Tree builder implementation.
pub mod builder;

pub use builder::{BuildIssue, Node, TreeBuilder, dump_tree};

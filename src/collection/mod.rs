//! Collection trees: per-owner ordered sets of species entries.
//!
//! A `Collection` is a binary search tree keyed by species identifier,
//! backed by a flat node arena. This module also carries the traversal
//! iterators and the merge engine built on top of the tree.

pub mod entry;
pub mod merge;
pub mod node;
pub mod traverse;
pub mod tree;

pub use entry::Entry;
pub use merge::MergeStats;
pub use node::{NodeId, TreeNode};
pub use traverse::{InOrderIter, LevelOrderIter, PostOrderIter, PreOrderIter, Traversal};
pub use tree::{Collection, EvolveOutcome};

//! Collection tree node structures.
//!
//! Nodes live in a flat arena inside `Collection` and reference each other by
//! `NodeId` index. No parent links; every algorithm tracks its own path.

use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// Index into the collection's node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the collection tree.
///
/// Invariant: every id in the left subtree is strictly less than `entry.id`,
/// every id in the right subtree is strictly greater.
#[derive(Clone, Debug)]
pub struct TreeNode {
    /// The owned entry stored at this node.
    pub entry: Entry,

    /// Left child (NONE if absent).
    pub left: NodeId,

    /// Right child (NONE if absent).
    pub right: NodeId,
}

impl TreeNode {
    /// Create a leaf node holding `entry`.
    #[must_use]
    pub fn leaf(entry: Entry) -> Self {
        Self {
            entry,
            left: NodeId::NONE,
            right: NodeId::NONE,
        }
    }

    /// Check whether this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

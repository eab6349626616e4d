//! Tree traversals.
//!
//! Four orders over the collection tree plus an alphabetical listing. The
//! depth-first orders drive an explicit stack and the level order drives a
//! FIFO queue, so traversal depth never touches the call stack. None of them
//! mutate the tree, and every call starts a fresh, restartable sequence.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::entry::Entry;
use super::node::NodeId;
use super::tree::Collection;

/// Order in which a collection is listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Traversal {
    /// Visit, left, right.
    PreOrder,
    /// Left, visit, right; ascending identifier order.
    InOrder,
    /// Left, right, visit.
    PostOrder,
    /// Breadth-first.
    LevelOrder,
    /// Sorted by species name.
    Alphabetical,
}

impl Collection {
    /// Pre-order iterator (visit, left, right).
    #[must_use]
    pub fn iter_pre(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }

    /// In-order iterator; yields entries in strictly ascending id order.
    #[must_use]
    pub fn iter_in(&self) -> InOrderIter<'_> {
        InOrderIter::new(self)
    }

    /// Post-order iterator (left, right, visit).
    #[must_use]
    pub fn iter_post(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }

    /// Level-order (breadth-first) iterator.
    #[must_use]
    pub fn iter_level(&self) -> LevelOrderIter<'_> {
        LevelOrderIter::new(self)
    }

    /// All entries sorted by name.
    ///
    /// Linearizes the tree, then sorts; the sort is stable, so same-named
    /// entries keep their linearization order.
    #[must_use]
    pub fn alphabetical(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.iter_pre().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Materialize a traversal in the requested order.
    #[must_use]
    pub fn traverse(&self, order: Traversal) -> Vec<&Entry> {
        match order {
            Traversal::PreOrder => self.iter_pre().collect(),
            Traversal::InOrder => self.iter_in().collect(),
            Traversal::PostOrder => self.iter_post().collect(),
            Traversal::LevelOrder => self.iter_level().collect(),
            Traversal::Alphabetical => self.alphabetical(),
        }
    }

    /// Pre-order node ids; the linearization buffer behind merge.
    pub(crate) fn linearize(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        if !self.root().is_none() {
            stack.push(self.root());
        }
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            // Right first so the left subtree pops first.
            if !node.right.is_none() {
                stack.push(node.right);
            }
            if !node.left.is_none() {
                stack.push(node.left);
            }
            order.push(id);
        }
        order
    }
}

/// Explicit-stack pre-order iterator.
pub struct PreOrderIter<'a> {
    collection: &'a Collection,
    stack: Vec<NodeId>,
}

impl<'a> PreOrderIter<'a> {
    fn new(collection: &'a Collection) -> Self {
        let mut stack = Vec::new();
        if !collection.root().is_none() {
            stack.push(collection.root());
        }
        Self { collection, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.collection.node(id);
        if !node.right.is_none() {
            self.stack.push(node.right);
        }
        if !node.left.is_none() {
            self.stack.push(node.left);
        }
        Some(&node.entry)
    }
}

/// Explicit-stack in-order iterator.
pub struct InOrderIter<'a> {
    collection: &'a Collection,
    stack: Vec<NodeId>,
}

impl<'a> InOrderIter<'a> {
    fn new(collection: &'a Collection) -> Self {
        let mut iter = Self {
            collection,
            stack: Vec::new(),
        };
        iter.push_left_spine(collection.root());
        iter
    }

    fn push_left_spine(&mut self, mut id: NodeId) {
        while !id.is_none() {
            self.stack.push(id);
            id = self.collection.node(id).left;
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.collection.node(id);
        self.push_left_spine(node.right);
        Some(&node.entry)
    }
}

/// Explicit-stack post-order iterator.
///
/// Each stack slot carries a visited flag: a node is emitted only on its
/// second pass, after both subtrees drained.
pub struct PostOrderIter<'a> {
    collection: &'a Collection,
    stack: Vec<(NodeId, bool)>,
}

impl<'a> PostOrderIter<'a> {
    fn new(collection: &'a Collection) -> Self {
        let mut stack = Vec::new();
        if !collection.root().is_none() {
            stack.push((collection.root(), false));
        }
        Self { collection, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, visited)) = self.stack.pop() {
            let node = self.collection.node(id);
            if visited {
                return Some(&node.entry);
            }
            self.stack.push((id, true));
            if !node.right.is_none() {
                self.stack.push((node.right, false));
            }
            if !node.left.is_none() {
                self.stack.push((node.left, false));
            }
        }
        None
    }
}

/// Breadth-first iterator over a FIFO queue of node ids.
pub struct LevelOrderIter<'a> {
    collection: &'a Collection,
    queue: VecDeque<NodeId>,
}

impl<'a> LevelOrderIter<'a> {
    fn new(collection: &'a Collection) -> Self {
        let mut queue = VecDeque::new();
        if !collection.root().is_none() {
            queue.push_back(collection.root());
        }
        Self { collection, queue }
    }
}

impl<'a> Iterator for LevelOrderIter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = self.collection.node(id);
        if !node.left.is_none() {
            self.queue.push_back(node.left);
        }
        if !node.right.is_none() {
            self.queue.push_back(node.right);
        }
        Some(&node.entry)
    }
}

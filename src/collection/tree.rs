//! Arena-based collection tree.
//!
//! A binary search tree of owned entries keyed by species identifier, stored
//! in a flat `Vec` with index-based references. Removed slots are recycled
//! through a free list. There is no balancing: depth is a direct function of
//! insertion order. All algorithms are iterative, so a degenerate
//! (sorted-insertion) tree costs time, never stack.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::entry::Entry;
use super::node::{NodeId, TreeNode};
use crate::catalog::{Catalog, SpeciesId, SpeciesRecord};
use crate::error::EngineError;

/// Outcome of a successful evolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvolveOutcome {
    /// The entry was replaced by a fresh copy of its evolved form.
    Evolved(SpeciesId),

    /// The evolved form was already in the collection; the original entry
    /// was removed and nothing was added.
    AlreadyOwned(SpeciesId),
}

/// A binary search tree of species entries belonging to one owner.
///
/// Invariant: for every node, all ids in its left subtree are strictly less
/// than the node's id and all ids in its right subtree are strictly greater.
/// Identifiers are unique within one collection.
#[derive(Clone, Debug)]
pub struct Collection {
    /// Node slots; vacant slots are parked on the free list.
    slots: Vec<Option<TreeNode>>,

    /// Recycled slot indices.
    free: Vec<NodeId>,

    /// Root node (NONE when the collection is empty).
    root: NodeId,

    /// Number of live entries.
    len: usize,
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl Collection {
    /// Create a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId::NONE,
            len: 0,
        }
    }

    /// Create a collection seeded with a single entry copied from `record`.
    #[must_use]
    pub fn with_starter(record: &SpeciesRecord) -> Self {
        let mut collection = Self::new();
        let root = collection.alloc(TreeNode::leaf(Entry::from_record(record)));
        collection.root = root;
        collection
    }

    /// Get the root node ID (NONE when empty).
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of entries in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Look up the node holding `id`.
    #[must_use]
    pub fn find(&self, id: SpeciesId) -> Option<NodeId> {
        let mut cur = self.root;
        while !cur.is_none() {
            let node = self.node(cur);
            cur = if id < node.entry.id {
                node.left
            } else if id > node.entry.id {
                node.right
            } else {
                return Some(cur);
            };
        }
        None
    }

    /// Look up the entry with `id`.
    #[must_use]
    pub fn get(&self, id: SpeciesId) -> Option<&Entry> {
        self.find(id).map(|node| &self.node(node).entry)
    }

    /// Check if `id` is present.
    #[must_use]
    pub fn contains(&self, id: SpeciesId) -> bool {
        self.find(id).is_some()
    }

    /// Get the entry stored at a node, if the slot is live.
    #[must_use]
    pub fn entry(&self, node: NodeId) -> Option<&Entry> {
        self.slots
            .get(node.index())
            .and_then(|slot| slot.as_ref())
            .map(|n| &n.entry)
    }

    /// Insert an owned entry, keyed by its id.
    ///
    /// Duplicate ids are rejected with `AlreadyExists` and the tree is left
    /// unchanged; the rejected entry is dropped.
    #[instrument(level = "trace", skip(self, entry), fields(id = %entry.id))]
    pub fn insert(&mut self, entry: Entry) -> Result<NodeId, EngineError> {
        let id = entry.id;

        if self.root.is_none() {
            let node = self.alloc(TreeNode::leaf(entry));
            self.root = node;
            return Ok(node);
        }

        let mut cur = self.root;
        loop {
            let node = self.node(cur);
            let (key, left, right) = (node.entry.id, node.left, node.right);

            if id < key {
                if left.is_none() {
                    let new = self.alloc(TreeNode::leaf(entry));
                    self.node_mut(cur).left = new;
                    return Ok(new);
                }
                cur = left;
            } else if id > key {
                if right.is_none() {
                    let new = self.alloc(TreeNode::leaf(entry));
                    self.node_mut(cur).right = new;
                    return Ok(new);
                }
                cur = right;
            } else {
                return Err(EngineError::AlreadyExists(id));
            }
        }
    }

    /// Copy the catalog record for `id` into the collection.
    pub fn add_species(&mut self, catalog: &Catalog, id: SpeciesId) -> Result<NodeId, EngineError> {
        let record = catalog.get(id).ok_or(EngineError::UnknownSpecies(id))?;
        self.insert(Entry::from_record(record))
    }

    /// Remove the entry with `id`, returning it.
    ///
    /// A node with two children is not detached: the in-order successor
    /// (leftmost of the right subtree) is spliced out and its entry replaces
    /// the removed one in place, which keeps the ordering invariant without
    /// relinking the removal point.
    #[instrument(level = "trace", skip(self))]
    pub fn remove(&mut self, id: SpeciesId) -> Result<Entry, EngineError> {
        if self.root.is_none() {
            return Err(EngineError::EmptyCollection);
        }

        // Locate the target and its parent link.
        let mut parent = NodeId::NONE;
        let mut from_left = false;
        let mut cur = self.root;
        while !cur.is_none() {
            let node = self.node(cur);
            if id < node.entry.id {
                parent = cur;
                from_left = true;
                cur = node.left;
            } else if id > node.entry.id {
                parent = cur;
                from_left = false;
                cur = node.right;
            } else {
                break;
            }
        }
        if cur.is_none() {
            return Err(EngineError::SpeciesNotFound(id));
        }

        let target = cur;
        let (left, right) = {
            let node = self.node(target);
            (node.left, node.right)
        };

        let removed = if left.is_none() || right.is_none() {
            // At most one child: that child (possibly NONE) takes the
            // target's place under the parent.
            let child = if left.is_none() { right } else { left };
            if parent.is_none() {
                self.root = child;
            } else if from_left {
                self.node_mut(parent).left = child;
            } else {
                self.node_mut(parent).right = child;
            }
            self.release(target).entry
        } else {
            // Two children: splice out the in-order successor, which has no
            // left child, and promote its entry into the target node.
            let mut succ_parent = target;
            let mut succ = right;
            loop {
                let next_left = self.node(succ).left;
                if next_left.is_none() {
                    break;
                }
                succ_parent = succ;
                succ = next_left;
            }

            let succ_right = self.node(succ).right;
            if succ_parent == target {
                self.node_mut(succ_parent).right = succ_right;
            } else {
                self.node_mut(succ_parent).left = succ_right;
            }

            let promoted = self.release(succ).entry;
            std::mem::replace(&mut self.node_mut(target).entry, promoted)
        };

        debug!(%id, remaining = self.len, "entry removed");
        Ok(removed)
    }

    /// Evolve the entry with `id` into its successor species.
    ///
    /// When the evolved form is already present, `id` is removed and nothing
    /// is added, so the collection never holds a duplicate identifier.
    #[instrument(level = "trace", skip(self, catalog))]
    pub fn evolve(
        &mut self,
        catalog: &Catalog,
        id: SpeciesId,
    ) -> Result<EvolveOutcome, EngineError> {
        if self.is_empty() {
            return Err(EngineError::EmptyCollection);
        }
        if !self.contains(id) {
            return Err(EngineError::SpeciesNotFound(id));
        }

        let record = catalog.get(id).ok_or(EngineError::UnknownSpecies(id))?;
        if !record.evolvable {
            return Err(EngineError::NotEvolvable(id));
        }

        let next = id.successor();
        let evolved = catalog.get(next).ok_or(EngineError::UnknownSpecies(next))?;

        self.remove(id)?;
        if self.contains(next) {
            debug!(from = %id, into = %next, "evolved form already owned");
            Ok(EvolveOutcome::AlreadyOwned(next))
        } else {
            self.insert(Entry::from_record(evolved))?;
            debug!(from = %id, into = %next, "entry evolved");
            Ok(EvolveOutcome::Evolved(next))
        }
    }

    /// Height of the tree (0 for an empty collection).
    ///
    /// Breadth-first, so a degenerate chain costs O(n) time, not stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        if !self.root.is_none() {
            queue.push_back((self.root, 1));
        }
        while let Some((id, depth)) = queue.pop_front() {
            if depth > max_depth {
                max_depth = depth;
            }
            let node = self.node(id);
            if !node.left.is_none() {
                queue.push_back((node.left, depth + 1));
            }
            if !node.right.is_none() {
                queue.push_back((node.right, depth + 1));
            }
        }
        max_depth
    }

    // --- arena plumbing ---

    pub(crate) fn node(&self, id: NodeId) -> &TreeNode {
        self.slots[id.index()].as_ref().expect("vacant tree slot")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        self.slots[id.index()].as_mut().expect("vacant tree slot")
    }

    fn alloc(&mut self, node: TreeNode) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                let id = NodeId::new(self.slots.len() as u32);
                self.slots.push(Some(node));
                id
            }
        }
    }

    fn release(&mut self, id: NodeId) -> TreeNode {
        self.len -= 1;
        let node = self.slots[id.index()]
            .take()
            .expect("released a vacant tree slot");
        self.free.push(id);
        node
    }

    /// Take the entry out of a node, leaving the slot vacant.
    ///
    /// Child links are not repaired; only the merge engine uses this, on a
    /// source collection it is in the middle of consuming.
    pub(super) fn take(&mut self, id: NodeId) -> Entry {
        self.release(id).entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TypeTag;

    fn entry(id: u16) -> Entry {
        Entry::from_record(&SpeciesRecord::new(
            SpeciesId::new(id),
            format!("Species {id}"),
            TypeTag::Normal,
            50,
            50,
            true,
        ))
    }

    fn tree_of(ids: &[u16]) -> Collection {
        let mut collection = Collection::new();
        for &id in ids {
            collection.insert(entry(id)).unwrap();
        }
        collection
    }

    fn ids_in_order(collection: &Collection) -> Vec<u16> {
        collection.iter_in().map(|e| e.id.raw()).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let collection = Collection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert!(collection.root().is_none());
        assert_eq!(collection.depth(), 0);
    }

    #[test]
    fn test_with_starter() {
        let record = SpeciesRecord::new(SpeciesId::new(4), "Ember", TypeTag::Fire, 39, 52, true);
        let collection = Collection::with_starter(&record);

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(SpeciesId::new(4)).unwrap().name, "Ember");
    }

    #[test]
    fn test_insert_and_find_roundtrip() {
        let mut collection = Collection::new();
        let e = entry(25);
        collection.insert(e.clone()).unwrap();

        assert_eq!(collection.get(SpeciesId::new(25)), Some(&e));
        assert!(collection.contains(SpeciesId::new(25)));
        assert!(!collection.contains(SpeciesId::new(26)));
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let mut collection = tree_of(&[5, 3, 8]);

        let err = collection.insert(entry(3)).unwrap_err();
        assert_eq!(err, EngineError::AlreadyExists(SpeciesId::new(3)));
        assert_eq!(collection.len(), 3);
        assert_eq!(ids_in_order(&collection), vec![3, 5, 8]);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut collection = Collection::new();
        let err = collection.remove(SpeciesId::new(1)).unwrap_err();
        assert_eq!(err, EngineError::EmptyCollection);
    }

    #[test]
    fn test_remove_absent_leaves_tree_unchanged() {
        let mut collection = tree_of(&[5, 3, 8]);

        let err = collection.remove(SpeciesId::new(6)).unwrap_err();
        assert_eq!(err, EngineError::SpeciesNotFound(SpeciesId::new(6)));
        assert_eq!(ids_in_order(&collection), vec![3, 5, 8]);
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_remove_leaf() {
        let mut collection = tree_of(&[5, 3, 8]);

        let removed = collection.remove(SpeciesId::new(3)).unwrap();
        assert_eq!(removed.id, SpeciesId::new(3));
        assert_eq!(ids_in_order(&collection), vec![5, 8]);
    }

    #[test]
    fn test_remove_node_with_only_left_child() {
        let mut collection = tree_of(&[5, 3, 1]);

        collection.remove(SpeciesId::new(3)).unwrap();
        assert_eq!(ids_in_order(&collection), vec![1, 5]);
    }

    #[test]
    fn test_remove_node_with_only_right_child() {
        let mut collection = tree_of(&[5, 3, 4]);

        collection.remove(SpeciesId::new(3)).unwrap();
        assert_eq!(ids_in_order(&collection), vec![4, 5]);
    }

    #[test]
    fn test_remove_root_with_two_children_promotes_successor() {
        // Insert 5,3,8,1,4,7,9 then remove 5: successor 7 gets promoted.
        let mut collection = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(ids_in_order(&collection), vec![1, 3, 4, 5, 7, 8, 9]);

        let removed = collection.remove(SpeciesId::new(5)).unwrap();
        assert_eq!(removed.id, SpeciesId::new(5));
        assert_eq!(ids_in_order(&collection), vec![1, 3, 4, 7, 8, 9]);
        assert_eq!(collection.len(), 6);

        // The promoted entry sits at the old root position.
        let root_entry = collection.entry(collection.root()).unwrap();
        assert_eq!(root_entry.id, SpeciesId::new(7));
    }

    #[test]
    fn test_remove_two_children_successor_is_right_child() {
        // 5's right child 8 has no left subtree, so 8 itself is the successor.
        let mut collection = tree_of(&[5, 3, 8, 9]);

        collection.remove(SpeciesId::new(5)).unwrap();
        assert_eq!(ids_in_order(&collection), vec![3, 8, 9]);
    }

    #[test]
    fn test_remove_root_until_empty() {
        let mut collection = tree_of(&[5, 3, 8]);

        collection.remove(SpeciesId::new(5)).unwrap();
        collection.remove(SpeciesId::new(8)).unwrap();
        collection.remove(SpeciesId::new(3)).unwrap();

        assert!(collection.is_empty());
        assert!(collection.root().is_none());
    }

    #[test]
    fn test_slot_reuse_after_remove() {
        let mut collection = tree_of(&[5, 3, 8]);
        collection.remove(SpeciesId::new(3)).unwrap();

        // The freed slot is recycled rather than growing the arena.
        let reused = collection.insert(entry(4)).unwrap();
        assert!(reused.raw() < 3);
        assert_eq!(ids_in_order(&collection), vec![4, 5, 8]);
    }

    #[test]
    fn test_depth_of_degenerate_tree() {
        let collection = tree_of(&[1, 2, 3, 4, 5]);
        assert_eq!(collection.depth(), 5);

        let balanced = tree_of(&[3, 1, 5, 2, 4]);
        assert_eq!(balanced.depth(), 3);
    }

    #[test]
    fn test_add_species_from_catalog() {
        let catalog = Catalog::classic();
        let mut collection = Collection::new();

        collection.add_species(&catalog, SpeciesId::new(25)).unwrap();
        assert_eq!(collection.get(SpeciesId::new(25)).unwrap().name, "Pikachu");

        let err = collection
            .add_species(&catalog, SpeciesId::new(999))
            .unwrap_err();
        assert_eq!(err, EngineError::UnknownSpecies(SpeciesId::new(999)));
    }

    #[test]
    fn test_evolve_fresh() {
        let catalog = Catalog::classic();
        let mut collection = Collection::new();
        collection.add_species(&catalog, SpeciesId::new(4)).unwrap();

        let outcome = collection.evolve(&catalog, SpeciesId::new(4)).unwrap();
        assert_eq!(outcome, EvolveOutcome::Evolved(SpeciesId::new(5)));
        assert!(!collection.contains(SpeciesId::new(4)));
        assert_eq!(collection.get(SpeciesId::new(5)).unwrap().name, "Charmeleon");
    }

    #[test]
    fn test_evolve_into_already_owned_form() {
        let catalog = Catalog::classic();
        let mut collection = Collection::new();
        collection.add_species(&catalog, SpeciesId::new(4)).unwrap();
        collection.add_species(&catalog, SpeciesId::new(5)).unwrap();

        let outcome = collection.evolve(&catalog, SpeciesId::new(4)).unwrap();
        assert_eq!(outcome, EvolveOutcome::AlreadyOwned(SpeciesId::new(5)));
        assert!(!collection.contains(SpeciesId::new(4)));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_evolve_not_evolvable() {
        let catalog = Catalog::classic();
        let mut collection = Collection::new();
        // Venusaur is a final form.
        collection.add_species(&catalog, SpeciesId::new(3)).unwrap();

        let err = collection.evolve(&catalog, SpeciesId::new(3)).unwrap_err();
        assert_eq!(err, EngineError::NotEvolvable(SpeciesId::new(3)));
        assert!(collection.contains(SpeciesId::new(3)));
    }

    #[test]
    fn test_evolve_absent_and_empty() {
        let catalog = Catalog::classic();
        let mut collection = Collection::new();

        let err = collection.evolve(&catalog, SpeciesId::new(4)).unwrap_err();
        assert_eq!(err, EngineError::EmptyCollection);

        collection.add_species(&catalog, SpeciesId::new(1)).unwrap();
        let err = collection.evolve(&catalog, SpeciesId::new(4)).unwrap_err();
        assert_eq!(err, EngineError::SpeciesNotFound(SpeciesId::new(4)));
    }
}

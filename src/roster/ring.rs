//! Circular owner roster.
//!
//! Owners live in a flat slot arena and are threaded into one circular,
//! doubly-linked cycle through `next`/`prev` indices. A sole member links to
//! itself. Index links instead of references keep unlink free of dangling
//! pointers; both directions of a splice are updated in the same call.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::owner::Owner;
use crate::error::EngineError;

/// Index into the roster's owner arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub u32);

impl OwnerId {
    /// Sentinel value representing no owner.
    pub const NONE: OwnerId = OwnerId(u32::MAX);

    /// Create a new owner ID.
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
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "OwnerId(NONE)")
        } else {
            write!(f, "OwnerId({})", self.0)
        }
    }
}

/// Direction for a circular walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Follow `next` links.
    Forward,
    /// Follow `prev` links.
    Backward,
}

/// An owner plus its intrusive cycle links.
#[derive(Clone, Debug)]
struct Slot {
    owner: Owner,
    next: OwnerId,
    prev: OwnerId,
}

/// The circular registry of all owners.
///
/// Invariant whenever the roster is non-empty: the live slots form exactly
/// one cycle under `next`, the reverse cycle under `prev`, and `head` is a
/// member of it.
#[derive(Clone, Debug)]
pub struct Roster {
    slots: Vec<Option<Slot>>,
    free: Vec<OwnerId>,
    head: OwnerId,
    len: usize,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Create a new empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: OwnerId::NONE,
            len: 0,
        }
    }

    /// Number of linked owners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The head owner (NONE when empty).
    #[must_use]
    pub fn head(&self) -> OwnerId {
        self.head
    }

    /// Get an owner by ID.
    #[must_use]
    pub fn get(&self, id: OwnerId) -> Option<&Owner> {
        self.slots
            .get(id.index())
            .and_then(|slot| slot.as_ref())
            .map(|slot| &slot.owner)
    }

    /// Get an owner by ID, mutably.
    pub fn get_mut(&mut self, id: OwnerId) -> Option<&mut Owner> {
        self.slots
            .get_mut(id.index())
            .and_then(|slot| slot.as_mut())
            .map(|slot| &mut slot.owner)
    }

    /// The owner after `id` in the cycle.
    #[must_use]
    pub fn next_of(&self, id: OwnerId) -> Option<OwnerId> {
        self.slots
            .get(id.index())
            .and_then(|slot| slot.as_ref())
            .map(|slot| slot.next)
    }

    /// The owner before `id` in the cycle.
    #[must_use]
    pub fn prev_of(&self, id: OwnerId) -> Option<OwnerId> {
        self.slots
            .get(id.index())
            .and_then(|slot| slot.as_ref())
            .map(|slot| slot.prev)
    }

    /// Link an owner into the cycle, logically at the tail (immediately
    /// before the head). The head only changes when the roster was empty.
    #[instrument(level = "trace", skip(self, owner), fields(name = %owner.name))]
    pub fn link(&mut self, owner: Owner) -> OwnerId {
        let id = self.alloc(owner);

        if self.head.is_none() {
            // Sole member: a cycle of one.
            let slot = self.slot_mut(id);
            slot.next = id;
            slot.prev = id;
            self.head = id;
        } else {
            let head = self.head;
            let tail = self.slot(head).prev;
            {
                let slot = self.slot_mut(id);
                slot.next = head;
                slot.prev = tail;
            }
            self.slot_mut(tail).next = id;
            self.slot_mut(head).prev = id;
        }

        debug!(%id, members = self.len, "owner linked");
        id
    }

    /// Splice an owner out of the cycle and return it (with its collection).
    ///
    /// Re-aims the head when the head itself is removed; empties the roster
    /// when the sole member is removed.
    #[instrument(level = "trace", skip(self))]
    pub fn unlink(&mut self, id: OwnerId) -> Result<Owner, EngineError> {
        if self.is_empty() {
            return Err(EngineError::EmptyRoster);
        }
        if self.get(id).is_none() {
            return Err(EngineError::OwnerNotFound(id));
        }

        let (next, prev) = {
            let slot = self.slot(id);
            (slot.next, slot.prev)
        };

        if next == id {
            self.head = OwnerId::NONE;
        } else {
            self.slot_mut(prev).next = next;
            self.slot_mut(next).prev = prev;
            if self.head == id {
                self.head = next;
            }
        }

        let owner = self.release(id);
        debug!(%id, members = self.len, "owner unlinked");
        Ok(owner)
    }

    /// Find the owner `n` positions after the head (0-based).
    ///
    /// The cycle wraps, so any `n` resolves on a non-empty roster.
    #[must_use]
    pub fn find_by_position(&self, n: usize) -> Option<OwnerId> {
        if self.is_empty() {
            return None;
        }
        let mut cur = self.head;
        for _ in 0..(n % self.len) {
            cur = self.slot(cur).next;
        }
        Some(cur)
    }

    /// Find the first owner with exactly this name, scanning one full cycle
    /// from the head.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<OwnerId> {
        let mut cur = self.head;
        for _ in 0..self.len {
            if self.slot(cur).owner.name == name {
                return Some(cur);
            }
            cur = self.slot(cur).next;
        }
        None
    }

    /// Iterate (position, owner) pairs, one full traversal from the head.
    #[must_use]
    pub fn iter(&self) -> OwnersIter<'_> {
        OwnersIter {
            roster: self,
            cur: self.head,
            emitted: 0,
        }
    }

    /// Walk the cycle from the head, yielding exactly `steps` owners and
    /// wrapping freely in either direction.
    #[must_use]
    pub fn walk(&self, direction: Direction, steps: usize) -> WalkIter<'_> {
        WalkIter {
            roster: self,
            cur: self.head,
            direction,
            remaining: if self.is_empty() { 0 } else { steps },
        }
    }

    /// Relink the cycle into ascending name order; the head becomes the
    /// alphabetically first owner. Stable for equal names.
    #[instrument(level = "trace", skip(self))]
    pub fn sort_by_name(&mut self) {
        if self.len < 2 {
            return;
        }

        let mut ids = Vec::with_capacity(self.len);
        let mut cur = self.head;
        for _ in 0..self.len {
            ids.push(cur);
            cur = self.slot(cur).next;
        }

        ids.sort_by(|&a, &b| self.slot(a).owner.name.cmp(&self.slot(b).owner.name));

        let count = ids.len();
        for (i, &id) in ids.iter().enumerate() {
            let next = ids[(i + 1) % count];
            let prev = ids[(i + count - 1) % count];
            let slot = self.slot_mut(id);
            slot.next = next;
            slot.prev = prev;
        }
        self.head = ids[0];

        debug!(members = self.len, "roster sorted by name");
    }

    // --- arena plumbing ---

    fn slot(&self, id: OwnerId) -> &Slot {
        self.slots[id.index()].as_ref().expect("vacant roster slot")
    }

    fn slot_mut(&mut self, id: OwnerId) -> &mut Slot {
        self.slots[id.index()].as_mut().expect("vacant roster slot")
    }

    fn alloc(&mut self, owner: Owner) -> OwnerId {
        self.len += 1;
        let slot = Slot {
            owner,
            next: OwnerId::NONE,
            prev: OwnerId::NONE,
        };
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(slot);
                id
            }
            None => {
                let id = OwnerId::new(self.slots.len() as u32);
                self.slots.push(Some(slot));
                id
            }
        }
    }

    fn release(&mut self, id: OwnerId) -> Owner {
        self.len -= 1;
        let slot = self.slots[id.index()]
            .take()
            .expect("released a vacant roster slot");
        self.free.push(id);
        slot.owner
    }
}

/// One full (position, owner) traversal of the cycle.
pub struct OwnersIter<'a> {
    roster: &'a Roster,
    cur: OwnerId,
    emitted: usize,
}

impl<'a> Iterator for OwnersIter<'a> {
    type Item = (usize, &'a Owner);

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted == self.roster.len {
            return None;
        }
        let slot = self.roster.slot(self.cur);
        self.cur = slot.next;
        let position = self.emitted;
        self.emitted += 1;
        Some((position, &slot.owner))
    }
}

/// A bounded directional walk around the cycle.
pub struct WalkIter<'a> {
    roster: &'a Roster,
    cur: OwnerId,
    direction: Direction,
    remaining: usize,
}

impl<'a> Iterator for WalkIter<'a> {
    type Item = &'a Owner;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let slot = self.roster.slot(self.cur);
        self.cur = match self.direction {
            Direction::Forward => slot.next,
            Direction::Backward => slot.prev,
        };
        Some(&slot.owner)
    }
}

//! # bestiary
//!
//! A creature-collection engine: per-owner binary search trees of species
//! entries, kept under a circular roster of named owners.
//!
//! ## Design Principles
//!
//! 1. **Two structures, one engine**: an ordered collection tree per owner
//!    and a circular doubly-linked roster of owners. Everything else
//!    (traversal, merge, evolution, battle) is built on those two.
//!
//! 2. **Indices over pointers**: both structures live in flat slot arenas
//!    and reference members by index with a NONE sentinel. Unlinking an
//!    owner or removing an entry can never leave a dangling reference.
//!
//! 3. **Iterative everywhere**: traversal, removal, and merge drive explicit
//!    stacks and queues. The tree is deliberately unbalanced, so a sorted
//!    insertion sequence degenerates to a chain; that costs time, not stack.
//!
//! 4. **Copies, not references**: adding a species deep-copies its catalog
//!    row into an owned entry. Collections never borrow from the catalog.
//!
//! ## Modules
//!
//! - `catalog`: species ids, static records, the lookup table, the bundled
//!   reference data
//! - `collection`: the per-owner tree, traversals, the merge engine
//! - `roster`: owners and the circular registry
//! - `battle`: pure battle scoring
//! - `error`: the engine error type

pub mod battle;
pub mod catalog;
pub mod collection;
pub mod error;
pub mod roster;

// Re-export commonly used types
pub use crate::catalog::{Catalog, SpeciesId, SpeciesRecord, TypeTag};

pub use crate::collection::{
    Collection, Entry, EvolveOutcome, MergeStats, NodeId, Traversal, TreeNode,
};

pub use crate::roster::{Direction, Owner, OwnerId, Roster};

pub use crate::battle::{battle, score, BattleOutcome, BattleReport};

pub use crate::error::EngineError;

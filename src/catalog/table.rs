//! Catalog for species lookup.
//!
//! The `Catalog` stores all species records known to the engine.
//! It provides fast lookup by `SpeciesId` and supports iteration.
//! The engine only ever reads from it: entries added to a collection are
//! deep copies of catalog rows, never references into the catalog.

use rustc_hash::FxHashMap;

use super::record::{SpeciesId, SpeciesRecord, TypeTag};

/// Registry of species records.
///
/// ## Example
///
/// ```
/// use bestiary::{Catalog, SpeciesId, SpeciesRecord, TypeTag};
///
/// let mut catalog = Catalog::new();
///
/// let sprout = SpeciesRecord::new(SpeciesId::new(1), "Sprout", TypeTag::Grass, 45, 49, true);
/// catalog.register(sprout);
///
/// let found = catalog.get(SpeciesId::new(1)).unwrap();
/// assert_eq!(found.name, "Sprout");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: FxHashMap<SpeciesId, SpeciesRecord>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a species record.
    ///
    /// Panics if a record with the same ID already exists.
    pub fn register(&mut self, record: SpeciesRecord) {
        if self.records.contains_key(&record.id) {
            panic!("Species with ID {:?} already registered", record.id);
        }
        self.records.insert(record.id, record);
    }

    /// Get a species record by ID.
    #[must_use]
    pub fn get(&self, id: SpeciesId) -> Option<&SpeciesRecord> {
        self.records.get(&id)
    }

    /// Get a species record by ID, panicking if not found.
    ///
    /// Use when you're certain the species exists.
    #[must_use]
    pub fn get_unchecked(&self, id: SpeciesId) -> &SpeciesRecord {
        self.records.get(&id).expect("Species not found in catalog")
    }

    /// Check if a species ID is registered.
    #[must_use]
    pub fn contains(&self, id: SpeciesId) -> bool {
        self.records.contains_key(&id)
    }

    /// Get the number of registered species.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all species records.
    pub fn iter(&self) -> impl Iterator<Item = &SpeciesRecord> {
        self.records.values()
    }

    /// Find species by type.
    pub fn find_by_type(&self, kind: TypeTag) -> impl Iterator<Item = &SpeciesRecord> {
        self.records.values().filter(move |r| r.kind == kind)
    }

    /// Find species matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &SpeciesRecord>
    where
        F: Fn(&SpeciesRecord) -> bool,
    {
        self.records.values().filter(move |r| predicate(r))
    }
}

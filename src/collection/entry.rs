//! Collection entries - owned species copies.
//!
//! An `Entry` is the deep copy of a catalog record made when a species is
//! added to a collection. It owns its name string independently, so a
//! collection never borrows from the catalog it was populated from.

use serde::{Deserialize, Serialize};

use crate::catalog::{SpeciesId, SpeciesRecord, TypeTag};

/// An owned species entry stored in a collection tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Species identifier; the key of the collection tree.
    pub id: SpeciesId,

    /// Owned copy of the species name.
    pub name: String,

    /// Elemental type.
    pub kind: TypeTag,

    /// Hit points.
    pub hp: i32,

    /// Attack.
    pub attack: i32,

    /// Whether the species can evolve into its successor identifier.
    pub evolvable: bool,
}

impl Entry {
    /// Deep-copy a catalog record into an owned entry.
    #[must_use]
    pub fn from_record(record: &SpeciesRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            kind: record.kind,
            hp: record.hp,
            attack: record.attack,
            evolvable: record.evolvable,
        }
    }
}

impl From<&SpeciesRecord> for Entry {
    fn from(record: &SpeciesRecord) -> Self {
        Self::from_record(record)
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Type: {}, HP: {}, Attack: {}, Can Evolve: {}",
            self.id.raw(),
            self.name,
            self.kind,
            self.hp,
            self.attack,
            if self.evolvable { "Yes" } else { "No" }
        )
    }
}

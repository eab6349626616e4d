//! Species records - static species data.
//!
//! `SpeciesRecord` holds the immutable properties of a species as listed in
//! the catalog. Collections never store records directly; an owned copy is
//! made on insertion (see `collection::Entry`).

use serde::{Deserialize, Serialize};

/// Unique identifier for a species.
///
/// Identifiers are dense: the reference catalog runs 1..=151 with no gaps.
/// The ordering of identifiers is the ordering of the collection tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpeciesId(pub u16);

impl SpeciesId {
    /// Create a new species ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The next sequential identifier.
    ///
    /// "Evolves into" is implicit: it is always the successor identifier.
    #[must_use]
    pub const fn successor(self) -> SpeciesId {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Species({})", self.0)
    }
}

/// Elemental type of a species.
///
/// The set is fixed; the engine never interprets it beyond display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Grass,
    Fire,
    Water,
    Bug,
    Normal,
    Poison,
    Electric,
    Ground,
    Fairy,
    Fighting,
    Psychic,
    Rock,
    Ghost,
    Dragon,
    Ice,
}

impl TypeTag {
    /// Upper-case display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Grass => "GRASS",
            TypeTag::Fire => "FIRE",
            TypeTag::Water => "WATER",
            TypeTag::Bug => "BUG",
            TypeTag::Normal => "NORMAL",
            TypeTag::Poison => "POISON",
            TypeTag::Electric => "ELECTRIC",
            TypeTag::Ground => "GROUND",
            TypeTag::Fairy => "FAIRY",
            TypeTag::Fighting => "FIGHTING",
            TypeTag::Psychic => "PSYCHIC",
            TypeTag::Rock => "ROCK",
            TypeTag::Ghost => "GHOST",
            TypeTag::Dragon => "DRAGON",
            TypeTag::Ice => "ICE",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static species definition.
///
/// One immutable row of the catalog. The evolvable flag is true exactly when
/// the species' evolved form is the next sequential identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    /// Unique identifier for this species.
    pub id: SpeciesId,

    /// Species name (for display/debugging).
    pub name: String,

    /// Elemental type.
    pub kind: TypeTag,

    /// Base hit points.
    pub hp: i32,

    /// Base attack.
    pub attack: i32,

    /// Whether an evolved form exists at the successor identifier.
    pub evolvable: bool,
}

impl SpeciesRecord {
    /// Create a new species record.
    #[must_use]
    pub fn new(
        id: SpeciesId,
        name: impl Into<String>,
        kind: TypeTag,
        hp: i32,
        attack: i32,
        evolvable: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            hp,
            attack,
            evolvable,
        }
    }
}

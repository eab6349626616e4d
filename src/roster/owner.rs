//! Owners - named holders of one collection each.

use crate::collection::Collection;

/// A named participant holding exactly one collection.
///
/// The owner exclusively owns its name and its tree; dropping an owner drops
/// the whole collection with it.
#[derive(Clone, Debug, Default)]
pub struct Owner {
    /// Display name; the key for by-name lookup in the roster.
    pub name: String,

    /// The owner's collection tree.
    pub collection: Collection,
}

impl Owner {
    /// Create an owner around an existing collection.
    #[must_use]
    pub fn new(name: impl Into<String>, collection: Collection) -> Self {
        Self {
            name: name.into(),
            collection,
        }
    }

    /// Create an owner with an empty collection.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Collection::new())
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

//! Engine error type.
//!
//! Every failure the engine can report is recoverable: the operation returns
//! an error value and the structure it ran against is left unchanged.
//! Callers decide any user-facing message.

use thiserror::Error;

use crate::catalog::SpeciesId;
use crate::roster::OwnerId;

/// Errors reported by collection and roster operations.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The identifier has no row in the catalog.
    #[error("{0} is not in the catalog")]
    UnknownSpecies(SpeciesId),

    /// The identifier is not present in the collection.
    #[error("{0} is not in this collection")]
    SpeciesNotFound(SpeciesId),

    /// An entry with this identifier already exists in the collection.
    #[error("{0} is already in this collection")]
    AlreadyExists(SpeciesId),

    /// The operation requires a non-empty collection.
    #[error("the collection is empty")]
    EmptyCollection,

    /// The catalog marks this species as unable to evolve.
    #[error("{0} cannot evolve")]
    NotEvolvable(SpeciesId),

    /// The owner id is vacant or was already unlinked.
    #[error("{0} is not in the roster")]
    OwnerNotFound(OwnerId),

    /// The operation requires a non-empty roster.
    #[error("the roster is empty")]
    EmptyRoster,
}

//! Owner roster: the circular registry of named collection owners.

pub mod owner;
pub mod ring;

pub use owner::Owner;
pub use ring::{Direction, OwnerId, OwnersIter, Roster, WalkIter};

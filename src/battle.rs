//! Battle scoring.
//!
//! A pure comparison of two looked-up entries. Nothing here mutates a
//! collection; the caller looks both entries up and keeps them afterwards.

use serde::{Deserialize, Serialize};

use crate::catalog::SpeciesId;
use crate::collection::Entry;

/// Attack weighs more than bulk.
const ATTACK_WEIGHT: f64 = 1.5;
const HP_WEIGHT: f64 = 1.2;

/// Result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Single winner.
    Winner(SpeciesId),
    /// Equal scores.
    Tie,
}

impl BattleOutcome {
    /// Check if a species won.
    #[must_use]
    pub fn is_winner(&self, id: SpeciesId) -> bool {
        matches!(self, BattleOutcome::Winner(winner) if *winner == id)
    }
}

/// Both scores plus the outcome.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub first_score: f64,
    pub second_score: f64,
    pub outcome: BattleOutcome,
}

/// Battle score of a single entry.
#[must_use]
pub fn score(entry: &Entry) -> f64 {
    entry.attack as f64 * ATTACK_WEIGHT + entry.hp as f64 * HP_WEIGHT
}

/// Score two entries against each other; the higher score wins.
#[must_use]
pub fn battle(first: &Entry, second: &Entry) -> BattleReport {
    let first_score = score(first);
    let second_score = score(second);

    let outcome = if first_score > second_score {
        BattleOutcome::Winner(first.id)
    } else if second_score > first_score {
        BattleOutcome::Winner(second.id)
    } else {
        BattleOutcome::Tie
    };

    BattleReport {
        first_score,
        second_score,
        outcome,
    }
}

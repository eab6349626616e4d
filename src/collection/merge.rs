//! Merge engine.
//!
//! Combines two collections into the target. The source is consumed by
//! value: its entries are taken in pre-order and inserted into the target
//! wherever the identifier is absent. Entries whose identifier the target
//! already holds are dropped with the source, so the target keeps its own
//! entry for every identifier present in both.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::tree::Collection;

/// What a merge did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    /// Entries relocated from the source into the target.
    pub absorbed: usize,

    /// Source entries dropped because the target already had the id.
    pub duplicates: usize,
}

impl Collection {
    /// Absorb every entry of `source` whose identifier is not already here.
    ///
    /// The source's pre-order linearization fixes the relocation order;
    /// semantically only the resulting identifier set matters. Taking
    /// `source` by value is the "caller must discard the source" contract
    /// from the reference design, made structural.
    #[instrument(level = "trace", skip_all)]
    pub fn merge(&mut self, mut source: Collection) -> MergeStats {
        let order = source.linearize();
        let mut stats = MergeStats::default();

        for id in order {
            let entry = source.take(id);
            match self.insert(entry) {
                Ok(_) => stats.absorbed += 1,
                Err(_) => stats.duplicates += 1,
            }
        }

        debug!(
            absorbed = stats.absorbed,
            duplicates = stats.duplicates,
            total = self.len(),
            "collections merged"
        );
        stats
    }
}

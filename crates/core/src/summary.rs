//! Collection aggregates derived from a fetched card list.

use crate::card::Card;

/// Derived aggregates over one owner's collection.
///
/// Always recomputed whole from a fresh list; never patched incrementally.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CollectionSummary {
    pub count: usize,
    pub total_balance: f64,
}

impl CollectionSummary {
    pub fn empty() -> Self {
        Self {
            count: 0,
            total_balance: 0.0,
        }
    }
}

/// Compute count and total balance for a collection.
pub fn summarize(cards: &[Card]) -> CollectionSummary {
    CollectionSummary {
        count: cards.len(),
        total_balance: cards.iter().map(|c| c.balance).sum(),
    }
}

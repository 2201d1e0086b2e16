use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use labstock_core::InventoryItem;

/// One lookup event: which item was consulted and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEntry {
    pub queried_at: DateTime<Utc>,
    pub item: InventoryItem,
}

/// Recency stack of lookup events (LIFO).
///
/// A running log of consultations, not a consumable resource:
/// [`recent`](Self::recent) peeks at the newest entries without removing
/// them. Use [`pop_last`](Self::pop_last) when the caller actually wants to
/// consume the most recent lookup.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: Vec<QueryEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a lookup event on top of the stack. O(1) amortized.
    pub fn push(&mut self, item: InventoryItem, queried_at: DateTime<Utc>) {
        tracing::trace!(item = item.name(), "lookup recorded");
        self.entries.push(QueryEntry { queried_at, item });
    }

    /// The top `n` entries, most-recent-first, without removing them.
    ///
    /// Returns fewer than `n` when the cache holds fewer; an empty cache
    /// yields an empty sequence.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &QueryEntry> {
        self.entries.iter().rev().take(n)
    }

    /// Remove and return the most recent entry, if any.
    pub fn pop_last(&mut self) -> Option<QueryEntry> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

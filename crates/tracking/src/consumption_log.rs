use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use labstock_core::InventoryItem;

/// One consumption event: which item was consumed and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionEntry {
    pub recorded_at: DateTime<Utc>,
    pub item: InventoryItem,
}

/// Chronological queue of daily consumption events (FIFO).
///
/// Entries come back from [`history`](Self::history) in exactly the order
/// they were recorded; reading is non-destructive and restartable. There is
/// no capacity bound and no eviction.
#[derive(Debug, Clone, Default)]
pub struct ConsumptionLog {
    entries: VecDeque<ConsumptionEntry>,
}

impl ConsumptionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a consumption event to the tail. O(1) amortized.
    ///
    /// `recorded_at` is the caller's clock reading; callers are expected to
    /// supply non-decreasing timestamps.
    pub fn record(&mut self, item: InventoryItem, recorded_at: DateTime<Utc>) {
        tracing::trace!(item = item.name(), "consumption recorded");
        self.entries.push_back(ConsumptionEntry { recorded_at, item });
    }

    /// All entries in insertion (chronological) order, without removing them.
    pub fn history(&self) -> impl Iterator<Item = &ConsumptionEntry> {
        self.entries.iter()
    }

    /// Remove and return the oldest entry, if any (FIFO consumption).
    pub fn take_next(&mut self) -> Option<ConsumptionEntry> {
        self.entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Consumption and lookup tracking structures.
//!
//! Two append-only, in-memory logs over [`labstock_core::InventoryItem`]:
//! a chronological queue of consumption events and a recency stack of
//! lookup events. Timestamps are supplied by the caller; these structures
//! never read the clock.

pub mod consumption_log;
pub mod query_cache;

pub use consumption_log::{ConsumptionEntry, ConsumptionLog};
pub use query_cache::{QueryCache, QueryEntry};

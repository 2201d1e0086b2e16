//! The console walkthrough exercising every structure once.

use anyhow::Result;
use chrono::Utc;

use labstock_core::InventoryItem;
use labstock_search::{binary_search, linear_search};
use labstock_sort::{merge_sort, quick_sort};
use labstock_tracking::{ConsumptionLog, QueryCache};

use crate::generate::generate_batch;

fn format_item(item: &InventoryItem) -> String {
    format!(
        "{:<18}  qty={:>3}  exam={:<24}  expiry={}",
        item.name(),
        item.quantity(),
        item.exam_type(),
        item.expiry().format("%Y-%m-%d"),
    )
}

/// Run the full demonstration against a freshly generated batch.
pub fn run_demo() -> Result<()> {
    println!("=== labstock: data-structure walkthrough ===");
    let batch = generate_batch(12, 42)?;

    println!("\nSample data (unsorted):");
    for item in batch.iter().take(6) {
        println!("   {}", format_item(item));
    }

    // Queue: chronological consumption log.
    let mut log = ConsumptionLog::new();
    for item in batch.iter().take(5) {
        log.record(item.clone(), Utc::now());
    }
    println!("\nConsumption log ({} entries, oldest first):", log.len());
    for entry in log.history() {
        println!(
            "   {} -> {}",
            entry.recorded_at.format("%H:%M:%S"),
            entry.item.name()
        );
    }

    // Stack: recency cache of lookups.
    let mut cache = QueryCache::new();
    for item in batch.iter().take(5) {
        cache.push(item.clone(), Utc::now());
    }
    println!("\nQuery cache ({} entries, most recent first):", cache.len());
    for entry in cache.recent(cache.len()) {
        println!(
            "   {} -> {}",
            entry.queried_at.format("%H:%M:%S"),
            entry.item.name()
        );
    }

    // Searches: linear over the raw batch, binary over a name-sorted copy.
    let target = batch[0].name();
    match linear_search(&batch, target) {
        Some(found) => println!("\nLinear search for '{target}': {}", format_item(found)),
        None => println!("\nLinear search for '{target}': not found"),
    }

    let by_name = merge_sort(&batch, |i: &InventoryItem| i.name_key());
    match binary_search(&by_name, target) {
        Some(found) => println!("Binary search for '{target}': {}", format_item(found)),
        None => println!("Binary search for '{target}': not found"),
    }

    // Sorts: restock priority and FEFO dispensing.
    let by_quantity = merge_sort(&batch, |i: &InventoryItem| i.quantity());
    println!("\nTop 5 lowest quantities (merge sort, restock priority):");
    for item in by_quantity.iter().take(5) {
        println!("   {}", format_item(item));
    }

    let by_expiry = quick_sort(&batch, |i: &InventoryItem| i.expiry());
    println!("\nTop 5 soonest expiries (quick sort, FEFO):");
    for item in by_expiry.iter().take(5) {
        println!("   {}", format_item(item));
    }

    println!("\nEnd of demonstration.\n");
    Ok(())
}

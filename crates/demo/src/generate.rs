//! Seeded synthetic inventory batches.

use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use labstock_core::{DomainResult, InventoryItem};

/// Exam types a supply can be consumed by.
pub const EXAM_TYPES: &[&str] = &[
    "Complete blood count",
    "Microbiological culture",
    "Fasting glucose",
    "PCR",
    "Serology (HIV)",
];

/// Supply name pool (reagents and disposables).
pub const SUPPLY_NAMES: &[&str] = &[
    "Needle 25x7",
    "Sterile swab",
    "Syringe 5ml",
    "EDTA tube 4ml",
    "Nitrile glove M",
    "Nitrile glove L",
    "Citrate tube 3.2%",
];

/// Generate `count` items with random quantities (1..=200) and expiry dates
/// within a year of today. Seeded, so the same seed yields the same batch.
pub fn generate_batch(count: usize, seed: u64) -> DomainResult<Vec<InventoryItem>> {
    let today = Utc::now().date_naive();
    generate_batch_from(count, seed, today)
}

/// Same as [`generate_batch`] but with an explicit base date, for
/// deterministic output in tests.
pub fn generate_batch_from(
    count: usize,
    seed: u64,
    base: NaiveDate,
) -> DomainResult<Vec<InventoryItem>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let name = SUPPLY_NAMES[rng.gen_range(0..SUPPLY_NAMES.len())];
        let exam_type = EXAM_TYPES[rng.gen_range(0..EXAM_TYPES.len())];
        let quantity = rng.gen_range(1..=200);
        let expiry = base + Duration::days(rng.gen_range(0..=365));
        items.push(InventoryItem::new(name, quantity, exam_type, expiry)?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn same_seed_same_batch() {
        let a = generate_batch_from(12, 42, base()).unwrap();
        let b = generate_batch_from(12, 42, base()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_batch_from(12, 42, base()).unwrap();
        let b = generate_batch_from(12, 43, base()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_items_are_within_bounds() {
        let items = generate_batch_from(50, 7, base()).unwrap();
        for item in &items {
            assert!((1..=200).contains(&item.quantity()));
            assert!(SUPPLY_NAMES.contains(&item.name()));
            assert!(EXAM_TYPES.contains(&item.exam_type()));
            let days = (item.expiry() - base()).num_days();
            assert!((0..=365).contains(&days));
        }
    }
}

//! Name lookup over item collections.
//!
//! Two strategies with the same observable contract: find an item whose
//! case-folded name equals the case-folded target. Absence is `None`, never
//! an error.

use labstock_core::InventoryItem;

/// Scan `items` front to back and return the first case-insensitive name
/// match.
///
/// Works on any ordering of input. When several items share the target name,
/// the first occurrence in input order wins. O(n).
pub fn linear_search<'a>(items: &'a [InventoryItem], name: &str) -> Option<&'a InventoryItem> {
    let target = name.to_lowercase();
    items.iter().find(|item| item.name_key() == target)
}

/// Halving-interval search over `sorted_items`.
///
/// Precondition: `sorted_items` is sorted ascending by
/// [`InventoryItem::name_key`]. This is a caller contract; it is deliberately
/// not checked at runtime (a check would cost the O(log n) bound), and the
/// result on unsorted input is unspecified. When several items share the
/// target name, which one is returned is also unspecified.
pub fn binary_search<'a>(
    sorted_items: &'a [InventoryItem],
    name: &str,
) -> Option<&'a InventoryItem> {
    let target = name.to_lowercase();
    let mut lo = 0usize;
    let mut hi = sorted_items.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let current = sorted_items[mid].name_key();
        if current == target {
            return Some(&sorted_items[mid]);
        }
        if current < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    None
}

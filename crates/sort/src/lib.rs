//! Key-parameterized comparison sorts for prioritization views.
//!
//! Both sorts take a key-extraction function and return a **new** ordered
//! `Vec`; the input is never mutated. The demo uses them for restock
//! priority (quantity ascending), FEFO dispensing (expiry ascending) and to
//! prepare name-sorted input for binary search, but they are generic over
//! any `T: Clone` and any totally-ordered key.

/// Stable merge sort. O(n log n) time, O(n) auxiliary space.
///
/// On equal keys the merge takes from the left (first) half, so elements
/// with equal keys keep their relative input order.
pub fn merge_sort<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    merge_sort_by(items, &key)
}

fn merge_sort_by<T, K, F>(items: &[T], key: &F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = merge_sort_by(&items[..mid], key);
    let right = merge_sort_by(&items[mid..], key);
    merge(&left, &right, key)
}

fn merge<T, K, F>(left: &[T], right: &[T], key: &F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        // `<=` keeps the left element on ties; this is what makes the sort
        // stable.
        if key(&left[i]) <= key(&right[j]) {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

/// Quick sort with a deterministic middle-element pivot.
///
/// Three-way partition (less / equal / greater than the pivot key), recursing
/// on the outer partitions. Average O(n log n), worst O(n²). Stability is
/// **not** guaranteed; callers needing deterministic order on ties should use
/// [`merge_sort`].
pub fn quick_sort<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    quick_sort_by(items, &key)
}

fn quick_sort_by<T, K, F>(items: &[T], key: &F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return items.to_vec();
    }
    let pivot = key(&items[items.len() / 2]);

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for item in items {
        match key(item).cmp(&pivot) {
            std::cmp::Ordering::Less => less.push(item.clone()),
            std::cmp::Ordering::Equal => equal.push(item.clone()),
            std::cmp::Ordering::Greater => greater.push(item.clone()),
        }
    }

    let mut out = quick_sort_by(&less, key);
    out.extend(equal);
    out.extend(quick_sort_by(&greater, key));
    out
}

use std::collections::HashSet;
use std::hash::Hash;

/// Drops repeated rows, keeping the first occurrence of each in input order.
pub(crate) fn dedupe_preserving_order<T, I>(rows: I) -> Vec<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for row in rows {
        if seen.insert(row.clone()) {
            kept.push(row);
        }
    }
    kept
}

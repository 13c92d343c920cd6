//! First-occurrence deduplication

use std::collections::HashSet;
use std::hash::Hash;
use tracing::trace;

/// Remove duplicated elements in place, keeping the first occurrence of each
///
/// The relative order of the retained elements is unchanged and the vector
/// shrinks by the number of duplicates removed.
///
/// ```
/// use policy_util::array::array_remove_duplicates;
///
/// let mut roles = vec!["a", "b", "a", "c", "b"];
/// array_remove_duplicates(&mut roles);
/// assert_eq!(roles, vec!["a", "b", "c"]);
/// ```
pub fn array_remove_duplicates<T: Eq + Hash + Clone>(s: &mut Vec<T>) {
    let before = s.len();
    let mut found = HashSet::with_capacity(before);
    s.retain(|x| found.insert(x.clone()));

    if s.len() != before {
        trace!(removed = before - s.len(), "Removed duplicate array entries");
    }
}

/// Non-mutating form of [`array_remove_duplicates`]
pub fn deduplicated<T: Eq + Hash + Clone>(s: &[T]) -> Vec<T> {
    let mut found = HashSet::with_capacity(s.len());
    s.iter()
        .filter(|x| found.insert(*x))
        .cloned()
        .collect()
}

//! Equality checks for string arrays and string sets

/// Determine whether two arrays hold the same elements in the same order
///
/// Arrays of different length are unequal without comparing elements.
///
/// ```
/// use policy_util::array::array_equals;
///
/// assert!(array_equals(&["a", "b"], &["a", "b"]));
/// assert!(!array_equals(&["a", "b"], &["b", "a"]));
/// assert!(!array_equals(&["a"], &["a", "b"]));
/// ```
pub fn array_equals<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Determine whether two 2-dimensional arrays are identical, row by row
pub fn array_2d_equals<T: PartialEq>(a: &[Vec<T>], b: &[Vec<T>]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).all(|(x, y)| array_equals(x, y))
}

/// Determine whether two arrays hold the same values regardless of order
///
/// **Mutates both arguments**: when the lengths match, `a` and `b` are sorted
/// in place before being compared, and stay sorted afterwards. Use
/// [`is_same_set`] to compare without touching the inputs.
///
/// ```
/// use policy_util::array::set_equals;
///
/// let mut a = vec!["b", "a"];
/// let mut b = vec!["a", "b"];
/// assert!(set_equals(&mut a, &mut b));
/// assert_eq!(a, vec!["a", "b"]);
/// ```
pub fn set_equals<T: Ord>(a: &mut [T], b: &mut [T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.sort();
    b.sort();

    array_equals(a, b)
}

/// Non-mutating form of [`set_equals`]
///
/// Sorts borrowed views of the inputs, so the caller's order is preserved.
pub fn is_same_set<T: Ord>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut a: Vec<&T> = a.iter().collect();
    let mut b: Vec<&T> = b.iter().collect();
    set_equals(&mut a, &mut b)
}

//! Bounds-checked indexing that accepts any signed index.

/// Returns the element at `index`, or `None` if `index` is negative or past
/// the end.
///
/// ```
/// use seqtools::safe_index::safe_get;
///
/// let items = [10, 20, 30];
/// assert_eq!(safe_get(&items, 1), Some(&20));
/// assert_eq!(safe_get(&items, 5), None);
/// assert_eq!(safe_get(&items, -1), None);
/// ```
pub fn safe_get<T>(items: &[T], index: isize) -> Option<&T> {
    let index = usize::try_from(index).ok()?;
    return items.get(index);
}

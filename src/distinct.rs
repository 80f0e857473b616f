//! Order-preserving deduplication.
//!
//! Both functions scan a growing accumulator for every input element, which
//! costs O(n^2) comparisons in the worst case. The quadratic bound is part of
//! the contract: it needs nothing beyond a comparison predicate. Callers that
//! want linear time on hashable elements should dedupe with a `HashSet`
//! themselves.

/// Keep the first occurrence of each element under `eq`, in input order.
///
/// For every element `x`, `x` is appended to the output unless some element
/// `y` already in the output satisfies `eq(x, y)`. The predicate is called
/// with the candidate first and the kept element second. It need not be a
/// true equivalence relation; no check is made.
///
/// ```
/// use seqtools::distinct::distinct_by;
///
/// let words = ["Apple", "avocado", "Banana", "blueberry", "cherry"];
/// let by_initial = distinct_by(&words, |a, b| {
///     a.chars().next().map(|c| c.to_ascii_lowercase())
///         == b.chars().next().map(|c| c.to_ascii_lowercase())
/// });
/// assert_eq!(by_initial, vec!["Apple", "Banana", "cherry"]);
/// ```
pub fn distinct_by<T, F>(items: &[T], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut result: Vec<T> = Vec::new();
    for x in items {
        if !result.iter().any(|y| eq(x, y)) {
            result.push(x.clone());
        }
    }
    return result;
}

/// Keep the first occurrence of each element under `==`, in input order.
///
/// ```
/// use seqtools::distinct::distinct;
///
/// assert_eq!(distinct(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn distinct<T>(items: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    return distinct_by(items, <T as PartialEq>::eq);
}

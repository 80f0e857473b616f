//! Semigroups and left folds over them.
//!
//! A semigroup is a type with an associative binary operation. There is no
//! identity element, so folding always takes a caller-supplied seed.

use std::collections::VecDeque;

/// A type with an associative `combine`.
///
/// Implementors must guarantee
/// `a.combine(&b.combine(&c)) == a.combine(&b).combine(&c)`.
pub trait Semigroup: Sized {
    /// Combine `self` with `other`, `self` on the left.
    fn combine(&self, other: &Self) -> Self;

    /// Combine `other` into `self` in place.
    fn combine_assign(&mut self, other: &Self) {
        *self = self.combine(other);
    }
}

/// Vectors combine by concatenation: `a` followed by `b`.
impl<T: Clone> Semigroup for Vec<T> {
    fn combine(&self, other: &Self) -> Self {
        let mut result = Vec::with_capacity(self.len() + other.len());
        result.extend_from_slice(self);
        result.extend_from_slice(other);
        return result;
    }

    fn combine_assign(&mut self, other: &Self) {
        self.extend_from_slice(other);
    }
}

impl<T: Clone> Semigroup for VecDeque<T> {
    fn combine(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend(other.iter().cloned());
        return result;
    }
}

impl Semigroup for String {
    fn combine(&self, other: &Self) -> Self {
        let mut result = String::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        return result;
    }

    fn combine_assign(&mut self, other: &Self) {
        self.push_str(other);
    }
}

impl Semigroup for () {
    fn combine(&self, _other: &Self) -> Self {}
}

/// Present values combine, an absent side leaves the other as it is.
impl<S: Semigroup + Clone> Semigroup for Option<S> {
    fn combine(&self, other: &Self) -> Self {
        return match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a.clone()),
            (None, Some(b)) => Some(b.clone()),
            (None, None) => None,
        };
    }
}

/// Fold `items` onto `initial` from the left.
///
/// Computes `initial.combine(&items[0]).combine(&items[1])...` in exactly
/// that order and grouping. An empty `items` returns `initial` unchanged.
///
/// ```
/// use seqtools::semigroup::sconcat;
///
/// let parts = [String::from("ab"), String::from("c")];
/// assert_eq!(sconcat(&parts, String::from(">")), ">abc");
/// ```
pub fn sconcat<S: Semigroup>(items: &[S], initial: S) -> S {
    let mut result = initial;
    for item in items {
        result.combine_assign(item);
    }
    return result;
}

/// Fold `items` from the left using the first element as the seed.
///
/// Returns `None` for an empty slice.
pub fn sconcat1<S: Semigroup + Clone>(items: &[S]) -> Option<S> {
    let (first, rest) = items.split_first()?;
    return Some(sconcat(rest, first.clone()));
}

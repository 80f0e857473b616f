//! Method-call access to every operation, for anything that derefs to a slice.

use crate::compact::OptionLike;
use crate::distinct;
use crate::random;
use crate::random::UniformSource;
use crate::safe_index;
use crate::semigroup;
use crate::semigroup::Semigroup;

/// Extension methods over an ordered sequence of `T`.
///
/// Each method forwards to the free function of the same name. Capability
/// bounds are placed on the individual methods, so a `[T]` gets exactly the
/// methods its element type supports.
pub trait SequenceExt<T> {
    /// See [`safe_index::safe_get`].
    fn safe_get(&self, index: isize) -> Option<&T>;

    /// See [`random::pick_random_with`].
    fn random_element_with<S>(&self, source: &mut S) -> Option<&T>
    where
        S: UniformSource + ?Sized;

    /// See [`random::pick_random`].
    #[cfg(feature = "thread-rng")]
    fn random_element(&self) -> Option<&T>;

    /// See [`distinct::distinct_by`]. Worst case O(n^2).
    fn distinct_by<F>(&self, eq: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool;

    /// See [`distinct::distinct`]. Worst case O(n^2).
    fn distinct(&self) -> Vec<T>
    where
        T: Clone + PartialEq;

    /// See [`semigroup::sconcat`].
    fn sconcat(&self, initial: T) -> T
    where
        T: Semigroup;

    /// Clones the value of every present element, in order.
    ///
    /// See [`crate::compact::compact`] for the borrowing and consuming forms.
    fn compact<U>(&self) -> Vec<U>
    where
        T: Clone + OptionLike<Wrapped = U>;
}

impl<T> SequenceExt<T> for [T] {
    fn safe_get(&self, index: isize) -> Option<&T> {
        return safe_index::safe_get(self, index);
    }

    fn random_element_with<S>(&self, source: &mut S) -> Option<&T>
    where
        S: UniformSource + ?Sized,
    {
        return random::pick_random_with(self, source);
    }

    #[cfg(feature = "thread-rng")]
    fn random_element(&self) -> Option<&T> {
        return random::pick_random(self);
    }

    fn distinct_by<F>(&self, eq: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        return distinct::distinct_by(self, eq);
    }

    fn distinct(&self) -> Vec<T>
    where
        T: Clone + PartialEq,
    {
        return distinct::distinct(self);
    }

    fn sconcat(&self, initial: T) -> T
    where
        T: Semigroup,
    {
        return semigroup::sconcat(self, initial);
    }

    fn compact<U>(&self) -> Vec<U>
    where
        T: Clone + OptionLike<Wrapped = U>,
    {
        return crate::compact::compact(self.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl UniformSource for Fixed {
        fn below(&mut self, bound: usize) -> usize {
            return self.0 % bound;
        }
    }

    #[test]
    fn methods_on_vec_and_array() {
        let items = vec![10, 20, 30];
        assert_eq!(items.safe_get(1), Some(&20));
        assert_eq!(items.safe_get(3), None);
        assert_eq!([10, 20, 30].safe_get(-1), None);
    }

    #[test]
    fn random_element_with_injected_source() {
        let items = ["x", "y", "z"];
        assert_eq!(items.random_element_with(&mut Fixed(4)), Some(&"y"));
        let empty: Vec<&str> = Vec::new();
        assert_eq!(empty.random_element_with(&mut Fixed(0)), None);
    }

    #[test]
    fn distinct_methods() {
        let items = vec![3, 1, 3, 2, 1];
        assert_eq!(items.distinct(), vec![3, 1, 2]);
        assert_eq!(items.distinct_by(|a, b| a % 2 == b % 2), vec![3, 2]);
    }

    #[test]
    fn sconcat_method() {
        let items = vec![vec![1, 2], vec![], vec![3]];
        assert_eq!(items.sconcat(vec![0]), vec![0, 1, 2, 3]);
    }

    #[test]
    fn compact_method_clones_values() {
        let items = vec![Some(String::from("a")), None, Some(String::from("b"))];
        let compacted: Vec<String> = items.compact();
        assert_eq!(compacted, vec![String::from("a"), String::from("b")]);
        assert_eq!(items.len(), 3);
    }
}

//! Uniform random selection of an element.
//!
//! The randomness source is injected through [`UniformSource`], so callers
//! can pass any `rand` generator, or a deterministic stub in tests.

use rand::Rng;
use rand_core::RngCore;

/// A generator of uniformly distributed indices.
pub trait UniformSource {
    /// Returns an integer drawn uniformly from `0..bound`.
    ///
    /// Callers never pass `bound == 0`.
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: RngCore> UniformSource for R {
    fn below(&mut self, bound: usize) -> usize {
        return self.gen_range(0..bound);
    }
}

/// Pick an element of `items` uniformly at random using `source`.
///
/// Each index is chosen with probability `1 / items.len()`. Returns `None`
/// for an empty slice without consulting `source`.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seqtools::random::pick_random_with;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = pick_random_with(&[1, 2, 3], &mut rng);
/// assert!(matches!(picked, Some(1..=3)));
/// assert_eq!(pick_random_with::<u8, _>(&[], &mut rng), None);
/// ```
pub fn pick_random_with<'a, T, S>(items: &'a [T], source: &mut S) -> Option<&'a T>
where
    S: UniformSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    let index = source.below(items.len());
    return items.get(index);
}

/// Pick an element of `items` uniformly at random using the thread-local
/// generator.
#[cfg(feature = "thread-rng")]
pub fn pick_random<T>(items: &[T]) -> Option<&T> {
    return pick_random_with(items, &mut rand::thread_rng());
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws, recording every bound it was asked for.
    struct Scripted {
        draws: Vec<usize>,
        bounds: Vec<usize>,
    }

    impl Scripted {
        fn new(draws: &[usize]) -> Scripted {
            return Scripted {
                draws: draws.iter().rev().copied().collect(),
                bounds: Vec::new(),
            };
        }
    }

    impl UniformSource for Scripted {
        fn below(&mut self, bound: usize) -> usize {
            self.bounds.push(bound);
            return self.draws.pop().unwrap_or(0);
        }
    }

    #[test]
    fn empty_is_none_and_does_not_draw() {
        let mut source = Scripted::new(&[0]);
        assert_eq!(pick_random_with::<i32, _>(&[], &mut source), None);
        assert!(source.bounds.is_empty());
    }

    #[test]
    fn returns_element_at_drawn_index() {
        let items = ['a', 'b', 'c'];
        let mut source = Scripted::new(&[2, 0, 1]);
        assert_eq!(pick_random_with(&items, &mut source), Some(&'c'));
        assert_eq!(pick_random_with(&items, &mut source), Some(&'a'));
        assert_eq!(pick_random_with(&items, &mut source), Some(&'b'));
        assert_eq!(source.bounds, vec![3, 3, 3]);
    }

    #[test]
    fn single_element_is_always_picked() {
        let mut rng = rand::rngs::mock::StepRng::new(0, 1);
        for _ in 0..10 {
            assert_eq!(pick_random_with(&[42], &mut rng), Some(&42));
        }
    }

    #[test]
    fn rng_source_stays_in_bounds() {
        let mut rng = rand::rngs::mock::StepRng::new(u64::MAX / 3, 0x9e37_79b9_7f4a_7c15);
        for bound in 1..50 {
            assert!(rng.below(bound) < bound);
        }
    }

    #[cfg(feature = "thread-rng")]
    #[test]
    fn thread_rng_picks_a_member() {
        let items = [1, 2, 3, 4];
        for _ in 0..20 {
            let picked = pick_random(&items);
            assert!(picked.is_some_and(|x| items.contains(x)));
        }
        assert_eq!(pick_random::<u8>(&[]), None);
    }
}

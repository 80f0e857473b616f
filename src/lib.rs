//! Seqtools - small, total operations over ordered sequences.
//!
//! Every operation borrows its input and builds a fresh output. None of them
//! panic: the two that may have no answer (random picking from an empty
//! sequence, indexing out of bounds) return `None` instead.
//!
//! | Operation | Module | Capability required of `T` |
//! |-----------|--------|----------------------------|
//! | `compact` | [`compact`] | [`OptionLike`] |
//! | `sconcat` | [`semigroup`] | [`Semigroup`] |
//! | `pick_random_with` | [`random`] | none, takes a [`UniformSource`] |
//! | `distinct` / `distinct_by` | [`distinct`] | `PartialEq` / none |
//! | `safe_get` | [`safe_index`] | none |
//!
//! # Quick Start
//!
//! ```
//! use seqtools::SequenceExt;
//! use seqtools::Semigroup;
//!
//! let words = [Some("a"), None, Some("b")];
//! assert_eq!(words.compact(), vec!["a", "b"]);
//!
//! assert_eq!([3, 1, 3, 2, 1].distinct(), vec![3, 1, 2]);
//!
//! let chunks = [vec![1, 2], vec![3]];
//! assert_eq!(chunks.sconcat(Vec::new()), vec![1, 2, 3]);
//! assert_eq!(vec![1, 2].combine(&vec![3]), vec![1, 2, 3]);
//!
//! assert_eq!([10, 20, 30].safe_get(1), Some(&20));
//! assert_eq!([10, 20, 30].safe_get(-1), None);
//! ```

pub mod compact;
pub mod distinct;
pub mod random;
pub mod safe_index;
pub mod semigroup;
pub mod sequence;

pub use compact::OptionLike;
pub use random::UniformSource;
pub use semigroup::Semigroup;
pub use sequence::SequenceExt;

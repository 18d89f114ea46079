//! The `primkit` crate collects small, dependency-light building
//! blocks: numeric [`Interval`]s with open or closed ends, and
//! `indexOf`-style search and split utilities over arbitrary slices.
//!
//! An [`Interval`] is an immutable value.  Construction validates the
//! bounds ([`Interval::new`] returns a [`Result`]), and every invalid
//! request fails with a specific [`Error`] variant.  Degenerate
//! requests, like the open interval \\((x, x)\\), collapse to the
//! canonical [`Interval::EMPTY`], so equality is structural.
//!
//! The [`arrays`] and [`split`] modules treat slices the way string
//! libraries treat strings: search for subarrays (forward or
//! backward, from a possibly negative index), check prefixes and
//! suffixes, pad, repeat, split on a value, a predicate or a
//! subarray, and join back.  Sparse sequences are slices of
//! [`Option`], with [`None`] for the holes; holes only ever match
//! holes, so the searches need no special case for them.
//!
//! The remaining modules are peripheral helpers: [`strings`] for
//! indented multiline literals, [`dates`] on top of `chrono`,
//! [`switch`] for expression-level dispatch, [`util`] for small
//! numeric and map helpers, and [`matrix`] to drive table tests.
//!
//! All operations are synchronous and allocate at most their result
//! (plus [`INLINE_SIZE`]-backed scratch).  Expensive self-checks run
//! with debug assertions or the `internal_checks` feature.

#![deny(missing_docs)]
// https://github.com/taiki-e/cargo-llvm-cov?tab=readme-ov-file#exclude-code-from-coverage
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;

pub mod arrays;
pub mod dates;
pub mod interval;
pub mod matrix;
pub mod split;
pub mod strings;
pub mod switch;
pub mod util;

pub use error::Error;
pub use error::Result;

pub use interval::Bracket;
pub use interval::Interval;

/// Inline storage (in elements) reserved in short-lived scratch
/// buffers, e.g., the current row in [`util::cartesian_product`].
pub const INLINE_SIZE: usize = if cfg!(feature = "inline_storage") {
    4
} else {
    0
};

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod test {
    use super::*;

    #[test]
    fn test_smoke() {
        let interval = Interval::closed(3.0, 5.0).unwrap();
        assert!(interval.contains(4.0));
        assert_eq!(interval.to_string(), "[3, 5]");

        let haystack = [2, 3, 5, 7, 11];
        assert_eq!(arrays::index_of_subarray(&haystack, &[5, 7], None), Some(2));

        let parts = split::split_by_subarray(&haystack, &[5], None).unwrap();
        assert_eq!(split::join_arrays_by_array(&parts, &[5]), haystack);

        assert_eq!(
            switch::sw(&4, &[(switch::Condition::Default, switch::Outcome::Value(1))]),
            Ok(1)
        );
    }

    #[test]
    fn test_inline_size() {
        if cfg!(feature = "inline_storage") {
            assert!(INLINE_SIZE > 0);
        } else {
            assert_eq!(INLINE_SIZE, 0);
        }
    }
}

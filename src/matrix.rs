//! Matrix-style test drivers: run the same check on every combination
//! of a few named variables.
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::util::cartesian_product;
use crate::INLINE_SIZE;

/// One combination of matrix variables: `(name, value)` pairs in the
/// order the variables were declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combination<'a, V> {
    entries: SmallVec<[(&'a str, &'a V); INLINE_SIZE]>,
}

impl<'a, V> Combination<'a, V> {
    /// Returns the value bound to `name`, if any.
    ///
    /// When a name is declared more than once, the last declaration
    /// wins, as if the pairs were inserted in a map in order.
    pub fn get(&self, name: &str) -> Option<&'a V> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// Returns the `(name, value)` pairs, in declaration order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[(&'a str, &'a V)] {
        &self.entries
    }

    /// Iterates over the variable names, in declaration order.
    #[inline(always)]
    pub fn names(&self) -> impl '_ + Iterator<Item = &'a str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Returns the number of `(name, value)` pairs, i.e., the number
    /// of rows in the matrix.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determines whether this is the combination of an empty matrix.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Calls `f` once for each combination of values in `matrix`.
///
/// Each entry in `matrix` names a variable and lists its possible
/// values.  The combinations enumerate the variables' values in
/// [`cartesian_product`] order (the last variable varies fastest),
/// and are passed to `f` as a [`Combination`] that keeps the
/// declaration order.
///
/// An empty matrix has exactly one (empty) combination, while a
/// variable without any value means no combination at all.
///
/// ```
/// # use primkit::matrix::matrix_strategy;
/// let mut seen = Vec::new();
/// matrix_strategy(&[("b", &[1, 2][..]), ("a", &[3, 4])], |values| {
///     assert_eq!(values.names().collect::<Vec<_>>(), ["b", "a"]);
///     seen.push(values.get("b").unwrap() * 10 + values.get("a").unwrap());
/// });
///
/// assert_eq!(seen, [13, 14, 23, 24]);
/// ```
pub fn matrix_strategy<'a, V>(matrix: &[(&'a str, &'a [V])], mut f: impl FnMut(&Combination<'a, V>)) {
    let columns: SmallVec<[Vec<&'a V>; INLINE_SIZE]> = matrix
        .iter()
        .map(|(_, values)| values.iter().collect())
        .collect();

    for combination in cartesian_product(columns.as_slice()) {
        let values = Combination {
            entries: matrix
                .iter()
                .map(|(name, _)| *name)
                .zip(combination)
                .collect(),
        };

        #[cfg(any(feature = "internal_checks", debug_assertions))]
        assert_eq!(values.len(), matrix.len());

        f(&values);
    }
}

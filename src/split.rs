//! Splitting slices into runs between separators, and joining runs
//! back together.
//!
//! Splitting never copies: each segment borrows a contiguous run of
//! the input.  Segments are emitted even when empty (e.g., between
//! two adjacent separators).
//!
//! All split functions accept an optional `limit`: at most that many
//! segments are returned, and the scan stops as soon as the limit is
//! reached.  A negative limit fails with [`Error::InvalidLimit`].
use alloc::vec::Vec;

use crate::arrays::is_subarray_at;
use crate::Error;
use crate::Result;

/// Converts an optional `limit` argument to a maximum segment count.
fn resolve_limit(limit: Option<isize>) -> Result<usize> {
    match limit {
        None => Ok(usize::MAX),
        Some(limit) => usize::try_from(limit).map_err(|_| {
            log::debug!("rejecting negative split limit {limit}");
            Error::InvalidLimit(limit)
        }),
    }
}

/// Splits `array` at every element equal to `separator`.
///
/// See [`split_by_predicate`].
#[inline(always)]
pub fn split<'a, T: PartialEq>(
    array: &'a [T],
    separator: &T,
    limit: impl Into<Option<isize>>,
) -> Result<Vec<&'a [T]>> {
    split_by_predicate(array, |value, _, _| value == separator, limit)
}

/// Splits `array` at every element for which `predicate(value, index,
/// array)` holds.  Separator elements are dropped, and the last run
/// is always emitted, so an unlimited split of `array` with `n`
/// separators always yields `n + 1` segments.
///
/// ```
/// # use primkit::split::split_by_predicate;
/// let array = [1, 2, 3, 2, 3, 2, 1];
///
/// let segments = split_by_predicate(&array, |x, _, _| *x == 3, None).unwrap();
/// assert_eq!(segments, [&[1, 2][..], &[2], &[2, 1]]);
///
/// let segments = split_by_predicate(&array, |x, _, _| *x == 3, Some(2)).unwrap();
/// assert_eq!(segments, [&[1, 2][..], &[2]]);
/// ```
pub fn split_by_predicate<'a, T>(
    array: &'a [T],
    mut predicate: impl FnMut(&T, usize, &[T]) -> bool,
    limit: impl Into<Option<isize>>,
) -> Result<Vec<&'a [T]>> {
    let limit = resolve_limit(limit.into())?;

    let mut ret = Vec::new();
    if limit == 0 {
        return Ok(ret);
    }

    let mut start = 0;
    for (idx, value) in array.iter().enumerate() {
        if predicate(value, idx, array) {
            ret.push(&array[start..idx]);
            if ret.len() >= limit {
                return Ok(ret);
            }

            start = idx + 1;
        }
    }

    ret.push(&array[start..]);

    #[cfg(any(feature = "internal_checks", debug_assertions))]
    assert_eq!(
        ret.iter().map(|segment| segment.len()).sum::<usize>() + (ret.len() - 1),
        array.len()
    );

    Ok(ret)
}

/// Splits `array` at every occurrence of the `separator` subarray.
///
/// Occurrences are found left to right, and a match skips over the
/// whole separator, so overlapping occurrences don't count.
///
/// An empty separator splits `array` into single-element segments
/// (and an empty `array` into no segment at all).
pub fn split_by_subarray<'a, T: PartialEq>(
    array: &'a [T],
    separator: &[T],
    limit: impl Into<Option<isize>>,
) -> Result<Vec<&'a [T]>> {
    let limit = resolve_limit(limit.into())?;

    let mut ret = Vec::new();
    if limit == 0 {
        return Ok(ret);
    }

    if separator.is_empty() {
        ret.extend(array.chunks(1).take(limit));
        return Ok(ret);
    }

    let mut start = 0;
    let mut idx = 0;
    while idx < array.len() {
        if is_subarray_at(array, separator, idx) {
            ret.push(&array[start..idx]);
            if ret.len() >= limit {
                return Ok(ret);
            }

            idx += separator.len();
            start = idx;
        } else {
            idx += 1;
        }
    }

    ret.push(&array[start..]);

    #[cfg(any(feature = "internal_checks", debug_assertions))]
    assert_eq!(
        ret.iter().map(|segment| segment.len()).sum::<usize>()
            + (ret.len() - 1) * separator.len(),
        array.len()
    );

    Ok(ret)
}

/// Concatenates `arrays`, with a copy of `separator` between
/// consecutive segments.
#[inline(always)]
pub fn join_arrays<T: Clone>(arrays: &[impl AsRef<[T]>], separator: T) -> Vec<T> {
    join_arrays_by_array(arrays, core::slice::from_ref(&separator))
}

/// Concatenates `arrays`, with a copy of the `separator` subarray
/// between consecutive segments.
///
/// This is the inverse of [`split_by_subarray`] for non-empty
/// separators.
pub fn join_arrays_by_array<T: Clone>(arrays: &[impl AsRef<[T]>], separator: &[T]) -> Vec<T> {
    let mut ret = Vec::new();

    for (idx, segment) in arrays.iter().enumerate() {
        if idx > 0 {
            ret.extend_from_slice(separator);
        }

        ret.extend_from_slice(segment.as_ref());
    }

    ret
}

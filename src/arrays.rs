//! Subarray search, padding and repetition for slices, in the style
//! of the usual string operations (`indexOf`, `startsWith`,
//! `padStart`, ...), but over arbitrary elements.
//!
//! Index arguments accept anything that converts to `Option<isize>`:
//! `None` selects the documented default, and negative indices count
//! back from the end of the slice (see [`resolve_index`]).
//!
//! Sparse sequences (with positions that hold no value at all) are
//! represented with `Option<T>` elements, with `None` for the holes.
//! Since holes then compare equal to each other and unequal to any
//! value, every search below distinguishes holes from assigned values
//! without further special-casing.
use alloc::vec::Vec;

use crate::Error;
use crate::Result;

/// Determines whether `a` and `b` have the same length and pairwise
/// equal elements, comparing across types with [`PartialEq<U>`].
///
/// This is the lenient counterpart of [`strict_equals`]: e.g., a
/// `&[String]` can be compared with a `&[&str]`.
#[inline(always)]
pub fn equals<T: PartialEq<U>, U>(a: &[T], b: &[U]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// Determines whether `a` and `b` have the same length and pairwise
/// equal elements of the same type.
///
/// Elements that aren't equal to themselves (e.g., `f64::NAN`) never
/// match.
#[inline(always)]
pub fn strict_equals<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    equals(a, b)
}

/// Resolves a possibly negative `index` against a slice of length
/// `len`, clamping to `[0, len]`.
///
/// Negative indices count back from the end: `-1` is `len - 1`, and
/// anything below `-len` clamps to 0.  Indices past the end clamp to
/// `len`.
#[inline(always)]
pub fn resolve_index(index: isize, len: usize) -> usize {
    // Zero-sized elements may have lengths past `isize::MAX`.
    let signed_len = isize::try_from(len).unwrap_or(isize::MAX);

    if index > signed_len {
        len
    } else if index < -signed_len {
        0
    } else if index < 0 {
        (signed_len + index) as usize
    } else {
        index as usize
    }
}

/// Determines whether `pattern` appears in `array` exactly at `index`.
///
/// Patterns that would run past the end of `array` never match.
#[inline(always)]
pub(crate) fn is_subarray_at<T: PartialEq>(array: &[T], pattern: &[T], index: usize) -> bool {
    index
        .checked_add(pattern.len())
        .and_then(|stop| array.get(index..stop))
        .is_some_and(|window| strict_equals(window, pattern))
}

/// Returns the index of the first occurrence of `pattern` in `array`,
/// starting the search at `from_index` (0 by default).
///
/// An empty pattern matches immediately at the (resolved) starting
/// index.
pub fn index_of_subarray<T: PartialEq>(
    array: &[T],
    pattern: &[T],
    from_index: impl Into<Option<isize>>,
) -> Option<usize> {
    let start = resolve_index(from_index.into().unwrap_or(0), array.len());
    let last = array.len().checked_sub(pattern.len())?;

    (start..=last).find(|idx| is_subarray_at(array, pattern, *idx))
}

/// Returns the index of the last occurrence of `pattern` in `array`
/// that starts at or before `from_index` (the end of `array` by
/// default).
pub fn last_index_of_subarray<T: PartialEq>(
    array: &[T],
    pattern: &[T],
    from_index: impl Into<Option<isize>>,
) -> Option<usize> {
    let last = array.len().checked_sub(pattern.len())?;
    let start = from_index
        .into()
        .map_or(array.len(), |idx| resolve_index(idx, array.len()))
        .min(last);

    (0..=start).rev().find(|idx| is_subarray_at(array, pattern, *idx))
}

/// Determines whether `pattern` appears in `array` at or after
/// `from_index` (0 by default).
#[inline(always)]
pub fn includes_subarray<T: PartialEq>(
    array: &[T],
    pattern: &[T],
    from_index: impl Into<Option<isize>>,
) -> bool {
    index_of_subarray(array, pattern, from_index).is_some()
}

/// Determines whether `pattern` appears in `array` exactly at `index`
/// (0 by default).
#[inline(always)]
pub fn starts_with<T: PartialEq>(array: &[T], pattern: &[T], index: impl Into<Option<isize>>) -> bool {
    let start = resolve_index(index.into().unwrap_or(0), array.len());
    is_subarray_at(array, pattern, start)
}

/// Determines whether `pattern` appears in `array` so that it ends
/// exactly at `end_index` (the end of `array` by default).
pub fn ends_with<T: PartialEq>(array: &[T], pattern: &[T], end_index: impl Into<Option<isize>>) -> bool {
    let stop = end_index
        .into()
        .map_or(array.len(), |idx| resolve_index(idx, array.len()));

    stop.checked_sub(pattern.len())
        .is_some_and(|start| is_subarray_at(array, pattern, start))
}

/// Prepends copies of `fill` to `array` until it is at least
/// `target_len` long, and returns `array` back.
///
/// This mutates `array` in place; see [`to_padded_start`] for a
/// copying version.
pub fn pad_start<T: Clone>(array: &mut Vec<T>, target_len: usize, fill: T) -> &mut Vec<T> {
    let missing = target_len.saturating_sub(array.len());
    if missing > 0 {
        array.splice(0..0, core::iter::repeat(fill).take(missing));
    }

    array
}

/// Appends copies of `fill` to `array` until it is at least
/// `target_len` long, and returns `array` back.
///
/// This mutates `array` in place; see [`to_padded_end`] for a
/// copying version.
pub fn pad_end<T: Clone>(array: &mut Vec<T>, target_len: usize, fill: T) -> &mut Vec<T> {
    if array.len() < target_len {
        array.resize(target_len, fill);
    }

    array
}

/// Returns a copy of `array`, padded at the start like [`pad_start`].
#[inline(always)]
pub fn to_padded_start<T: Clone>(array: &[T], target_len: usize, fill: T) -> Vec<T> {
    let mut ret = array.to_vec();
    pad_start(&mut ret, target_len, fill);
    ret
}

/// Returns a copy of `array`, padded at the end like [`pad_end`].
#[inline(always)]
pub fn to_padded_end<T: Clone>(array: &[T], target_len: usize, fill: T) -> Vec<T> {
    let mut ret = array.to_vec();
    pad_end(&mut ret, target_len, fill);
    ret
}

/// Returns `count` copies of `array`, concatenated.
///
/// Fails with [`Error::InvalidCount`] if `count` is negative.
pub fn repeat<T: Clone>(array: &[T], count: isize) -> Result<Vec<T>> {
    let Ok(count) = usize::try_from(count) else {
        log::debug!("rejecting negative repeat count {count}");
        return Err(Error::InvalidCount(count));
    };

    if array.is_empty() {
        return Ok(Vec::new());
    }

    let mut ret = Vec::with_capacity(array.len().saturating_mul(count));
    for _ in 0..count {
        ret.extend_from_slice(array);
    }

    Ok(ret)
}

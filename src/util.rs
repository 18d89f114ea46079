//! Small numeric, string and map helpers that don't deserve a module
//! of their own.
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::borrow::Borrow;
use smallvec::SmallVec;

use crate::Error;
use crate::Result;
use crate::INLINE_SIZE;

/// Returns whether `low <= value <= high`.
#[inline(always)]
pub fn between(value: f64, low: f64, high: f64) -> bool {
    (value >= low) && (value <= high)
}

/// Returns the numbers from `min` to `max` inclusive, in increments
/// of `step` (1 by default).
///
/// Values are generated by repeated addition, so non-integer steps
/// accumulate rounding the same way a hand-written loop would: e.g.,
/// `range(3.2, 6.2, None)` is `[3.2, 4.2, 5.2, 6.2]`, but `max` is
/// only included when the accumulated value actually reaches it.
///
/// Fails with [`Error::InvalidStep`] whenever the sequence would never
/// end: `step` is NaN or not positive, `max` is `+Infinity`, or `step`
/// is too small to change the running value (e.g., a step of 1 past
/// 2^53).
pub fn range(min: f64, max: f64, step: impl Into<Option<f64>>) -> Result<Vec<f64>> {
    let step = step.into().unwrap_or(1.0);
    if !(step > 0.0) || (min <= max && max == f64::INFINITY) {
        log::debug!("rejecting range({min}, {max}) with step {step}");
        return Err(Error::InvalidStep(step));
    }

    let mut ret = Vec::new();
    let mut i = min;
    while i <= max {
        ret.push(i);

        let next = i + step;
        if next == i {
            log::debug!("range({min}, {max}) stalls at {i} with step {step}");
            return Err(Error::InvalidStep(step));
        }

        i = next;
    }

    Ok(ret)
}

/// Collapses every run of whitespace in `text` to a single space, and
/// trims both ends.
pub fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Renders `n` as its shortest round-trip decimal, with exponent
/// notation (`1e+21`, `1e-7`) for magnitudes outside `[1e-6, 1e21)`.
///
/// Non-finite values print as `Infinity`, `-Infinity` and `NaN`, and
/// zero never has a sign.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }

    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if n == 0.0 {
        // Also catches -0.
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{n}");
    }

    // `{:e}` is already shortest round-trip; only the sign of the
    // exponent differs (`1e21` vs `1e+21`).
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Renders `n` with [`format_number`], then left-pads it with `pad`
/// (`'0'` by default) until it is at least `length` characters long.
pub fn pad_number(n: f64, length: usize, pad: impl Into<Option<char>>) -> String {
    let pad = pad.into().unwrap_or('0');
    let digits = format_number(n);
    let missing = length.saturating_sub(digits.chars().count());

    let mut ret = String::with_capacity(missing * pad.len_utf8() + digits.len());
    ret.extend(core::iter::repeat(pad).take(missing));
    ret.push_str(&digits);
    ret
}

/// Determines whether every key/value pair in `checks` is also present
/// in `obj` (shallow equality on the values).
///
/// An empty `checks` is trivially satisfied.
pub fn props_eq<'a, K, V>(
    obj: &BTreeMap<K, V>,
    checks: impl IntoIterator<Item = (&'a K, &'a V)>,
) -> bool
where
    K: 'a + Ord,
    V: 'a + PartialEq,
{
    checks
        .into_iter()
        .all(|(key, expected)| obj.get(key) == Some(expected))
}

/// Returns a shallow copy of `obj` without the keys in `minus_keys`.
///
/// Keys that don't appear in `obj` are ignored.
pub fn minus_props<K, V, Q>(obj: &BTreeMap<K, V>, minus_keys: &[&Q]) -> BTreeMap<K, V>
where
    K: Ord + Clone + Borrow<Q>,
    V: Clone,
    Q: ?Sized + PartialEq,
{
    obj.iter()
        .filter(|(key, _)| {
            let key: &Q = Borrow::<Q>::borrow(*key);
            !minus_keys.iter().any(|minus| *minus == key)
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Returns every sequence made of one element from each of `arrays`,
/// in lexicographic order of the input positions (the last array
/// varies fastest).
///
/// The product of zero arrays is a single empty sequence; the product
/// with any empty array is empty.
pub fn cartesian_product<T: Clone>(arrays: &[impl AsRef<[T]>]) -> Vec<Vec<T>> {
    fn doit<'a, T: Clone, A: AsRef<[T]>>(
        arrays: &'a [A],
        ret: &mut Vec<Vec<T>>,
        cur: &mut SmallVec<[&'a T; INLINE_SIZE]>,
    ) {
        let Some((head, rest)) = arrays.split_first() else {
            ret.push(cur.iter().map(|value| (*value).clone()).collect());
            return;
        };

        for value in head.as_ref() {
            cur.push(value);
            doit(rest, ret, cur);
            cur.pop();
        }
    }

    let mut ret = Vec::new();
    let mut cur = SmallVec::new();
    doit(arrays, &mut ret, &mut cur);
    ret
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod test {
    use super::*;
    use alloc::vec;
    use rstest::rstest;

    #[test]
    fn test_between() {
        assert!(between(4.0, 3.0, 5.0));
        assert!(between(3.0, 3.0, 3.0));
        assert!(!between(2.0, 3.0, 5.0));
        assert!(!between(6.0, 3.0, 5.0));
        assert!(between(0.0, f64::NEG_INFINITY, f64::INFINITY));
        assert!(!between(f64::NAN, f64::NEG_INFINITY, f64::INFINITY));
    }

    #[rstest]
    #[case(0.0, 5.0, None, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0])]
    #[case(-3.0, 3.0, None, vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0])]
    #[case(3.0, 6.6, None, vec![3.0, 4.0, 5.0, 6.0])]
    #[case(3.2, 6.2, None, vec![3.2, 4.2, 5.2, 6.2])]
    #[case(3.2, 6.1, None, vec![3.2, 4.2, 5.2])]
    #[case(3.2, 6.7, Some(0.5), vec![3.2, 3.7, 4.2, 4.7, 5.2, 5.7, 6.2, 6.7])]
    #[case(3.2, 6.6, Some(0.5), vec![3.2, 3.7, 4.2, 4.7, 5.2, 5.7, 6.2])]
    #[case(5.0, 4.0, None, vec![])]
    fn test_range(
        #[case] min: f64,
        #[case] max: f64,
        #[case] step: Option<f64>,
        #[case] expected: Vec<f64>,
    ) {
        assert_eq!(range(min, max, step).unwrap(), expected);
    }

    #[test]
    fn test_range_bad_step() {
        assert_eq!(range(0.0, 5.0, 0.0), Err(Error::InvalidStep(0.0)));
        assert_eq!(range(0.0, 5.0, -1.0), Err(Error::InvalidStep(-1.0)));
        assert!(matches!(range(0.0, 5.0, f64::NAN), Err(Error::InvalidStep(_))));
    }

    #[rstest]
    #[case(0.0, f64::INFINITY, None)]
    #[case(f64::INFINITY, f64::INFINITY, Some(1.0))]
    #[case(f64::NEG_INFINITY, 0.0, None)]
    #[case(9007199254740992.0, 9007199254740994.0, Some(1.0))]
    #[case(1e300, 2e300, Some(1e-300))]
    fn test_range_never_ends(#[case] min: f64, #[case] max: f64, #[case] step: Option<f64>) {
        assert_eq!(range(min, max, step), Err(Error::InvalidStep(step.unwrap_or(1.0))));
    }

    #[test]
    fn test_range_large_step() {
        assert_eq!(range(0.0, 5.0, f64::INFINITY).unwrap(), vec![0.0]);
        assert_eq!(range(9007199254740992.0, 9007199254740996.0, 2.0).unwrap().len(), 3);
        assert!(range(f64::INFINITY, 0.0, None).unwrap().is_empty());
    }

    #[test]
    fn test_collapse() {
        assert_eq!(collapse("foo"), "foo");
        assert_eq!(collapse("\n  foo  \t "), "foo");
        assert_eq!(collapse("\n  foo\u{c}\t\nbar  \t "), "foo bar");
        assert_eq!(collapse(""), "");
    }

    #[rstest]
    #[case(3.0, "3")]
    #[case(-0.0, "0")]
    #[case(7.93, "7.93")]
    #[case(-2.5, "-2.5")]
    #[case(f64::INFINITY, "Infinity")]
    #[case(f64::NEG_INFINITY, "-Infinity")]
    #[case(f64::NAN, "NaN")]
    #[case(1e21, "1e+21")]
    #[case(1.5e300, "1.5e+300")]
    #[case(1e-7, "1e-7")]
    #[case(0.000001, "0.000001")]
    #[case(123456789012345680000.0, "123456789012345680000")]
    fn test_format_number(#[case] n: f64, #[case] expected: &str) {
        assert_eq!(format_number(n), expected);
    }

    #[rstest]
    #[case(3.0, 0, None, "3")]
    #[case(3.0, 1, None, "3")]
    #[case(3.0, 2, None, "03")]
    #[case(25.0, 1, None, "25")]
    #[case(25.0, 3, None, "025")]
    #[case(25.0, 7, None, "0000025")]
    #[case(7.93, 4, None, "7.93")]
    #[case(7.93, 5, None, "07.93")]
    #[case(7.93, 9, Some('0'), "000007.93")]
    #[case(7.93, 9, Some(' '), "     7.93")]
    #[case(7.93, 7, Some('\u{2022}'), "\u{2022}\u{2022}\u{2022}7.93")]
    fn test_pad_number(
        #[case] n: f64,
        #[case] length: usize,
        #[case] pad: Option<char>,
        #[case] expected: &str,
    ) {
        assert_eq!(pad_number(n, length, pad), expected);
    }

    fn sample() -> BTreeMap<&'static str, Option<&'static str>> {
        BTreeMap::from([("foo", Some("3")), ("bar", Some("apple")), ("baz", None)])
    }

    #[test]
    fn test_props_eq() {
        let obj = sample();

        assert!(props_eq(&obj, &BTreeMap::<&str, Option<&str>>::new()));
        assert!(props_eq(&obj, &obj));
        assert!(props_eq(&obj, &BTreeMap::from([("foo", Some("3"))])));
        assert!(!props_eq(&obj, &BTreeMap::from([("foo", Some("5"))])));
        assert!(!props_eq(&obj, &BTreeMap::from([("nope", Some("3"))])));
        assert!(!props_eq(
            &obj,
            &BTreeMap::from([("foo", Some("3")), ("bar", Some("4"))])
        ));
        assert!(props_eq(&obj, &BTreeMap::from([("baz", None::<&str>)])));
        // A missing key is not the same as a key mapped to `None`.
        assert!(!props_eq(&obj, &BTreeMap::from([("zee", None::<&str>)])));
    }

    #[test]
    fn test_minus_props() {
        let obj = sample();

        assert_eq!(minus_props::<_, _, str>(&obj, &[]), obj);
        assert_eq!(minus_props(&obj, &["blech"]), obj);
        assert_eq!(
            minus_props(&obj, &["foo"]),
            BTreeMap::from([("bar", Some("apple")), ("baz", None)])
        );
        assert_eq!(
            minus_props(&obj, &["foo", "dirt", "baz"]),
            BTreeMap::from([("bar", Some("apple"))])
        );
        assert!(minus_props(&obj, &["foo", "bar", "baz"]).is_empty());
    }

    #[test]
    fn test_cartesian_product() {
        let none: [&[u8]; 0] = [];
        assert_eq!(cartesian_product(&none), vec![Vec::<u8>::new()]);

        let empty: [&[u8]; 1] = [&[]];
        assert!(cartesian_product(&empty).is_empty());
        assert!(cartesian_product(&[vec![1, 2, 3], vec![]]).is_empty());

        assert_eq!(
            cartesian_product(&[vec![1, 2, 3]]),
            vec![vec![1], vec![2], vec![3]]
        );
        assert_eq!(
            cartesian_product(&[vec!["1", "2", "3"], vec!["a", "b", "c"]]),
            vec![
                vec!["1", "a"], vec!["1", "b"], vec!["1", "c"],
                vec!["2", "a"], vec!["2", "b"], vec!["2", "c"],
                vec!["3", "a"], vec!["3", "b"], vec!["3", "c"],
            ]
        );
        assert_eq!(cartesian_product(&[[1, 2], [3, 4], [5, 6]]).len(), 8);
        assert_eq!(cartesian_product(&[[1, 2], [3, 4], [5, 6]])[5], vec![2, 3, 6]);
    }

    proptest::proptest! {
        #[test]
        fn test_cartesian_product_len(arrays: Vec<Vec<u8>>) {
            let arrays: Vec<Vec<u8>> = arrays.into_iter().take(4).map(|v| v.into_iter().take(4).collect()).collect();
            let product = cartesian_product(&arrays);
            let expected: usize = arrays.iter().map(Vec::len).product();

            assert_eq!(product.len(), expected);
            for combination in &product {
                assert_eq!(combination.len(), arrays.len());
                for (value, array) in combination.iter().zip(&arrays) {
                    assert!(array.contains(value));
                }
            }
        }

        #[test]
        fn test_collapse_idempotent(text: String) {
            let once = collapse(&text);
            assert_eq!(collapse(&once), once.clone());
            assert!(!once.starts_with(' '));
            assert!(!once.ends_with(' '));
        }
    }
}

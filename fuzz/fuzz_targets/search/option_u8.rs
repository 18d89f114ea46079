#![no_main]

use libfuzzer_sys::fuzz_target;
use primkit::arrays::ends_with;
use primkit::arrays::includes_subarray;
use primkit::arrays::index_of_subarray;
use primkit::arrays::last_index_of_subarray;
use primkit::arrays::resolve_index;
use primkit::arrays::starts_with;

// Sparse sequences: `None` for holes.
type T = Option<u8>;

fn naive_matches(array: &[T], pattern: &[T]) -> Vec<usize> {
    (0..=array.len())
        .filter(|idx| {
            array
                .get(*idx..)
                .is_some_and(|suffix| suffix.len() >= pattern.len() && suffix[..pattern.len()] == *pattern)
        })
        .collect()
}

// Compare the searches with a quadratic scan of every position.
fn check(array: &[T], pattern: &[T], from_index: isize) {
    let matches = naive_matches(array, pattern);
    let start = resolve_index(from_index, array.len());

    let first = index_of_subarray(array, pattern, from_index);
    assert_eq!(first, matches.iter().copied().find(|idx| *idx >= start));
    assert_eq!(includes_subarray(array, pattern, from_index), first.is_some());
    assert_eq!(index_of_subarray(array, pattern, None), matches.first().copied());

    let last = last_index_of_subarray(array, pattern, from_index);
    assert_eq!(last, matches.iter().copied().rev().find(|idx| *idx <= start));
    assert_eq!(last_index_of_subarray(array, pattern, None), matches.last().copied());

    assert_eq!(starts_with(array, pattern, from_index), matches.contains(&start));
    assert_eq!(
        ends_with(array, pattern, from_index),
        start
            .checked_sub(pattern.len())
            .is_some_and(|idx| matches.contains(&idx))
    );
}

fuzz_target!(|args: (Vec<T>, Vec<T>, isize)| {
    let (array, pattern, from_index) = args;

    check(&array, &pattern, from_index);
    // Short patterns find more matches.
    check(&array, &pattern[..pattern.len().min(2)], from_index % 64);
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use primkit::arrays::includes_subarray;
use primkit::split::join_arrays;
use primkit::split::join_arrays_by_array;
use primkit::split::split;
use primkit::split::split_by_predicate;
use primkit::split::split_by_subarray;

// Sparse sequences: `None` for holes.
type T = Option<u8>;

// Check that splitting and joining are inverses, and that limits only
// truncate the unlimited split.
fn check(array: &[T], separator: &[T], limit: u8) {
    let limit = isize::from(limit % 8);

    let segments = split_by_subarray(array, separator, None).unwrap();
    if separator.is_empty() {
        assert_eq!(segments.len(), array.len());
        assert_eq!(join_arrays_by_array(&segments, separator), array);
    } else {
        assert_eq!(join_arrays_by_array(&segments, separator), array);
        assert!(segments
            .iter()
            .all(|segment| !includes_subarray(segment, separator, None)));
    }

    let limited = split_by_subarray(array, separator, limit).unwrap();
    assert_eq!(limited.len(), segments.len().min(limit as usize));
    assert_eq!(&limited[..], &segments[..limited.len()]);

    if let Some(value) = separator.first() {
        let segments = split(array, value, None).unwrap();
        assert_eq!(join_arrays(&segments, *value), array);
        assert!(segments.iter().all(|segment| !segment.contains(value)));

        let limited = split(array, value, limit).unwrap();
        assert_eq!(&limited[..], &segments[..limited.len()]);
    }

    let never = split_by_predicate(array, |_, _, _| false, None).unwrap();
    assert_eq!(never, [array]);
}

fuzz_target!(|args: (Vec<T>, Vec<T>, u8)| {
    let (array, separator, limit) = args;

    check(&array, &separator, limit);
    check(&array, &separator[..separator.len().min(1)], limit);
});

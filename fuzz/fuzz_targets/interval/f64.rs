#![no_main]

use libfuzzer_sys::fuzz_target;
use primkit::Bracket;
use primkit::Error;
use primkit::Interval;

fn bracket(closed: bool) -> Bracket {
    if closed {
        Bracket::Closed
    } else {
        Bracket::Open
    }
}

fn build(closed: (bool, bool), min: f64, max: f64) -> Interval {
    match Interval::new(bracket(closed.0), min, max, bracket(closed.1)) {
        Ok(ret) => {
            assert!(!(min > max));
            ret
        }
        Err(Error::InvalidBounds { .. }) => {
            assert!(min.is_nan() || max.is_nan() || min > max);
            Interval::EMPTY
        }
        Err(Error::ContradictoryBounds { at }) => {
            assert_eq!(min, max);
            assert_eq!(at, min);
            assert!(closed.0 != closed.1);
            Interval::EMPTY
        }
        Err(Error::InfiniteClosedBound { .. }) => {
            assert!((closed.0 && min.is_infinite()) || (closed.1 && max.is_infinite()));
            Interval::EMPTY
        }
        Err(e) => panic!("unexpected error {e:?}"),
    }
}

// Check the set relations of two intervals against their membership
// at the endpoints and probe value.
fn check(x: Interval, y: Interval, probe: f64) {
    assert!(x.is_subset_or_equal(&x));
    assert!(Interval::EMPTY.is_subset_or_equal(&x));
    assert_eq!(x.is_subset_or_equal(&y), y.is_superset_or_equal(&x));
    assert_eq!(x.intersects(&y), y.intersects(&x));

    if x.is_subset_or_equal(&y) && y.is_subset_or_equal(&x) {
        assert_eq!(x, y);
    }

    if !x.is_empty() && x.is_subset_or_equal(&y) {
        assert!(x.intersects(&y));
    }

    for value in [probe, x.min().unwrap_or(probe), x.max().unwrap_or(probe)] {
        if x.contains(value) && x.is_subset_or_equal(&y) {
            assert!(y.contains(value));
        }

        if x.contains(value) && y.contains(value) {
            assert!(x.intersects(&y));
        }
    }

    // Rebuild from the accessors.
    if let Some((left, right)) = x.brackets() {
        let rebuilt = Interval::new(left, x.min().unwrap(), x.max().unwrap(), right).unwrap();
        assert_eq!(rebuilt, x);
        assert_eq!(rebuilt.to_string(), x.to_string());
    }
}

fuzz_target!(|args: ((bool, bool), f64, f64, (bool, bool), f64, f64, f64)| {
    let (x_closed, x_min, x_max, y_closed, y_min, y_max, probe) = args;

    let x = build(x_closed, x_min, x_max);
    let y = build(y_closed, y_min, y_max);
    check(x, y, probe);
    check(y, x, probe);
});

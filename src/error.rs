//! The single error type shared by every fallible operation in this
//! [`crate`].
use thiserror::Error;

/// Everything that can go wrong when calling into this [`crate`].
///
/// All errors are raised synchronously by the offending call, and
/// nothing is retried internally.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    /// An [`Interval`](crate::Interval) endpoint is NaN, or `min > max`.
    #[error("invalid interval bounds: min ({min}) and max ({max}) must be numbers with min <= max")]
    InvalidBounds {
        /// The requested minimum.
        min: f64,
        /// The requested maximum.
        max: f64,
    },

    /// A single-point [`Interval`](crate::Interval) was requested with
    /// exactly one closed side.
    #[error("interval definition is contradictory: a single point ({at}) cannot be half-open")]
    ContradictoryBounds {
        /// The shared endpoint.
        at: f64,
    },

    /// A closed [`Interval`](crate::Interval) bound sits at +/- infinity.
    #[error("interval cannot include infinite bounds: {min}, {max}")]
    InfiniteClosedBound {
        /// The requested minimum.
        min: f64,
        /// The requested maximum.
        max: f64,
    },

    /// [`repeat`](crate::arrays::repeat) was asked for a negative
    /// number of copies.
    #[error("invalid count value: {0}")]
    InvalidCount(isize),

    /// One of the [`split`](crate::split) functions got a negative limit.
    #[error("invalid limit value: {0}")]
    InvalidLimit(isize),

    /// [`sw`](crate::switch::sw) found no matching case and no default.
    #[error("no match")]
    NoMatch,

    /// [`range`](crate::util::range) would never terminate with this step.
    #[error("invalid step value: {0}")]
    InvalidStep(f64),
}

/// Shorthand for results in this [`crate`].
pub type Result<T> = core::result::Result<T, Error>;

#[cfg_attr(coverage_nightly, coverage(off))]
#[test]
fn test_messages() {
    use alloc::string::ToString;

    assert_eq!(Error::InvalidCount(-1).to_string(), "invalid count value: -1");
    assert_eq!(Error::InvalidLimit(-3).to_string(), "invalid limit value: -3");
    assert_eq!(Error::NoMatch.to_string(), "no match");
    assert_eq!(
        Error::ContradictoryBounds { at: 3.0 }.to_string(),
        "interval definition is contradictory: a single point (3) cannot be half-open"
    );
}

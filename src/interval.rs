//! Numeric intervals over `f64` with independently open or closed
//! endpoints.
//!
//! An [`Interval`] knows whether each side includes its endpoint.
//! That's enough to represent any interval of the reals, including
//! the empty set, with a single canonical representation per set.
use core::fmt;

use crate::util::format_number;
use crate::Error;
use crate::Result;

/// The kind of boundary on one side of an [`Interval`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Bracket {
    /// The endpoint is excluded: `(` on the left, `)` on the right.
    Open,
    /// The endpoint is included: `[` on the left, `]` on the right.
    Closed,
}

impl Bracket {
    /// Parses a left bracket (`(` or `[`).
    #[inline(always)]
    pub fn from_left(c: char) -> Option<Bracket> {
        match c {
            '(' => Some(Bracket::Open),
            '[' => Some(Bracket::Closed),
            _ => None,
        }
    }

    /// Parses a right bracket (`)` or `]`).
    #[inline(always)]
    pub fn from_right(c: char) -> Option<Bracket> {
        match c {
            ')' => Some(Bracket::Open),
            ']' => Some(Bracket::Closed),
            _ => None,
        }
    }

    /// Renders this bracket as the left side of an interval.
    #[inline(always)]
    pub fn left_char(self) -> char {
        match self {
            Bracket::Open => '(',
            Bracket::Closed => '[',
        }
    }

    /// Renders this bracket as the right side of an interval.
    #[inline(always)]
    pub fn right_char(self) -> char {
        match self {
            Bracket::Open => ')',
            Bracket::Closed => ']',
        }
    }

    #[inline(always)]
    fn is_closed(self) -> bool {
        self == Bracket::Closed
    }
}

/// The representation of a non-empty interval.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
    min: f64,
    max: f64,
    min_closed: bool,
    max_closed: bool,
}

impl Bounds {
    /// Checks the invariants we promise for non-empty intervals.
    fn is_valid(&self) -> bool {
        let ordered = self.min < self.max
            || (self.min == self.max && self.min_closed && self.max_closed);
        let finite_when_closed = (!self.min_closed || self.min.is_finite())
            && (!self.max_closed || self.max.is_finite());

        ordered && finite_when_closed
    }
}

/// An immutable interval of real numbers, e.g., `[3, 5)`.
///
/// Each endpoint may be open (excluded) or closed (included).  Open
/// endpoints may be infinite, so `(-Infinity, Infinity)` is the set
/// of all reals; closed endpoints must be finite.
///
/// Empty intervals all collapse to the same representation,
/// [`Interval::EMPTY`], so the derived [`PartialEq`] is exactly set
/// equality.  Since endpoints are compared with `==`, `-0.0` and
/// `0.0` denote the same endpoint.
///
/// ```
/// use primkit::{Bracket, Interval};
///
/// let x = Interval::new(Bracket::Closed, 3.0, 5.0, Bracket::Open)?;
/// assert!(x.contains(3.0));
/// assert!(!x.contains(5.0));
/// assert_eq!(x.to_string(), "[3, 5)");
/// assert_eq!(Interval::open(3.0, 3.0)?, Interval::EMPTY);
/// # Ok::<(), primkit::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    rep: Option<Bounds>,
}

impl Interval {
    /// The empty interval.
    pub const EMPTY: Interval = Interval { rep: None };

    /// Creates an interval from its bracket notation: `left min, max right`.
    ///
    /// Fails with:
    ///  - [`Error::InvalidBounds`] if `min` or `max` is NaN, or `min > max`;
    ///  - [`Error::ContradictoryBounds`] if `min == max` and exactly one
    ///    side is closed (a single point can't be half-open);
    ///  - [`Error::InfiniteClosedBound`] if a closed side is infinite.
    ///
    /// When `min == max` and both sides are open, the result is
    /// [`Interval::EMPTY`]; when both are closed, it's the single point
    /// `[min, min]`.
    pub fn new(left: Bracket, min: f64, max: f64, right: Bracket) -> Result<Interval> {
        let min_closed = left.is_closed();
        let max_closed = right.is_closed();

        if min.is_nan() || max.is_nan() || min > max {
            log::debug!("rejecting interval with bounds {min}, {max}");
            return Err(Error::InvalidBounds { min, max });
        }

        if min == max {
            match (min_closed, max_closed) {
                (false, false) => return Ok(Interval::EMPTY),
                (true, true) => {}
                _ => {
                    log::debug!("rejecting half-open single point interval at {min}");
                    return Err(Error::ContradictoryBounds { at: min });
                }
            }
        }

        if (min_closed && min.is_infinite()) || (max_closed && max.is_infinite()) {
            log::debug!("rejecting closed infinite bound in interval {min}, {max}");
            return Err(Error::InfiniteClosedBound { min, max });
        }

        Ok(Interval::from_bounds(Bounds {
            min,
            max,
            min_closed,
            max_closed,
        }))
    }

    /// Creates the open interval `(min, max)`.
    #[inline(always)]
    pub fn open(min: f64, max: f64) -> Result<Interval> {
        Interval::new(Bracket::Open, min, max, Bracket::Open)
    }

    /// Creates the closed interval `[min, max]`.
    #[inline(always)]
    pub fn closed(min: f64, max: f64) -> Result<Interval> {
        Interval::new(Bracket::Closed, min, max, Bracket::Closed)
    }

    /// Wraps already-validated bounds.
    ///
    /// This takes constant time in release mode, and checks the
    /// representation invariants when debug assertions or internal
    /// checks are enabled.
    #[inline(always)]
    fn from_bounds(bounds: Bounds) -> Interval {
        #[cfg(any(feature = "internal_checks", debug_assertions))]
        assert!(bounds.is_valid());
        Interval { rep: Some(bounds) }
    }

    /// Determines whether `x` is in this interval.
    ///
    /// NaN and infinities are never contained in any interval.
    pub fn contains(&self, x: f64) -> bool {
        let Some(rep) = self.rep else {
            return false;
        };

        if !x.is_finite() || x < rep.min || x > rep.max {
            return false;
        }

        if x == rep.min && !rep.min_closed {
            return false;
        }

        if x == rep.max && !rep.max_closed {
            return false;
        }

        true
    }

    /// Determines whether `self` and `other` represent the same set.
    ///
    /// This is the same as `self == other`.
    #[inline(always)]
    pub fn equals(&self, other: &Interval) -> bool {
        self == other
    }

    /// Determines whether `self` and `other` have at least one value
    /// in common.
    ///
    /// Intervals that only touch at an endpoint intersect iff both
    /// are closed on that endpoint.
    pub fn intersects(&self, other: &Interval) -> bool {
        let (Some(this), Some(other)) = (self.rep, other.rep) else {
            return false;
        };

        if this.max < other.min || this.min > other.max {
            return false;
        }

        if this.max == other.min && !(this.max_closed && other.min_closed) {
            return false;
        }

        if this.min == other.max && !(this.min_closed && other.max_closed) {
            return false;
        }

        true
    }

    /// Determines whether every value in `self` is also in `other`,
    /// i.e., \\(\mathtt{self} \subseteq \mathtt{other}\\).
    ///
    /// The empty interval is a subset of everything, and nothing but
    /// the empty interval is a subset of the empty interval.
    ///
    /// Callers porting code where `a.isSubsetOrEqual(b)` checks that
    /// `a` contains `b` want [`Interval::is_superset_or_equal`].
    pub fn is_subset_or_equal(&self, other: &Interval) -> bool {
        let Some(this) = self.rep else {
            return true;
        };

        let Some(other) = other.rep else {
            return false;
        };

        if this.min < other.min || this.max > other.max {
            return false;
        }

        // On shared endpoints, we can't include what `other` excludes.
        if this.min == other.min && this.min_closed && !other.min_closed {
            return false;
        }

        if this.max == other.max && this.max_closed && !other.max_closed {
            return false;
        }

        true
    }

    /// Determines whether `self` is a subset of `other`, without
    /// being equal to `other`.
    #[inline(always)]
    pub fn is_strict_subset(&self, other: &Interval) -> bool {
        self.is_subset_or_equal(other) && !self.equals(other)
    }

    /// Determines whether `self` contains every value of `other`.
    ///
    /// This is `other.is_subset_or_equal(self)`.
    #[inline(always)]
    pub fn is_superset_or_equal(&self, other: &Interval) -> bool {
        other.is_subset_or_equal(self)
    }

    /// Determines whether `self` contains every value of `other`,
    /// without being equal to `other`.
    #[inline(always)]
    pub fn is_strict_superset(&self, other: &Interval) -> bool {
        other.is_strict_subset(self)
    }

    /// Returns whether this interval is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.rep.is_none()
    }

    /// Returns the lower endpoint, or `None` for the empty interval.
    #[inline(always)]
    pub fn min(&self) -> Option<f64> {
        self.rep.map(|rep| rep.min)
    }

    /// Returns the upper endpoint, or `None` for the empty interval.
    #[inline(always)]
    pub fn max(&self) -> Option<f64> {
        self.rep.map(|rep| rep.max)
    }

    /// Returns whether the lower endpoint is included.
    #[inline(always)]
    pub fn is_left_closed(&self) -> bool {
        self.rep.is_some_and(|rep| rep.min_closed)
    }

    /// Returns whether the upper endpoint is included.
    #[inline(always)]
    pub fn is_right_closed(&self) -> bool {
        self.rep.is_some_and(|rep| rep.max_closed)
    }

    /// Returns whether both endpoints are included.  The empty
    /// interval is not closed.
    #[inline(always)]
    pub fn is_closed(&self) -> bool {
        self.rep.is_some_and(|rep| rep.min_closed && rep.max_closed)
    }

    /// Returns the left and right brackets, or `None` for the empty
    /// interval.
    #[inline(always)]
    pub fn brackets(&self) -> Option<(Bracket, Bracket)> {
        fn bracket(closed: bool) -> Bracket {
            if closed {
                Bracket::Closed
            } else {
                Bracket::Open
            }
        }

        self.rep
            .map(|rep| (bracket(rep.min_closed), bracket(rep.max_closed)))
    }
}

impl Default for Interval {
    #[inline(always)]
    fn default() -> Self {
        Interval::EMPTY
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rep, self.brackets()) {
            (Some(rep), Some((left, right))) => write!(
                f,
                "{}{}, {}{}",
                left.left_char(),
                format_number(rep.min),
                format_number(rep.max),
                right.right_char()
            ),
            _ => f.write_str("\u{2205}"),
        }
    }
}

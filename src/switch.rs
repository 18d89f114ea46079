//! Expression-level multiway dispatch: [`sw`] scans a list of
//! `(Condition, Outcome)` cases and evaluates the outcome of the
//! first case whose condition matches.
//!
//! ```
//! # use primkit::switch::{sw, Condition, Outcome};
//! let cases = [
//!     (Condition::Value(1), Outcome::Value("one")),
//!     (Condition::predicate(|x: &i32| *x >= 50), Outcome::Value("big")),
//!     (Condition::Default, Outcome::Value("default")),
//! ];
//!
//! assert_eq!(sw(&1, &cases), Ok("one"));
//! assert_eq!(sw(&60, &cases), Ok("big"));
//! assert_eq!(sw(&49, &cases), Ok("default"));
//! ```
use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Error;
use crate::Result;

/// The boxed form of predicates in [`Condition::Predicate`].
type PredicateFn<'a, E> = Box<dyn 'a + Fn(&E) -> bool>;

/// A [`Condition`] decides whether a [`sw`] case applies to a value.
pub enum Condition<'a, E> {
    /// Matches values equal to this one.
    Value(E),
    /// Matches values for which the predicate holds.
    Predicate(PredicateFn<'a, E>),
    /// Always matches.  Cases after a [`Condition::Default`] are
    /// unreachable.
    Default,
    /// Matches when any of the conditions matches, checked in order.
    AnyOf(Vec<Condition<'a, E>>),
    /// Matches when all of the conditions match, checked in order.
    AllOf(Vec<Condition<'a, E>>),
    /// Matches when the inner condition does not.
    Not(Box<Condition<'a, E>>),
}

impl<'a, E> Condition<'a, E> {
    /// Wraps a predicate function as a [`Condition`].
    #[inline(always)]
    pub fn predicate(predicate: impl 'a + Fn(&E) -> bool) -> Self {
        Condition::Predicate(Box::new(predicate))
    }

    /// Returns a [`Condition`] that matches when at least one of
    /// `conditions` does.  This stops at the first match, and never
    /// matches if `conditions` is empty.
    #[inline(always)]
    pub fn any_of(conditions: impl IntoIterator<Item = Condition<'a, E>>) -> Self {
        Condition::AnyOf(conditions.into_iter().collect())
    }

    /// Returns a [`Condition`] that matches when all of `conditions`
    /// do.  This stops at the first mismatch, and always matches if
    /// `conditions` is empty.
    #[inline(always)]
    pub fn all_of(conditions: impl IntoIterator<Item = Condition<'a, E>>) -> Self {
        Condition::AllOf(conditions.into_iter().collect())
    }
}

impl<E: PartialEq> Condition<'_, E> {
    /// Determines whether this condition matches `value`.
    pub fn matches(&self, value: &E) -> bool {
        match self {
            Condition::Value(expected) => value == expected,
            Condition::Predicate(predicate) => predicate(value),
            Condition::Default => true,
            Condition::AnyOf(conditions) => conditions.iter().any(|cond| cond.matches(value)),
            Condition::AllOf(conditions) => conditions.iter().all(|cond| cond.matches(value)),
            Condition::Not(inner) => !inner.matches(value),
        }
    }
}

/// `!condition` matches exactly when `condition` doesn't.
impl<'a, E> core::ops::Not for Condition<'a, E> {
    type Output = Condition<'a, E>;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Condition::Not(Box::new(self))
    }
}

/// An [`Outcome`] computes the result of [`sw`] once its case
/// matches.
pub enum Outcome<'a, E, R> {
    /// Returns a clone of this value.
    Value(R),
    /// Maps the dispatched value to the result.
    Map(Box<dyn 'a + Fn(&E) -> R>),
}

impl<'a, E, R> Outcome<'a, E, R> {
    /// Wraps a mapping function as an [`Outcome`].
    #[inline(always)]
    pub fn map(map: impl 'a + Fn(&E) -> R) -> Self {
        Outcome::Map(Box::new(map))
    }
}

impl<E, R: Clone> Outcome<'_, E, R> {
    fn eval(&self, value: &E) -> R {
        match self {
            Outcome::Value(ret) => ret.clone(),
            Outcome::Map(map) => map(value),
        }
    }
}

/// Returns the outcome of the first case in `cases` whose condition
/// matches `value`.
///
/// Conditions are checked in order, and stop at the first match.
/// Only the matching case's [`Outcome`] is evaluated.  Fails with
/// [`Error::NoMatch`] when no case matches; end `cases` with a
/// [`Condition::Default`] to make that impossible.
pub fn sw<E: PartialEq, R: Clone>(value: &E, cases: &[(Condition<'_, E>, Outcome<'_, E, R>)]) -> Result<R> {
    let Some((_, outcome)) = cases.iter().find(|(cond, _)| cond.matches(value)) else {
        log::trace!("no match among {} switch cases", cases.len());
        return Err(Error::NoMatch);
    };

    Ok(outcome.eval(value))
}

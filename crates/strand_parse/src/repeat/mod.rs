//! Repetition with lower and upper bounds.
//!
//! A failing attempt after the minimum is reached is discarded entirely:
//! the repetition succeeds at the position before it, even if the failing
//! attempt consumed input.
//!
//! # Zero-width progress
//!
//! An unbounded repetition of a parser that can succeed without consuming
//! input would loop forever, since the same position yields the same
//! success every time. [`times`] detects this: in unbounded mode, a success
//! that leaves the position unchanged is kept and ends the loop once `min`
//! values are collected. Below `min` the loop goes on, which terminates
//! because `min` is finite, so an unbounded repetition accepts everything
//! its bounded form `times(p, min, min)` accepts.

use std::fmt;

use tracing::trace;

use crate::{Expected, Outcome, Parser};

/// Upper bound meaning "no limit".
pub const UNBOUNDED: usize = usize::MAX;

/// `[min,max]` with an unbounded max rendered as `∞`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Bounds {
    pub(crate) min: usize,
    pub(crate) max: usize,
}

impl Bounds {
    pub(crate) fn new(combinator: &str, min: usize, max: usize) -> Self {
        assert!(min <= max, "{combinator}: min ({min}) exceeds max ({max})");
        Bounds { min, max }
    }

    pub(crate) fn is_unbounded(self) -> bool {
        self.max == UNBOUNDED
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            write!(f, "[{},∞]", self.min)
        } else {
            write!(f, "[{},{}]", self.min, self.max)
        }
    }
}

/// Apply `parser` between `min` and `max` times, collecting the values.
///
/// Stops early once `max` values are collected. Fewer than `min` is a
/// failure at the inner failure's position, expecting
/// `match <inner> between [min,max] times`.
///
/// # Panics
///
/// Panics if `min > max`.
pub fn times<T: 'static>(parser: Parser<T>, min: usize, max: usize) -> Parser<Vec<T>> {
    let bounds = Bounds::new("times", min, max);
    Parser::from_fn(move |input: &str, start| {
        let mut values = Vec::new();
        let mut position = start;
        while values.len() < bounds.max {
            match parser.attempt(input, position) {
                Outcome::Success { end, value } => {
                    values.push(value);
                    if end == position && bounds.is_unbounded() && values.len() >= bounds.min {
                        trace!(position, count = values.len(), "zero-width repetition stopped");
                        break;
                    }
                    position = end;
                }
                Outcome::Failure {
                    position: failed_at,
                    expected,
                } => {
                    if values.len() >= bounds.min {
                        break;
                    }
                    return Outcome::failure(
                        failed_at,
                        Expected::Literal(format!("match {expected} between {bounds} times")),
                    );
                }
            }
        }
        Outcome::success(position, values)
    })
}

/// Zero or more.
pub fn many<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    times(parser, 0, UNBOUNDED)
}

/// One or more.
pub fn many1<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    times(parser, 1, UNBOUNDED)
}

/// Exactly `n`.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn count<T: 'static>(parser: Parser<T>, n: usize) -> Parser<Vec<T>> {
    assert!(n > 0, "count: n must be greater than zero");
    times(parser, n, n)
}

impl<T: 'static> Parser<T> {
    /// See [`times`].
    #[must_use]
    pub fn times(self, min: usize, max: usize) -> Parser<Vec<T>> {
        times(self, min, max)
    }

    /// See [`many`].
    #[must_use]
    pub fn many(self) -> Parser<Vec<T>> {
        many(self)
    }

    /// See [`many1`].
    #[must_use]
    pub fn many1(self) -> Parser<Vec<T>> {
        many1(self)
    }
}

//! Alternation.
//!
//! Both combinators try their alternatives in order from the same start
//! position and return the first success. They differ in what a failure
//! *past* the start position means:
//!
//! - [`choice`] commits. The alternative consumed input, so it is the
//!   production the input was written for, and its failure is the
//!   diagnosis. Later alternatives are not tried.
//! - [`try_choice`] backtracks. The attempt is discarded and the next
//!   alternative starts over from the original position.
//!
//! When every alternative fails at the start position, the result is one
//! failure at the start with an [`Expected::Aggregate`] of all of them.

use tracing::trace;

use crate::{Expected, Outcome, Parser};

fn check_arity(combinator: &str, count: usize) {
    assert!(
        count >= 2,
        "{combinator} needs at least 2 alternatives, got {count}"
    );
}

/// Ordered choice that commits to an alternative once it consumes input.
///
/// # Panics
///
/// Panics if given fewer than 2 alternatives.
pub fn choice<T: 'static>(alternatives: Vec<Parser<T>>) -> Parser<T> {
    check_arity("choice", alternatives.len());
    Parser::from_fn(move |input: &str, start| {
        let mut expected = Vec::with_capacity(alternatives.len());
        for (index, alternative) in alternatives.iter().enumerate() {
            match alternative.attempt(input, start) {
                success @ Outcome::Success { .. } => return success,
                Outcome::Failure {
                    position,
                    expected: cause,
                } if position != start => {
                    trace!(alternative = index, start, position, "choice committed");
                    return Outcome::failure(position, cause);
                }
                Outcome::Failure { expected: cause, .. } => expected.push(cause),
            }
        }
        Outcome::failure(start, Expected::Aggregate(expected))
    })
}

/// Ordered choice that always retries the next alternative from the start.
///
/// # Panics
///
/// Panics if given fewer than 2 alternatives.
pub fn try_choice<T: 'static>(alternatives: Vec<Parser<T>>) -> Parser<T> {
    check_arity("try_choice", alternatives.len());
    Parser::from_fn(move |input: &str, start| {
        let mut expected = Vec::with_capacity(alternatives.len());
        for (index, alternative) in alternatives.iter().enumerate() {
            match alternative.attempt(input, start) {
                success @ Outcome::Success { .. } => return success,
                Outcome::Failure {
                    position,
                    expected: cause,
                } => {
                    if position != start {
                        trace!(alternative = index, start, position, "try_choice backtracked");
                    }
                    expected.push(cause);
                }
            }
        }
        Outcome::failure(start, Expected::Aggregate(expected))
    })
}

/// Succeed with `None` when `parser` fails without consuming input.
///
/// A failure past the start position is still a failure, under the same
/// commit rule as [`choice`].
pub fn optional<T: 'static>(parser: Parser<T>) -> Parser<Option<T>> {
    Parser::from_fn(move |input: &str, start| match parser.attempt(input, start) {
        Outcome::Success { end, value } => Outcome::success(end, Some(value)),
        Outcome::Failure { position, expected } if position != start => {
            Outcome::failure(position, expected)
        }
        Outcome::Failure { .. } => Outcome::success(start, None),
    })
}

impl<T: 'static> Parser<T> {
    /// `choice![self, other]`.
    #[must_use]
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        choice(vec![self, other])
    }

    /// See [`optional`].
    #[must_use]
    pub fn optional(self) -> Parser<Option<T>> {
        optional(self)
    }
}

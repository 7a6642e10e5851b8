//! The result of one parse attempt.
//!
//! | Variant | Position field | Meaning |
//! |---------|----------------|---------|
//! | `Success` | `end` | matched `[start, end)`, produced `value` |
//! | `Failure` | `position` | could not continue at `position` |
//!
//! A failure whose position differs from the attempt's start has consumed
//! input before failing. [`choice`](crate::choice) treats that as a commit
//! point; see [`Outcome::made_progress`].

use crate::Expected;

/// Outcome of attempting a parser at a position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Matched input up to `end` (exclusive) and produced `value`.
    Success {
        /// Position just past the matched input.
        end: usize,
        /// The produced value.
        value: T,
    },
    /// Failed at `position`, expecting `expected` there.
    Failure {
        /// Where the failure was detected.
        position: usize,
        /// What would have allowed the parse to continue.
        expected: Expected,
    },
}

impl<T> Outcome<T> {
    // === Constructors ===

    /// A success ending at `end`.
    #[inline]
    pub fn success(end: usize, value: T) -> Self {
        Outcome::Success { end, value }
    }

    /// A failure at `position`.
    #[cold]
    pub fn failure(position: usize, expected: Expected) -> Self {
        Outcome::Failure { position, expected }
    }

    // === Predicates ===

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// End position of a success, failure position of a failure.
    #[inline]
    pub fn position(&self) -> usize {
        match self {
            Outcome::Success { end, .. } => *end,
            Outcome::Failure { position, .. } => *position,
        }
    }

    /// Whether the attempt started at `start` moved off it, successfully
    /// or not.
    #[inline]
    pub fn made_progress(&self, start: usize) -> bool {
        self.position() != start
    }

    // === Transformations ===

    /// Transform a success value; failures pass through and `f` is not called.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success { end, value } => Outcome::Success {
                end,
                value: f(value),
            },
            Outcome::Failure { position, expected } => Outcome::Failure { position, expected },
        }
    }

    /// Continue from a success's end position and value.
    ///
    /// Failures pass through unchanged, retyped to the continuation's
    /// value type.
    pub fn and_then<U, F: FnOnce(usize, T) -> Outcome<U>>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success { end, value } => f(end, value),
            Outcome::Failure { position, expected } => Outcome::Failure { position, expected },
        }
    }

    /// The success value, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    /// Split into `Ok((end, value))` or `Err((position, expected))`.
    pub fn into_result(self) -> Result<(usize, T), (usize, Expected)> {
        match self {
            Outcome::Success { end, value } => Ok((end, value)),
            Outcome::Failure { position, expected } => Err((position, expected)),
        }
    }
}

impl<T> From<Outcome<T>> for Result<(usize, T), (usize, Expected)> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

//! The parser capability and its shareable handle.

use std::fmt;
use std::sync::Arc;

use crate::Outcome;

/// A single parse operation: try to match at `position` in `input`.
///
/// Implementations must be referentially transparent. The same
/// `(input, position)` always yields the same [`Outcome`].
pub trait Attempt<T> {
    fn attempt(&self, input: &str, position: usize) -> Outcome<T>;
}

impl<T, F> Attempt<T> for F
where
    F: Fn(&str, usize) -> Outcome<T>,
{
    #[inline]
    fn attempt(&self, input: &str, position: usize) -> Outcome<T> {
        self(input, position)
    }
}

/// A shared, immutable parser producing `T`.
///
/// Cloning is a reference-count bump. Combinators hold their operands
/// through these handles, so composing never copies a grammar.
pub struct Parser<T> {
    inner: Arc<dyn Attempt<T> + Send + Sync>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Parser<T> {
    /// Wrap any [`Attempt`] implementation.
    pub fn new<A>(attempt: A) -> Self
    where
        A: Attempt<T> + Send + Sync + 'static,
    {
        Parser {
            inner: Arc::new(attempt),
        }
    }

    /// Wrap a closure taking the input and a start position.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str, usize) -> Outcome<T> + Send + Sync + 'static,
    {
        Parser::new(f)
    }
}

impl<T> Parser<T> {
    /// Attempt this parser at `position`.
    #[inline]
    pub fn attempt(&self, input: &str, position: usize) -> Outcome<T> {
        self.inner.attempt(input, position)
    }
}

impl<T> Attempt<T> for Parser<T> {
    #[inline]
    fn attempt(&self, input: &str, position: usize) -> Outcome<T> {
        self.inner.attempt(input, position)
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parser<{}>", std::any::type_name::<T>())
    }
}

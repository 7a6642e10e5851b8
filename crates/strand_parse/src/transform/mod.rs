//! Combinators that wrap one parser, or chain a second one after it,
//! without changing how failures propagate.

use crate::{Expected, Outcome, Parser};

/// Transform the value of a success. `transform` never sees a failure.
pub fn map<T, U, F>(parser: Parser<T>, transform: F) -> Parser<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    Parser::from_fn(move |input: &str, position| parser.attempt(input, position).map(&transform))
}

/// Replace the value of a success with a clone of `value`.
pub fn constant<T, V>(parser: Parser<T>, value: V) -> Parser<V>
where
    T: 'static,
    V: Clone + Send + Sync + 'static,
{
    map(parser, move |_| value.clone())
}

/// Run `parser`, then `trailing` from where it stopped; keep `parser`'s value.
///
/// The end position is `trailing`'s. A failure in either stage is returned
/// as-is.
pub fn skip<T, U>(parser: Parser<T>, trailing: Parser<U>) -> Parser<T>
where
    T: 'static,
    U: 'static,
{
    Parser::from_fn(move |input: &str, position| {
        parser
            .attempt(input, position)
            .and_then(|end, value| trailing.attempt(input, end).map(|_| value))
    })
}

/// Run `first`, then return whatever `second` produces from where it stopped.
pub fn then<T, U>(first: Parser<T>, second: Parser<U>) -> Parser<U>
where
    T: 'static,
    U: 'static,
{
    Parser::from_fn(move |input: &str, position| {
        first
            .attempt(input, position)
            .and_then(|end, _| second.attempt(input, end))
    })
}

/// Like [`map`], but `transform` may reject the value.
///
/// A rejection becomes a failure at the position where `parser` started.
pub fn try_map<T, U, F>(parser: Parser<T>, transform: F) -> Parser<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Result<U, Expected> + Send + Sync + 'static,
{
    Parser::from_fn(move |input: &str, position| {
        parser
            .attempt(input, position)
            .and_then(|end, value| match transform(value) {
                Ok(value) => Outcome::success(end, value),
                Err(expected) => Outcome::failure(position, expected),
            })
    })
}

/// Name what `parser` expects.
///
/// Only failures at the start position are relabelled. A failure further
/// in keeps its precise expectation.
pub fn label<T: 'static>(parser: Parser<T>, text: impl Into<String>) -> Parser<T> {
    let text = text.into();
    Parser::from_fn(move |input: &str, position| match parser.attempt(input, position) {
        Outcome::Failure { position: at, .. } if at == position => {
            Outcome::failure(position, Expected::Literal(text.clone()))
        }
        other => other,
    })
}

impl<T: 'static> Parser<T> {
    /// See [`map`].
    #[must_use]
    pub fn map<U, F>(self, transform: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        map(self, transform)
    }

    /// See [`constant`].
    #[must_use]
    pub fn to<V: Clone + Send + Sync + 'static>(self, value: V) -> Parser<V> {
        constant(self, value)
    }

    /// See [`skip`].
    #[must_use]
    pub fn skip<U: 'static>(self, trailing: Parser<U>) -> Parser<T> {
        skip(self, trailing)
    }

    /// See [`then`].
    #[must_use]
    pub fn then<U: 'static>(self, second: Parser<U>) -> Parser<U> {
        then(self, second)
    }

    /// See [`try_map`].
    #[must_use]
    pub fn try_map<U, F>(self, transform: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> Result<U, Expected> + Send + Sync + 'static,
    {
        try_map(self, transform)
    }

    /// See [`label`].
    #[must_use]
    pub fn label(self, text: impl Into<String>) -> Parser<T> {
        label(self, text)
    }
}

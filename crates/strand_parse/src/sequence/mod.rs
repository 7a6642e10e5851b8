//! Running parsers one after another.
//!
//! [`joint`] collects a run of same-typed parsers into a `Vec`. Mixed
//! value types use the tuple products [`pair`] and [`triple`] instead of
//! erasing types. All of them stop at the first failure and return it
//! unchanged.

use crate::{Outcome, Parser};

/// Run each parser where the previous one stopped; collect their values.
pub fn joint<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<Vec<T>> {
    Parser::from_fn(move |input: &str, start| {
        let mut values = Vec::with_capacity(parsers.len());
        let mut position = start;
        for parser in &parsers {
            match parser.attempt(input, position) {
                Outcome::Success { end, value } => {
                    values.push(value);
                    position = end;
                }
                Outcome::Failure { position, expected } => {
                    return Outcome::failure(position, expected);
                }
            }
        }
        Outcome::success(position, values)
    })
}

/// `first` then `second`, yielding both values.
pub fn pair<A: 'static, B: 'static>(first: Parser<A>, second: Parser<B>) -> Parser<(A, B)> {
    Parser::from_fn(move |input: &str, start| {
        first
            .attempt(input, start)
            .and_then(|end, a| second.attempt(input, end).map(|b| (a, b)))
    })
}

/// `first`, `second`, then `third`, yielding all three values.
pub fn triple<A: 'static, B: 'static, C: 'static>(
    first: Parser<A>,
    second: Parser<B>,
    third: Parser<C>,
) -> Parser<(A, B, C)> {
    Parser::from_fn(move |input: &str, start| {
        first.attempt(input, start).and_then(|end, a| {
            second
                .attempt(input, end)
                .and_then(|end, b| third.attempt(input, end).map(|c| (a, b, c)))
        })
    })
}

impl<T: 'static> Parser<T> {
    /// See [`pair`].
    #[must_use]
    pub fn and<U: 'static>(self, second: Parser<U>) -> Parser<(T, U)> {
        pair(self, second)
    }
}

#[cfg(test)]
mod tests;

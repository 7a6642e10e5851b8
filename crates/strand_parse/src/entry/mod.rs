//! Top-level entry points.
//!
//! These are the only places a failure becomes an error.

use tracing::debug;

use crate::{end_of_input, skip, Outcome, ParseError, Parser};

/// Run `parser` from the start of `input`.
///
/// Trailing unparsed input is allowed; see [`parse_strict`].
pub fn parse<T: 'static>(parser: &Parser<T>, input: &str) -> Result<T, ParseError> {
    match parser.attempt(input, 0) {
        Outcome::Success { value, .. } => Ok(value),
        Outcome::Failure { position, expected } => {
            let error = ParseError::new(input, position, expected);
            debug!(
                position,
                line = error.line,
                column = error.column,
                expected = %error.expected,
                "parse failed"
            );
            Err(error)
        }
    }
}

/// Run `parser` from the start of `input` and require it to consume all of it.
pub fn parse_strict<T: 'static>(parser: &Parser<T>, input: &str) -> Result<T, ParseError> {
    parse(&skip(parser.clone(), end_of_input()), input)
}

impl<T: 'static> Parser<T> {
    /// See [`parse`].
    pub fn parse(&self, input: &str) -> Result<T, ParseError> {
        parse(self, input)
    }

    /// See [`parse_strict`].
    pub fn parse_strict(&self, input: &str) -> Result<T, ParseError> {
        parse_strict(self, input)
    }
}

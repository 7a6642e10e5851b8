//! Self-referential parsers.
//!
//! Grammars like JSON refer to themselves: a value may be an array of
//! values. [`recursive`] hands the definition a handle to the parser being
//! defined. The handle holds the definition weakly and the returned parser
//! holds it strongly, so the grammar owns no reference cycle.

use std::sync::{Arc, OnceLock};

use strand_stack::ensure_sufficient_stack;

use crate::{Expected, Outcome, Parser};

const UNDEFINED: &str = "<recursive parser used before definition>";
const DROPPED: &str = "<dropped recursive parser>";

/// Define a parser in terms of itself.
///
/// ```
/// use strand_parse::{character, recursive};
///
/// // Balanced parentheses, counting the nesting depth.
/// let depth = recursive(|depth: strand_parse::Parser<u32>| {
///     character('(')
///         .then(depth.optional())
///         .skip(character(')'))
///         .map(|inner| inner.map_or(1, |d| d + 1))
/// });
///
/// assert_eq!(depth.parse_strict("((()))").ok(), Some(3));
/// ```
///
/// Every recursive entry grows the stack when it runs low, so nesting
/// depth is bounded by memory rather than the thread's stack size.
///
/// The handle passed to `define` must not outlive the returned parser; a
/// handle whose owner was dropped fails with `<dropped recursive parser>`.
pub fn recursive<T, F>(define: F) -> Parser<T>
where
    T: 'static,
    F: FnOnce(Parser<T>) -> Parser<T>,
{
    let cell: Arc<OnceLock<Parser<T>>> = Arc::new(OnceLock::new());
    let weak = Arc::downgrade(&cell);
    let handle = Parser::from_fn(move |input: &str, position| match weak.upgrade() {
        Some(cell) => attempt_defined(&cell, input, position),
        None => Outcome::failure(position, Expected::literal(DROPPED)),
    });
    let body = define(handle);
    // The cell is private to this call, so it is still empty.
    let _ = cell.set(body);
    Parser::from_fn(move |input: &str, position| attempt_defined(&cell, input, position))
}

fn attempt_defined<T>(cell: &OnceLock<Parser<T>>, input: &str, position: usize) -> Outcome<T> {
    match cell.get() {
        Some(parser) => ensure_sufficient_stack(|| parser.attempt(input, position)),
        None => Outcome::failure(position, Expected::literal(UNDEFINED)),
    }
}

#[cfg(test)]
mod tests;

//! Complete grammars written against the public `strand_parse` API.
//!
//! - [`json`]: JSON documents into a [`Json`] tree.
//! - [`calc`]: arithmetic tokens and an expression evaluator.

pub mod calc;
pub mod json;

pub use calc::{evaluate, tokenize, tokens, Token};
pub use json::{json_value, parse_json, Json};

use strand_parse::{whitespace, Parser};

/// `parser` followed by any whitespace, which is discarded.
pub(crate) fn lexeme<T: 'static>(parser: Parser<T>) -> Parser<T> {
    parser.skip(whitespace())
}

//! Errors surfaced to callers.
//!
//! Inside the engine a failure is an [`Outcome::Failure`](crate::Outcome)
//! value. Only the entry points turn it into a [`ParseError`].

use crate::location::LineIndex;
use crate::Expected;

/// Maximum number of characters of unmatched input quoted in a [`ParseError`].
pub const EXCERPT_CHARS: usize = 5;

/// A top-level parse failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "expected {} at line {line}, column {column} (offset {position}), found {}",
    .expected.describe(),
    found(.excerpt)
)]
pub struct ParseError {
    /// Byte offset of the failure.
    pub position: usize,
    /// What the parser wanted at `position`.
    pub expected: Expected,
    /// 1-based line of `position`.
    pub line: u32,
    /// 1-based column of `position`, counted in characters.
    pub column: u32,
    /// Up to [`EXCERPT_CHARS`] characters of input starting at `position`.
    pub excerpt: String,
}

impl ParseError {
    /// Locate a failure at `position` in `input`.
    #[cold]
    pub fn new(input: &str, position: usize, expected: Expected) -> Self {
        let (line, column) = LineIndex::build(input).line_col(input, position);
        let excerpt = input
            .get(position..)
            .unwrap_or("")
            .chars()
            .take(EXCERPT_CHARS)
            .collect();
        ParseError {
            position,
            expected,
            line,
            column,
            excerpt,
        }
    }

    /// Whether the failure happened because the input ran out.
    pub fn at_end_of_input(&self) -> bool {
        self.excerpt.is_empty()
    }
}

fn found(excerpt: &str) -> String {
    if excerpt.is_empty() {
        "end of input".to_string()
    } else {
        format!("{excerpt:?}")
    }
}

/// A pattern given to [`try_pattern`](crate::try_pattern) did not compile.
#[derive(Clone, Debug, thiserror::Error)]
#[error("invalid pattern `{pattern}`: {source}")]
pub struct PatternError {
    /// The anchored pattern text.
    pub pattern: String,
    #[source]
    pub(crate) source: regex::Error,
}

//! Parser combinators over in-memory text.
//!
//! Every parser is a value with a single operation,
//! [`attempt(input, position)`](Parser::attempt), returning an [`Outcome`]:
//! either the end position and a value, or the failure position and an
//! [`Expected`] describing what was wanted there. Combinators take parsers
//! and return new parsers; nothing is mutated, so a parser can be shared
//! between threads and reused on any number of inputs.
//!
//! ```
//! use strand_parse::{character, pattern, sep_by};
//!
//! let number = pattern(r"\d+").try_map(|digits| {
//!     digits.parse::<u32>().map_err(|_| strand_parse::Expected::literal("a u32"))
//! });
//! let numbers = sep_by(number, character(','));
//!
//! assert_eq!(numbers.parse_strict("1,22,333").ok(), Some(vec![1, 22, 333]));
//! ```
//!
//! # Backtracking
//!
//! Failures carry positions, and the position decides how alternation
//! recovers:
//!
//! | Combinator | Alternative fails at start | Alternative fails past start |
//! |------------|----------------------------|------------------------------|
//! | [`choice`] | try the next one | commit: report this failure |
//! | [`try_choice`] | try the next one | try the next one |
//!
//! `choice` keeps PEG-style grammars linear; `try_choice` re-explores at
//! the cost of repeated work.
//!
//! # Positions
//!
//! Positions are byte offsets into the `&str` input and always fall on a
//! `char` boundary. Single-character parsers consume one `char`.

mod choice;
mod entry;
mod error;
mod expected;
pub mod location;
mod outcome;
mod parser;
mod primitive;
mod recursive;
mod repeat;
mod separated;
mod sequence;
mod transform;

pub use choice::{choice, optional, try_choice};
pub use entry::{parse, parse_strict};
pub use error::{ParseError, PatternError, EXCERPT_CHARS};
pub use expected::Expected;
pub use outcome::Outcome;
pub use parser::{Attempt, Parser};
pub use primitive::{
    character, digit, end_of_input, letter, literal, match_char, none_of, one_of, pattern, space,
    try_pattern, whitespace,
};
pub use recursive::recursive;
pub use repeat::{count, many, many1, times, UNBOUNDED};
pub use separated::{sep_by, sep_by1, separated};
pub use sequence::{joint, pair, triple};
pub use transform::{constant, label, map, skip, then, try_map};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for combinator diagnostics.
///
/// Does nothing unless `RUST_LOG` is set, and only the first call has any
/// effect. `RUST_LOG=strand_parse=trace` shows commit and backtrack
/// decisions; `debug` shows failed top-level parses.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Ordered, commit-on-consumption alternation over two or more parsers.
///
/// Shorthand for [`choice`]`(vec![...])` that rejects a single alternative
/// at compile time.
///
/// ```
/// use strand_parse::literal;
///
/// let keyword = strand_parse::choice![literal("let"), literal("fn"), literal("if")];
/// assert_eq!(keyword.parse("fn main").ok(), Some("fn".to_string()));
/// ```
#[macro_export]
macro_rules! choice {
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::choice(vec![$first, $($rest),+])
    };
}

/// Fully backtracking alternation over two or more parsers.
///
/// Shorthand for [`try_choice`]`(vec![...])`.
#[macro_export]
macro_rules! try_choice {
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::try_choice(vec![$first, $($rest),+])
    };
}

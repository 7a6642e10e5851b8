//! Leaf parsers that look at the input directly.
//!
//! Single-character parsers check `position < input.len()` against the
//! actual position, never just "input is non-empty", and fail at the
//! unchanged position. [`literal`] is the exception that reports how far it
//! got: it fails past the longest matched prefix.

use regex::Regex;
use rustc_hash::FxHashSet;

use crate::{Expected, Outcome, Parser, PatternError};

/// The unparsed remainder, or `""` for a position outside the input.
#[inline]
fn rest_of(input: &str, position: usize) -> &str {
    input.get(position..).unwrap_or("")
}

/// Match one character satisfying `predicate`; fail with `label` otherwise.
pub fn match_char<F>(predicate: F, label: impl Into<String>) -> Parser<char>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    let label = label.into();
    Parser::from_fn(move |input: &str, position| match rest_of(input, position).chars().next() {
        Some(c) if predicate(c) => Outcome::success(position + c.len_utf8(), c),
        _ => Outcome::failure(position, Expected::Literal(label.clone())),
    })
}

/// Match exactly the character `expected`.
pub fn character(expected: char) -> Parser<char> {
    Parser::from_fn(move |input: &str, position| match rest_of(input, position).chars().next() {
        Some(c) if c == expected => Outcome::success(position + c.len_utf8(), c),
        _ => Outcome::failure(position, Expected::Char(expected)),
    })
}

/// Match `text` verbatim.
///
/// On mismatch the failure position is past the longest prefix of `text`
/// that did match, so `literal("hello")` on `"helllo"` fails at 4.
pub fn literal(text: impl Into<String>) -> Parser<String> {
    let text = text.into();
    Parser::from_fn(move |input: &str, position| {
        let rest = rest_of(input, position);
        if rest.starts_with(text.as_str()) {
            return Outcome::success(position + text.len(), text.clone());
        }
        let matched: usize = rest
            .chars()
            .zip(text.chars())
            .take_while(|(found, wanted)| found == wanted)
            .map(|(found, _)| found.len_utf8())
            .sum();
        Outcome::failure(position + matched, Expected::Literal(text.clone()))
    })
}

/// Match a regular expression anchored at the current position.
///
/// A leading `^` is added when `source` has none. On failure the position
/// is unchanged and the expectation is the anchored pattern text.
///
/// # Panics
///
/// Panics if `source` is not a valid pattern; use [`try_pattern`] for
/// patterns that are not known at compile time.
pub fn pattern(source: &str) -> Parser<String> {
    match try_pattern(source) {
        Ok(parser) => parser,
        Err(err) => panic!("{err}"),
    }
}

/// Fallible form of [`pattern`].
pub fn try_pattern(source: &str) -> Result<Parser<String>, PatternError> {
    let body = source.strip_prefix('^').unwrap_or(source);
    let anchored = format!("^{body}");
    // Group the body so `^` binds to every alternative of `a|b`.
    let regex = Regex::new(&format!("^(?:{body})")).map_err(|source| PatternError {
        pattern: anchored.clone(),
        source,
    })?;
    Ok(Parser::from_fn(move |input: &str, position| {
        match regex.find(rest_of(input, position)) {
            Some(found) => Outcome::success(position + found.end(), found.as_str().to_string()),
            None => Outcome::failure(position, Expected::Literal(anchored.clone())),
        }
    }))
}

/// Consume the longest run of whitespace. Always succeeds, possibly empty.
pub fn whitespace() -> Parser<String> {
    Parser::from_fn(|input: &str, position| {
        let rest = rest_of(input, position);
        let trimmed = rest.trim_start();
        let run = &rest[..rest.len() - trimmed.len()];
        Outcome::success(position + run.len(), run.to_string())
    })
}

/// Succeed without consuming iff `position` is the end of the input.
pub fn end_of_input() -> Parser<()> {
    Parser::from_fn(|input: &str, position| {
        if position == input.len() {
            Outcome::success(position, ())
        } else {
            Outcome::failure(position, Expected::literal("EOF"))
        }
    })
}

/// Match any one character contained in `set`.
pub fn one_of(set: &str) -> Parser<char> {
    let members: FxHashSet<char> = set.chars().collect();
    match_char(move |c| members.contains(&c), format!("one of {set}"))
}

/// Match any one character not contained in `set`.
pub fn none_of(set: &str) -> Parser<char> {
    let members: FxHashSet<char> = set.chars().collect();
    match_char(move |c| !members.contains(&c), format!("none of {set}"))
}

/// An ASCII decimal digit.
pub fn digit() -> Parser<char> {
    match_char(|c| c.is_ascii_digit(), "a digit")
}

/// An alphabetic character, in any script.
pub fn letter() -> Parser<char> {
    match_char(char::is_alphabetic, "a letter")
}

/// A single whitespace character.
pub fn space() -> Parser<char> {
    match_char(char::is_whitespace, "a space")
}

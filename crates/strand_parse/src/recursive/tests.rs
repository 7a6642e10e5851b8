use super::*;
use crate::{character, choice, digit, literal, sep_by};
use pretty_assertions::assert_eq;

/// Nested lists of digits, e.g. `[1,[2,3],[]]`, flattened to their digits.
fn nested() -> Parser<Vec<char>> {
    recursive(|nested: Parser<Vec<char>>| {
        let leaf = digit().map(|d| vec![d]);
        let list = character('[')
            .then(sep_by(nested, character(',')).optional())
            .skip(character(']'))
            .map(|items| items.unwrap_or_default().concat());
        choice(vec![leaf, list])
    })
}

#[test]
fn test_recursion_parses_nested_structures() {
    assert_eq!(
        nested().attempt("[1,[2,3],[]]", 0),
        Outcome::success(12, vec!['1', '2', '3'])
    );
}

#[test]
fn test_recursion_reports_inner_failures() {
    assert_eq!(
        nested().attempt("[1,[2;3]]", 0),
        Outcome::failure(5, Expected::Char(']'))
    );
}

#[test]
fn test_recursion_survives_deep_nesting() {
    let depth = 50_000;
    let input = format!("{}7{}", "[".repeat(depth), "]".repeat(depth));
    assert_eq!(
        nested().attempt(&input, 0),
        Outcome::success(input.len(), vec!['7'])
    );
}

#[test]
fn test_recursion_is_reusable_and_shareable() {
    let parser = nested();
    let worker = parser.clone();
    let from_thread = std::thread::spawn(move || worker.attempt("[[4],5]", 0))
        .join()
        .ok();
    assert_eq!(from_thread, Some(Outcome::success(7, vec!['4', '5'])));
    assert_eq!(parser.attempt("[[4],5]", 0), Outcome::success(7, vec!['4', '5']));
}

#[test]
fn test_escaped_handle_fails_after_owner_is_dropped() {
    let mut escaped = None;
    let owner = recursive(|this: Parser<String>| {
        escaped = Some(this.clone());
        literal("a").or(this)
    });
    assert_eq!(owner.attempt("a", 0), Outcome::success(1, "a".to_string()));
    drop(owner);
    let escaped = escaped.map(|handle| handle.attempt("a", 0));
    assert_eq!(
        escaped,
        Some(Outcome::failure(0, Expected::literal(DROPPED)))
    );
}

#[test]
fn test_handle_attempted_during_definition_is_undefined() {
    let mut early = None;
    let _owner = recursive(|this: Parser<String>| {
        early = Some(this.attempt("a", 0));
        literal("a")
    });
    assert_eq!(early, Some(Outcome::failure(0, Expected::literal(UNDEFINED))));
}

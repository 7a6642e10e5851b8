//! Property-based tests for the combinator laws.
//!
//! Inputs mix ASCII with multi-byte characters so that positions are
//! exercised away from the one-byte-per-char case.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use strand_parse::{
    character, choice, digit, end_of_input, letter, literal, map, none_of, one_of, pattern,
    sep_by, space, times, try_choice, whitespace, Outcome, Parser,
};

// -- Strategies --

fn input_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c0-9 ,é€\n]{0,16}").expect("valid regex")
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c]{1,5}").expect("valid regex")
}

/// Every primitive, with values erased to the matched text length.
fn primitives() -> Vec<(&'static str, Parser<usize>)> {
    vec![
        ("character", character('a').map(char::len_utf8)),
        ("digit", digit().map(char::len_utf8)),
        ("letter", letter().map(char::len_utf8)),
        ("space", space().map(char::len_utf8)),
        ("one_of", one_of("b€").map(char::len_utf8)),
        ("none_of", none_of("a,").map(char::len_utf8)),
        ("literal", literal("ab").map(|s| s.len())),
        ("pattern", pattern(r"[0-9]+").map(|s| s.len())),
        ("whitespace", whitespace().map(|s| s.len())),
        ("end_of_input", end_of_input().map(|()| 0)),
    ]
}

/// A `char` boundary of `input`, chosen by `selector`.
fn boundary(input: &str, selector: prop::sample::Index) -> usize {
    let boundaries: Vec<usize> = input
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(input.len()))
        .collect();
    boundaries[selector.index(boundaries.len())]
}

// -- Properties --

proptest! {
    #[test]
    fn prop_primitives_never_move_backwards(input in input_strategy(), selector: prop::sample::Index) {
        let start = boundary(&input, selector);
        for (name, parser) in primitives() {
            match parser.attempt(&input, start) {
                Outcome::Success { end, value } => {
                    prop_assert!(end >= start, "{} ended before its start", name);
                    prop_assert_eq!(end - start, value, "{} consumed more than it matched", name);
                    prop_assert!(input.is_char_boundary(end));
                }
                Outcome::Failure { position, .. } => {
                    prop_assert!(position >= start, "{} failed before its start", name);
                    prop_assert!(input.is_char_boundary(position));
                }
            }
        }
    }

    #[test]
    fn prop_map_identity_preserves_outcome(input in input_strategy(), selector: prop::sample::Index) {
        let start = boundary(&input, selector);
        for (_, parser) in primitives() {
            let mapped = map(parser.clone(), |value| value);
            prop_assert_eq!(mapped.attempt(&input, start), parser.attempt(&input, start));
        }
    }

    #[test]
    fn prop_zero_times_consumes_nothing(input in input_strategy(), selector: prop::sample::Index) {
        let start = boundary(&input, selector);
        for (_, parser) in primitives() {
            prop_assert_eq!(
                times(parser, 0, 0).attempt(&input, start),
                Outcome::success(start, Vec::new())
            );
        }
    }

    #[test]
    fn prop_sep_by_single_element(word in word_strategy()) {
        let list = sep_by(pattern("[a-c]+"), character(','));
        prop_assert_eq!(
            list.attempt(&word, 0),
            Outcome::success(word.len(), vec![word.clone()])
        );
    }

    #[test]
    fn prop_choice_reports_committed_failure(prefix in word_strategy(), rest in "[0-9]{0,4}") {
        let committed = literal(format!("{prefix}!"));
        let fallback = literal(prefix.clone());
        let input = format!("{prefix}?{rest}");

        let expected = committed.attempt(&input, 0);
        prop_assert_eq!(expected.position(), prefix.len());

        let alternatives = choice(vec![committed.clone(), fallback.clone()]);
        prop_assert_eq!(alternatives.attempt(&input, 0), expected);

        let backtracking = try_choice(vec![committed, fallback]);
        prop_assert_eq!(
            backtracking.attempt(&input, 0),
            Outcome::success(prefix.len(), prefix.clone())
        );
    }
}

use super::*;
use crate::{character, literal, pattern, Expected};
use pretty_assertions::assert_eq;

fn brackets() -> Parser<Vec<String>> {
    joint(vec![literal(">>"), pattern(r"\d+"), literal("<<")])
}

#[test]
fn test_joint_collects_values_in_order() {
    assert_eq!(
        brackets().attempt(">>12345<<", 0),
        Outcome::success(
            9,
            vec![">>".to_string(), "12345".to_string(), "<<".to_string()]
        )
    );
}

#[test]
fn test_joint_stops_at_first_failure() {
    assert_eq!(
        brackets().attempt(">>>1234<<", 0),
        Outcome::failure(2, Expected::literal(r"^\d+"))
    );
}

#[test]
fn test_joint_reports_failure_position_of_failing_parser() {
    assert_eq!(
        brackets().attempt(">>12<", 0),
        Outcome::failure(5, Expected::literal("<<"))
    );
}

#[test]
fn test_joint_of_nothing_succeeds_in_place() {
    assert_eq!(joint::<String>(vec![]).attempt("abc", 1), Outcome::success(1, vec![]));
}

#[test]
fn test_joint_does_not_attempt_after_failure() {
    let p = joint(vec![
        literal("a"),
        literal("b"),
        Parser::from_fn(|_: &str, _| -> Outcome<String> { panic!("attempted after failure") }),
    ]);
    assert_eq!(p.attempt("ax", 0), Outcome::failure(1, Expected::literal("b")));
}

#[test]
fn test_pair_mixes_value_types() {
    let key_value = pair(pattern("[a-z]+"), character('=').then(pattern(r"\d+")));
    assert_eq!(
        key_value.attempt("port=80", 0),
        Outcome::success(7, ("port".to_string(), "80".to_string()))
    );
}

#[test]
fn test_and_is_pair() {
    let p = character('x').and(pattern(r"\d"));
    assert_eq!(p.attempt("x1", 0), Outcome::success(2, ('x', "1".to_string())));
    assert_eq!(p.attempt("x", 0), Outcome::failure(1, Expected::literal(r"^\d")));
}

#[test]
fn test_triple_collects_three() {
    let range = triple(pattern(r"\d+"), literal(".."), pattern(r"\d+"));
    assert_eq!(
        range.attempt("1..10", 0),
        Outcome::success(5, ("1".to_string(), "..".to_string(), "10".to_string()))
    );
    assert_eq!(range.attempt("1.10", 0), Outcome::failure(2, Expected::literal("..")));
}

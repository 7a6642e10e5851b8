use super::*;
use pretty_assertions::assert_eq;

// === Tokens ===

#[test]
fn test_tokenize_mixed_input() {
    assert_eq!(
        tokenize(" 1 + -2*(3.5) % 4 "),
        Ok(vec![
            Token::Number(1.0),
            Token::Plus,
            Token::Number(-2.0),
            Token::Star,
            Token::LeftParen,
            Token::Number(3.5),
            Token::RightParen,
            Token::Percent,
            Token::Number(4.0),
        ])
    );
}

#[test]
fn test_attached_sign_belongs_to_number() {
    assert_eq!(
        tokenize("3-2"),
        Ok(vec![Token::Number(3.0), Token::Number(-2.0)])
    );
    assert_eq!(
        tokenize("3 - 2 / 1"),
        Ok(vec![
            Token::Number(3.0),
            Token::Minus,
            Token::Number(2.0),
            Token::Slash,
            Token::Number(1.0),
        ])
    );
}

#[test]
fn test_empty_input_has_no_tokens() {
    assert_eq!(tokenize(""), Ok(vec![]));
    assert_eq!(tokenize("   "), Ok(vec![]));
}

#[test]
fn test_unknown_character_stops_tokens() {
    let err = tokenize("1 $").err();
    assert_eq!(
        err.map(|e| (e.position, e.expected)),
        Some((2, Expected::literal("EOF")))
    );
}

// === Evaluation ===

#[test]
fn test_single_number() {
    assert_eq!(evaluate("42"), Ok(42.0));
    assert_eq!(evaluate("+1.5"), Ok(1.5));
}

#[test]
fn test_precedence() {
    assert_eq!(evaluate("2+3*4"), Ok(14.0));
    assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
    assert_eq!(evaluate("10 % 4 + 1"), Ok(3.0));
}

#[test]
fn test_left_associativity() {
    assert_eq!(evaluate("8/2/2"), Ok(2.0));
    assert_eq!(evaluate("2-3-4"), Ok(-5.0));
}

#[test]
fn test_subtraction_without_spaces() {
    assert_eq!(evaluate("3-2"), Ok(1.0));
    assert_eq!(evaluate("3 - -2"), Ok(5.0));
    assert_eq!(evaluate("2*-3"), Ok(-6.0));
}

#[test]
fn test_nested_parentheses() {
    assert_eq!(evaluate(" ( ( (1) ) + ((2)) ) "), Ok(3.0));
}

#[test]
fn test_division_by_zero_is_infinite() {
    assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
}

#[test]
fn test_unclosed_parenthesis() {
    let err = evaluate("(1+2").err();
    assert_eq!(err.as_ref().map(|e| e.expected.clone()), Some(Expected::Char(')')));
    assert_eq!(err.map(|e| e.at_end_of_input()), Some(true));
}

#[test]
fn test_dangling_operator_is_left_unparsed() {
    let err = evaluate("2 +").err();
    assert_eq!(
        err.map(|e| (e.position, e.expected)),
        Some((2, Expected::literal("EOF")))
    );
}

#[test]
fn test_missing_operand() {
    let err = evaluate("*").err();
    assert_eq!(err.map(|e| e.expected.describe()), Some("`number` or `(`".to_string()));
}

#[test]
fn test_deep_nesting() {
    let depth = 5_000;
    let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(evaluate(&input), Ok(1.0));
}

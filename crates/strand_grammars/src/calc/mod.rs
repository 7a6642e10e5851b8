//! Arithmetic over decimal numbers.
//!
//! ```text
//! expr   = term (('+' | '-') term)*
//! term   = factor (('*' | '/' | '%') factor)*
//! factor = number | '(' expr ')'
//! number = [+-]?\d+(\.\d+)?
//! ```
//!
//! A sign written directly before digits belongs to the number, so `3-2`
//! tokenizes as `3` and `-2`. The evaluator still reads it as a
//! subtraction because it looks for an operator before the next operand.

use strand_parse::{
    character, many, pair, pattern, recursive, whitespace, Expected, ParseError, Parser,
};
use tracing::trace;

use crate::lexeme;

/// One arithmetic token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LeftParen,
    RightParen,
}

/// Tokens, with whitespace allowed before, between, and after them.
pub fn tokens() -> Parser<Vec<Token>> {
    let token = strand_parse::choice![
        lexeme(number()).map(Token::Number),
        symbol('+', Token::Plus),
        symbol('-', Token::Minus),
        symbol('*', Token::Star),
        symbol('/', Token::Slash),
        symbol('%', Token::Percent),
        symbol('(', Token::LeftParen),
        symbol(')', Token::RightParen),
    ];
    whitespace().then(many(token))
}

/// Split all of `input` into tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    tokens().parse_strict(input)
}

/// Evaluate all of `input` as an expression.
///
/// Operators are left-associative and follow IEEE 754: dividing by zero
/// gives an infinity, not an error.
///
/// ```
/// assert_eq!(strand_grammars::evaluate("2 + 3 * (4 - 1)").ok(), Some(11.0));
/// ```
pub fn evaluate(input: &str) -> Result<f64, ParseError> {
    let value = whitespace().then(expression()).parse_strict(input)?;
    trace!(value, "evaluated expression");
    Ok(value)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl Operator {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
            Operator::Remainder => lhs % rhs,
        }
    }
}

fn expression() -> Parser<f64> {
    recursive(|expr: Parser<f64>| {
        let factor = strand_parse::choice![
            lexeme(number()),
            lexeme(character('(')).then(expr).skip(lexeme(character(')'))),
        ];
        let term = left_fold(
            factor,
            strand_parse::choice![
                operator('*', Operator::Multiply),
                operator('/', Operator::Divide),
                operator('%', Operator::Remainder),
            ],
        );
        left_fold(
            term,
            strand_parse::choice![
                operator('+', Operator::Add),
                operator('-', Operator::Subtract),
            ],
        )
    })
}

/// `operand (operator operand)*`, combined left to right.
fn left_fold(operand: Parser<f64>, operator: Parser<Operator>) -> Parser<f64> {
    pair(operand.clone(), many(pair(operator, operand))).map(|(first, rest)| {
        rest.into_iter()
            .fold(first, |lhs, (operator, rhs)| operator.apply(lhs, rhs))
    })
}

fn operator(c: char, op: Operator) -> Parser<Operator> {
    lexeme(character(c)).to(op)
}

fn symbol(c: char, token: Token) -> Parser<Token> {
    lexeme(character(c)).to(token)
}

fn number() -> Parser<f64> {
    pattern(r"[+-]?\d+(?:\.\d+)?")
        .label("number")
        .try_map(|text| text.parse::<f64>().map_err(|_| Expected::literal("number")))
}

#[cfg(test)]
mod tests;

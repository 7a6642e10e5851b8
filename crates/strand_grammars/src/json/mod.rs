//! JSON documents.
//!
//! Every token is a lexeme: it swallows the whitespace after it, so only
//! the leading whitespace of a document needs separate handling.
//!
//! ```
//! use strand_grammars::{parse_json, Json};
//!
//! let doc = parse_json(r#" {"a": [1, 2], "b": null} "#).ok();
//! assert_eq!(
//!     doc.as_ref().and_then(|doc| doc.get("a")),
//!     Some(&Json::Array(vec![Json::Number(1.0), Json::Number(2.0)]))
//! );
//! ```

use strand_parse::{
    character, many, match_char, one_of, optional, pair, pattern, recursive, sep_by, whitespace,
    Expected, ParseError, Parser,
};
use tracing::trace;

use crate::lexeme;

/// A parsed JSON value.
#[derive(Clone, Debug, PartialEq)]
pub enum Json {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Json>),
    /// Members in document order. Duplicate keys are all kept.
    Object(Vec<(String, Json)>),
}

impl Json {
    /// The last member named `key`, if this is an object.
    pub fn get(&self, key: &str) -> Option<&Json> {
        match self {
            Json::Object(members) => members
                .iter()
                .rev()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// The element at `index`, if this is an array.
    pub fn at(&self, index: usize) -> Option<&Json> {
        match self {
            Json::Array(items) => items.get(index),
            _ => None,
        }
    }
}

/// A JSON value followed by any whitespace.
pub fn json_value() -> Parser<Json> {
    recursive(|value: Parser<Json>| {
        let array = token('[')
            .then(optional(sep_by(value.clone(), token(','))))
            .skip(token(']'))
            .map(|items| Json::Array(items.unwrap_or_default()));

        let member = pair(lexeme(string()).skip(token(':')), value);
        let object = token('{')
            .then(optional(sep_by(member, token(','))))
            .skip(token('}'))
            .map(|members| Json::Object(members.unwrap_or_default()));

        strand_parse::choice![
            keyword("null", Json::Null),
            keyword("true", Json::Bool(true)),
            keyword("false", Json::Bool(false)),
            lexeme(number()).map(Json::Number),
            lexeme(string()).map(Json::String),
            array,
            object,
        ]
    })
}

/// Parse a complete JSON document, allowing surrounding whitespace.
pub fn parse_json(input: &str) -> Result<Json, ParseError> {
    let document = whitespace().then(json_value());
    let json = document.parse_strict(input)?;
    trace!(bytes = input.len(), "parsed JSON document");
    Ok(json)
}

fn token(c: char) -> Parser<char> {
    lexeme(character(c))
}

fn keyword(text: &str, value: Json) -> Parser<Json> {
    lexeme(strand_parse::literal(text)).to(value)
}

fn number() -> Parser<f64> {
    pattern(r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")
        .label("number")
        .try_map(|text| text.parse::<f64>().map_err(|_| Expected::literal("number")))
}

/// One decoded step of a string body.
#[derive(Clone, Copy, Debug)]
enum Piece {
    Char(char),
    /// A `\uXXXX` escape. Surrogate pairs span two of these.
    Unit(u16),
}

fn string() -> Parser<String> {
    let plain = match_char(
        |c| c != '"' && c != '\\' && c >= ' ',
        "string character",
    )
    .map(Piece::Char);

    let escape = character('\\').then(strand_parse::choice![
        one_of("\"\\/bfnrt").map(|c| Piece::Char(unescape(c))),
        character('u').then(hex_unit()).map(Piece::Unit),
    ]);

    character('"')
        .then(many(strand_parse::choice![plain, escape]))
        .skip(character('"'))
        .map(decode)
        .label("string")
}

fn hex_unit() -> Parser<u16> {
    pattern("[0-9a-fA-F]{4}")
        .label("4 hex digits")
        .try_map(|hex| u16::from_str_radix(&hex, 16).map_err(|_| Expected::literal("4 hex digits")))
}

fn unescape(c: char) -> char {
    match c {
        'b' => '\u{8}',
        'f' => '\u{c}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        other => other,
    }
}

/// Join string pieces, pairing UTF-16 surrogates; unpaired ones become U+FFFD.
fn decode(pieces: Vec<Piece>) -> String {
    let mut text = String::with_capacity(pieces.len());
    let mut units = Vec::new();
    for piece in pieces {
        match piece {
            Piece::Unit(unit) => units.push(unit),
            Piece::Char(c) => {
                flush_units(&mut text, &mut units);
                text.push(c);
            }
        }
    }
    flush_units(&mut text, &mut units);
    text
}

fn flush_units(text: &mut String, units: &mut Vec<u16>) {
    text.extend(
        char::decode_utf16(units.drain(..)).map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

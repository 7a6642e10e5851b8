//! What a failed parser wanted to see.
//!
//! [`Expected`] is purely diagnostic: combinators build and merge it, but
//! never branch on it.

use std::fmt;

/// Description of the input a parser expected at its failure position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expected {
    /// Literal text, an anchored pattern, or a label such as `"a digit"`.
    Literal(String),
    /// A single character.
    Char(char),
    /// What each of several alternatives expected, in order.
    Aggregate(Vec<Expected>),
}

impl Expected {
    /// Expect the given text or label.
    pub fn literal(text: impl Into<String>) -> Self {
        Expected::Literal(text.into())
    }

    /// Combine the expectations of several alternatives.
    pub fn aggregate(items: impl IntoIterator<Item = Expected>) -> Self {
        Expected::Aggregate(items.into_iter().collect())
    }

    /// Leaf expectations with aggregates flattened, in order, duplicates removed.
    pub fn leaves(&self) -> Vec<&Expected> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Expected>) {
        match self {
            Expected::Aggregate(items) => {
                for item in items {
                    item.collect_leaves(out);
                }
            }
            leaf => {
                if !out.contains(&leaf) {
                    out.push(leaf);
                }
            }
        }
    }

    /// Human-readable list for error messages, e.g. `` `[`, `{`, or a digit ``.
    ///
    /// Literals that read as labels (containing a space) are left unquoted.
    pub fn describe(&self) -> String {
        let leaves: Vec<String> = self.leaves().into_iter().map(describe_leaf).collect();
        match leaves.as_slice() {
            [] => "nothing".to_string(),
            [only] => only.clone(),
            [first, second] => format!("{first} or {second}"),
            [init @ .., last] => format!("{}, or {last}", init.join(", ")),
        }
    }
}

fn describe_leaf(leaf: &Expected) -> String {
    match leaf {
        Expected::Literal(text) if text.contains(' ') => text.clone(),
        Expected::Literal(text) => format!("`{text}`"),
        Expected::Char(c) => format!("`{c}`"),
        Expected::Aggregate(_) => leaf.to_string(),
    }
}

/// Compact structural rendering: literals and chars verbatim, aggregates
/// as `[a, b]`.
impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Literal(text) => f.write_str(text),
            Expected::Char(c) => write!(f, "{c}"),
            Expected::Aggregate(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<char> for Expected {
    fn from(c: char) -> Self {
        Expected::Char(c)
    }
}

impl From<&str> for Expected {
    fn from(text: &str) -> Self {
        Expected::Literal(text.to_string())
    }
}

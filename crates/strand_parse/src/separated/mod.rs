//! Element lists with separators.
//!
//! The first element is always required, so these combinators never
//! produce an empty list, even with `min == 0`. Wrap the list in
//! [`optional`](crate::optional) to accept an empty one.
//!
//! After a separator matches, an element must follow: a failing element
//! fails the whole list and the separator is not given back.

use tracing::trace;

use crate::repeat::Bounds;
use crate::{Outcome, Parser, UNBOUNDED};

/// `element (separator element)*` with between `min` and `max` elements.
///
/// The first element counts toward the bounds. Once `max` elements are
/// collected the list ends without looking for another separator. When the
/// separator fails before `min` elements, its failure is returned.
///
/// # Panics
///
/// Panics if `min > max`, or if `max` is zero: the first element is always
/// taken, so no list fits in zero elements.
pub fn separated<T, S>(
    element: Parser<T>,
    separator: Parser<S>,
    min: usize,
    max: usize,
) -> Parser<Vec<T>>
where
    T: 'static,
    S: 'static,
{
    assert!(max > 0, "separated: max must be greater than zero");
    let bounds = Bounds::new("separated", min, max);
    Parser::from_fn(move |input: &str, start| {
        let (mut position, first) = match element.attempt(input, start) {
            Outcome::Success { end, value } => (end, value),
            Outcome::Failure { position, expected } => {
                return Outcome::failure(position, expected);
            }
        };
        let mut values = vec![first];
        while values.len() < bounds.max {
            let after_separator = match separator.attempt(input, position) {
                Outcome::Success { end, .. } => end,
                Outcome::Failure {
                    position: failed_at,
                    expected,
                } => {
                    if values.len() >= bounds.min {
                        break;
                    }
                    return Outcome::failure(failed_at, expected);
                }
            };
            match element.attempt(input, after_separator) {
                Outcome::Success { end, value } => {
                    values.push(value);
                    if end == position && bounds.is_unbounded() && values.len() >= bounds.min {
                        trace!(position, count = values.len(), "zero-width separated list stopped");
                        break;
                    }
                    position = end;
                }
                Outcome::Failure { position, expected } => {
                    return Outcome::failure(position, expected);
                }
            }
        }
        Outcome::success(position, values)
    })
}

/// Elements separated by `separator`, as many as match.
///
/// Like every list here, at least one element is required.
pub fn sep_by<T: 'static, S: 'static>(element: Parser<T>, separator: Parser<S>) -> Parser<Vec<T>> {
    separated(element, separator, 0, UNBOUNDED)
}

/// One or more elements.
pub fn sep_by1<T: 'static, S: 'static>(
    element: Parser<T>,
    separator: Parser<S>,
) -> Parser<Vec<T>> {
    separated(element, separator, 1, UNBOUNDED)
}

impl<T: 'static> Parser<T> {
    /// See [`sep_by`].
    #[must_use]
    pub fn sep_by<S: 'static>(self, separator: Parser<S>) -> Parser<Vec<T>> {
        sep_by(self, separator)
    }
}

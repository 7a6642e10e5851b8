//! Stack growth for recursive grammars.
//!
//! A recursive-descent parser built from combinators recurses once per
//! nesting level of its input, and every combinator layer adds frames on
//! top of that. `[[[[...]]]]` nested a few thousand deep is enough to blow a
//! default thread stack. [`ensure_sufficient_stack`] grows the stack on
//! demand before the recursion continues.
//!
//! On `wasm32` the call is a passthrough.
//!
//! # Configuration
//!
//! - **Red zone**: 128KB. A combinator chain between two recursive entry
//!   points can be deep, so the margin is larger than a hand-written
//!   parser would need.
//! - **Growth size**: 1MB per new segment.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// Wrap the re-entry point of a recursive parser, not every combinator:
/// one check per nesting level is enough.
///
/// ```
/// use strand_stack::ensure_sufficient_stack;
///
/// fn depth(s: &[u8]) -> usize {
///     ensure_sufficient_stack(|| match s.split_first() {
///         Some((b'[', rest)) => 1 + depth(rest),
///         _ => 0,
///     })
/// }
///
/// assert_eq!(depth(b"[[[x"), 3);
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

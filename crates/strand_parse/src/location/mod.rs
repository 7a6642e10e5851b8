//! Line and column lookup for byte positions.
//!
//! Parsers only deal in byte offsets. Humans want lines and columns, so
//! [`ParseError`](crate::ParseError) converts once, at the edge.
//!
//! For reporting many positions against the same input, build one
//! [`LineIndex`] and reuse it.
//!
//! ```
//! use strand_parse::location::LineIndex;
//!
//! let source = "line1\nline2\nline3";
//! let index = LineIndex::build(source);
//!
//! assert_eq!(index.line_col(source, 0), (1, 1));
//! assert_eq!(index.line_col(source, 8), (2, 3));
//! assert_eq!(index.line_col(source, 12), (3, 1));
//! ```

/// Byte offsets of every line start in a source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineIndex {
    /// `starts[0] == 0`; `starts[n]` is the byte after the n-th `\n`.
    starts: Vec<usize>,
}

impl LineIndex {
    /// Scan `source` once for newlines.
    pub fn build(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineIndex { starts }
    }

    /// 1-based line containing `offset`.
    pub fn line_of(&self, offset: usize) -> u32 {
        let index = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(index + 1).unwrap_or(u32::MAX)
    }

    /// 1-based `(line, column)` of `offset`; the column counts characters.
    ///
    /// Offsets past the end of `source` are clamped to it.
    pub fn line_col(&self, source: &str, offset: usize) -> (u32, u32) {
        let offset = offset.min(source.len());
        let line = self.line_of(offset);
        let start = self.line_start(line).unwrap_or(0);
        let prefix = source.get(start..offset).unwrap_or("");
        let column = u32::try_from(prefix.chars().count())
            .unwrap_or(u32::MAX - 1)
            .saturating_add(1);
        (line, column)
    }

    /// Byte offset where the 1-based `line` starts.
    pub fn line_start(&self, line: u32) -> Option<usize> {
        let index = usize::try_from(line.checked_sub(1)?).ok()?;
        self.starts.get(index).copied()
    }

    /// Number of lines; a trailing newline starts an empty last line.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}

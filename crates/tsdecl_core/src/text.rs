//! Source positions.
//!
//! The AST itself carries no positions; these types are used by the scanner,
//! by parse errors, and by diagnostics to point back into the source.

use std::fmt;

/// A byte offset from the start of the source text.
pub type TextPos = u32;

/// A start offset and a length, like TypeScript's `TextSpan`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextSpan {
    pub start: TextPos,
    pub length: TextPos,
}

impl TextSpan {
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// A zero-length span at `pos`.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self::new(pos, 0)
    }

    /// Exclusive end offset.
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// A half-open `pos..end` byte range, like TypeScript's `TextRange`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextRange {
    pub pos: TextPos,
    pub end: TextPos,
}

impl TextRange {
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= pos);
        Self { pos, end }
    }

    /// The text this range covers in `text`.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.pos as usize..self.end as usize]
    }
}

impl From<TextRange> for TextSpan {
    fn from(range: TextRange) -> Self {
        TextSpan::new(range.pos, range.end - range.pos)
    }
}

/// A 0-based line and byte column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct LineAndColumn {
    pub line: u32,
    pub character: u32,
}

impl LineAndColumn {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for LineAndColumn {
    /// The 1-based `line,column` pair `tsc` prints.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.line + 1, self.character + 1)
    }
}

/// Offsets of every line start in a text, for turning byte offsets into
/// lines and columns.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<TextPos>,
    len: TextPos,
}

impl LineMap {
    pub fn new(text: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| (i + 1) as TextPos))
            .collect();
        Self {
            line_starts,
            len: text.len() as TextPos,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line and column of `pos`; offsets past the end clamp to the end.
    pub fn line_and_column_of(&self, pos: TextPos) -> LineAndColumn {
        let pos = pos.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= pos) - 1;
        LineAndColumn::new(line as u32, pos - self.line_starts[line])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_slice_and_span() {
        let text = "declare const x: number;";
        let range = TextRange::new(8, 13);
        assert_eq!(range.slice(text), "const");
        assert_eq!(TextSpan::from(range), TextSpan::new(8, 5));
        assert_eq!(TextSpan::new(8, 5).end(), 13);
    }

    #[test]
    fn test_line_map() {
        let map = LineMap::new("line1\nline2\r\nline3");
        assert_eq!(map.line_count(), 3);
        assert_eq!(map.line_and_column_of(0), LineAndColumn::new(0, 0));
        assert_eq!(map.line_and_column_of(5), LineAndColumn::new(0, 5));
        assert_eq!(map.line_and_column_of(6), LineAndColumn::new(1, 0));
        assert_eq!(map.line_and_column_of(13), LineAndColumn::new(2, 0));

        let lc = map.line_and_column_of(8);
        assert_eq!(lc, LineAndColumn::new(1, 2));
        assert_eq!(lc.to_string(), "2,3");
    }

    #[test]
    fn test_line_map_clamps_past_end() {
        let map = LineMap::new("ab\ncd");
        assert_eq!(map.line_and_column_of(100), LineAndColumn::new(1, 2));
    }
}

//! Byte-offset spans into the schema source and line/column translation.

use std::ops::Range;

/// A half-open byte range into the schema source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Create a union of two spans (encompassing both)
    pub fn union(&self, other: Span) -> Span {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Width of a tab stop as counted by the GraphQL parser's positions.
const TAB_WIDTH: usize = 8;

/// Translates the 1-based line/column positions reported by `graphql-parser`
/// into byte offsets of the original source.
#[derive(Debug)]
pub(crate) struct LineIndex<'src> {
    source: &'src str,
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    /// Byte offset of a 1-based `line`/`column` pair.
    ///
    /// Columns advance by one per character, except tabs which jump to the
    /// next multiple of eight. Positions past the end clamp to the source
    /// length.
    pub(crate) fn offset(&self, line: usize, column: usize) -> usize {
        let Some(&line_start) = self.line_starts.get(line.saturating_sub(1)) else {
            return self.source.len();
        };

        let mut current = 1;
        for (idx, ch) in self.source[line_start..].char_indices() {
            if current >= column || ch == '\n' {
                return line_start + idx;
            }
            current = if ch == '\t' {
                current + TAB_WIDTH - ((current - 1) % TAB_WIDTH)
            } else {
                current + 1
            };
        }
        self.source.len()
    }

    /// Span of `needle` at or after the given position, or an empty span at
    /// the position when it cannot be found.
    pub(crate) fn find_after(&self, line: usize, column: usize, needle: &str) -> Span {
        self.find_from(self.offset(line, column), needle)
    }

    /// Span of `needle` at or after byte `offset`.
    pub(crate) fn find_from(&self, offset: usize, needle: &str) -> Span {
        let offset = offset.min(self.source.len());
        match self.source.get(offset..).and_then(|rest| rest.find(needle)) {
            Some(found) => Span::new(offset + found..offset + found + needle.len()),
            None => Span::new(offset..offset),
        }
    }

    /// Span of the single character starting at `offset`, empty at the end
    /// of the source.
    pub(crate) fn char_at(&self, offset: usize) -> Span {
        let offset = offset.min(self.source.len());
        let width = self
            .source
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);
        Span::new(offset..offset + width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basics() {
        let span = Span::new(3..8);
        assert_eq!(span.start(), 3);
        assert_eq!(span.end(), 8);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::default().is_empty());
    }

    #[test]
    fn test_span_union() {
        let union = Span::new(10..12).union(Span::new(2..4));
        assert_eq!(union, Span::new(2..12));
    }

    #[test]
    fn test_line_index_offsets() {
        let source = "type A {\n  name: String\n}\n";
        let index = LineIndex::new(source);

        assert_eq!(index.offset(1, 1), 0);
        assert_eq!(index.offset(1, 6), 5);
        assert_eq!(index.offset(2, 3), 11);
        assert_eq!(&source[index.offset(2, 3)..index.offset(2, 7)], "name");
    }

    #[test]
    fn test_line_index_clamps() {
        let source = "type A";
        let index = LineIndex::new(source);

        assert_eq!(index.offset(1, 100), source.len());
        assert_eq!(index.offset(9, 1), source.len());
    }

    #[test]
    fn test_line_index_tabs() {
        let source = "\tb";
        let index = LineIndex::new(source);
        assert_eq!(index.offset(1, 9), 1);
    }

    #[test]
    fn test_line_index_multibyte() {
        let source = "# é\ntype A";
        let index = LineIndex::new(source);
        assert_eq!(index.offset(1, 3), 2);
        assert_eq!(index.offset(2, 6), source.find('A').unwrap());
    }

    #[test]
    fn test_find_after() {
        let source = "\"\"\"docs\"\"\"\ntype User { id: ID }";
        let index = LineIndex::new(source);

        let span = index.find_after(1, 1, "User");
        assert_eq!(&source[span.start()..span.end()], "User");

        let missing = index.find_after(2, 1, "Nope");
        assert!(missing.is_empty());
    }

    #[test]
    fn test_char_at() {
        let source = "aé";
        let index = LineIndex::new(source);

        assert_eq!(index.char_at(0), Span::new(0..1));
        assert_eq!(index.char_at(1), Span::new(1..3));
        assert!(index.char_at(3).is_empty());
    }
}

use std::ops::Range;

/// A byte range in the document source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Locate a 1-based line and byte column in `source`, as reported by
    /// JSON syntax errors.
    ///
    /// The span covers the character at that position, or is empty when the
    /// position is at a line break or past the end of the input. Line `0`
    /// (errors without a position) maps to the start of the source.
    pub fn at_line_column(source: &str, line: usize, column: usize) -> Self {
        if line == 0 {
            return Self::new(0..0);
        }

        let line_start: usize = source
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        let mut offset = (line_start + column.saturating_sub(1)).min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }

        match source[offset..].chars().next() {
            Some(ch) if ch != '\n' => Self::new(offset..offset + ch.len_utf8()),
            _ => Self::new(offset..offset),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

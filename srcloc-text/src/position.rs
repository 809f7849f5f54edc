use std::cmp::Ordering;
use std::fmt;

/// A single point in a source file.
///
/// The line and column are carried as supplied by whoever produced the position (usually the
/// tokenizer); only the byte `offset` is used to slice source text. Positions are ordered by
/// offset.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    line:   usize,
    column: usize,
    offset: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Byte offset into the full source string
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset
            .cmp(&other.offset)
            .then(self.line.cmp(&other.line))
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}[{}]", self.line, self.column, self.offset)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

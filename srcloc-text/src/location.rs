use std::fmt;

use tracing::trace;

use crate::{Error, Position};

/// A range of source text, from `start` up to (but not including) `end`.
///
/// The end may be absent while a parser is still recognizing the construct the location belongs
/// to. Endpoints can be moved after construction so a node's span can be widened or backdated as
/// parsing proceeds; nothing checks that `start <= end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    start: Position,
    end:   Option<Position>,
}

impl SourceLocation {
    pub fn new(start: Position, end: Option<Position>) -> Self {
        Self { start, end }
    }

    /// Open a location at `start` without an end.
    pub fn starting_at(start: Position) -> Self {
        Self { start, end: None }
    }

    /// Copy the endpoints of `other` as they are right now.
    pub fn from_location(other: &SourceLocation) -> Self {
        Self::new(other.start, other.end)
    }

    /// A location covering everything from the start of `first` to the end of `last`.
    pub fn wrap(first: &SourceLocation, last: &SourceLocation) -> Self {
        Self {
            start: first.start,
            end:   last.end,
        }
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn set_start(&mut self, start: Position) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Option<Position>) {
        self.end = end;
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.end.is_some()
    }

    /// The text covered by this location in `source`.
    ///
    /// An end past the end of `source` is clamped to its length, and an empty or inverted range
    /// gives an empty string. Both offsets are byte offsets; an offset that splits a UTF-8
    /// sequence is an error, as is a location with no end.
    pub fn extract_text<'s>(&self, source: &'s str) -> Result<&'s str, Error> {
        let Some(end) = self.end else {
            return Err(Error::Unterminated { start: self.start });
        };

        let start = self.start.offset();
        let mut end = end.offset();

        if end > source.len() {
            trace!(end, len = source.len(), "clamping location end to source length");
            end = source.len();
        }

        if start >= end {
            trace!(start, end, "empty or inverted location");
            return Ok("");
        }

        source.get(start..end).ok_or_else(|| {
            let offset = if source.is_char_boundary(start) {
                end
            } else {
                start
            };

            Error::NotCharBoundary { offset }
        })
    }
}

impl From<(Position, Position)> for SourceLocation {
    fn from((start, end): (Position, Position)) -> Self {
        SourceLocation::new(start, Some(end))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}-{}", self.start, end),
            None => write!(f, "{}-", self.start),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn at(offset: usize) -> Position {
        Position::new(1, offset, offset)
    }

    fn loc(start: usize, end: usize) -> SourceLocation {
        SourceLocation::new(at(start), Some(at(end)))
    }

    fn hash_of(location: &SourceLocation) -> u64 {
        let mut hasher = DefaultHasher::new();
        location.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn extract_text() {
        struct TestCase {
            source: &'static str,
            start:  usize,
            end:    usize,
            expect: &'static str,
        }

        let tests = vec![
            TestCase {
                source: "let x = 1;",
                start:  4,
                end:    5,
                expect: "x",
            },
            TestCase {
                source: "let x = 1;",
                start:  0,
                end:    10,
                expect: "let x = 1;",
            },
            // end overshoots the source and is clamped
            TestCase {
                source: "abc",
                start:  1,
                end:    10,
                expect: "bc",
            },
            // inverted
            TestCase {
                source: "let x = 1;",
                start:  5,
                end:    2,
                expect: "",
            },
            // zero-width
            TestCase {
                source: "let x = 1;",
                start:  3,
                end:    3,
                expect: "",
            },
            // start past the end of the source
            TestCase {
                source: "abc",
                start:  7,
                end:    9,
                expect: "",
            },
            TestCase {
                source: "",
                start:  0,
                end:    1,
                expect: "",
            },
        ];

        for test in tests {
            let actual = loc(test.start, test.end).extract_text(test.source);
            assert_eq!(
                actual,
                Ok(test.expect),
                "{}..{} of {:?}",
                test.start,
                test.end,
                test.source
            );
        }
    }

    #[test]
    fn extract_text_unterminated() {
        let location = SourceLocation::starting_at(at(2));

        assert!(!location.is_terminated());
        assert!(matches!(
            location.extract_text("abcdef"),
            Err(Error::Unterminated { start }) if start == at(2)
        ));
    }

    #[test]
    fn extract_text_char_boundary() {
        // 'é' is two bytes long
        let source = "café au lait";

        assert_eq!(loc(0, 5).extract_text(source), Ok("café"));
        assert_eq!(
            loc(0, 4).extract_text(source),
            Err(Error::NotCharBoundary { offset: 4 })
        );
        assert_eq!(
            loc(4, 6).extract_text(source),
            Err(Error::NotCharBoundary { offset: 4 })
        );
    }

    #[test]
    fn set_end_does_not_affect_earlier_copies() {
        let source = "let x = 1;";
        let mut location = SourceLocation::starting_at(at(0));
        location.set_end(Some(at(3)));

        let copy = SourceLocation::from_location(&location);
        let implicit_copy = location;

        location.set_end(Some(at(5)));
        assert_eq!(location.end(), Some(at(5)));
        assert_eq!(location.extract_text(source), Ok("let x"));

        assert_eq!(copy.end(), Some(at(3)));
        assert_eq!(copy.extract_text(source), Ok("let"));
        assert_eq!(implicit_copy, copy);
    }

    #[test]
    fn set_start() {
        let mut location = loc(4, 9);
        location.set_start(at(8));

        assert_eq!(location.start(), at(8));
        assert_eq!(location.extract_text("let x = 1;"), Ok("1"));

        location.set_end(None);
        assert!(!location.is_terminated());
    }

    #[test]
    fn equality_and_hash() {
        assert_eq!(loc(1, 4), loc(1, 4));
        assert_eq!(hash_of(&loc(1, 4)), hash_of(&loc(1, 4)));
        assert_ne!(loc(1, 4), loc(1, 5));
        assert_ne!(loc(1, 4), loc(2, 4));

        let open = SourceLocation::starting_at(at(1));
        assert_eq!(open, SourceLocation::new(at(1), None));
        assert_eq!(hash_of(&open), hash_of(&SourceLocation::new(at(1), None)));
        assert_ne!(open, loc(1, 4));

        // shared end position between neighbours
        let shared = at(6);
        assert_eq!(
            SourceLocation::new(at(0), Some(shared)).end(),
            Some(SourceLocation::new(shared, None).start())
        );
    }

    #[test]
    fn wrap() {
        let first = loc(0, 3);
        let last = loc(8, 10);

        let wrapped = SourceLocation::wrap(&first, &last);
        assert_eq!(wrapped, loc(0, 10));
        assert_eq!(wrapped.extract_text("let x = 1;"), Ok("let x = 1;"));
    }

    #[test]
    fn display() {
        let location: SourceLocation = (Position::new(1, 4, 4), Position::new(2, 0, 11)).into();
        assert_eq!(location.to_string(), "1:4-2:0");

        let open = SourceLocation::starting_at(Position::new(3, 2, 20));
        assert_eq!(open.to_string(), "3:2-");
    }
}

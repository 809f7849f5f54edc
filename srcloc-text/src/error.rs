use crate::Position;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("location starting at {start} has no end")]
    Unterminated { start: Position },
    #[error("offset {offset} is not on a char boundary")]
    NotCharBoundary { offset: usize },
}

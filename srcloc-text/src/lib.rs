//! Position and range primitives for annotating syntax-tree nodes with the text they came from.

mod error;
mod location;
mod pair;
mod position;

pub use error::Error;
pub use location::SourceLocation;
pub use pair::Pair;
pub use position::Position;

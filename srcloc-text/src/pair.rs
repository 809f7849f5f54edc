use std::fmt;

/// An immutable pair of values.
///
/// Useful wherever a parser needs to hand back two related values (a token and a flag, a key and
/// its value) without declaring a dedicated type. Either slot may hold an `Option` to represent
/// an absent value; two absent values compare equal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pair<X, Y> {
    first:  X,
    second: Y,
}

impl<X, Y> Pair<X, Y> {
    pub const fn new(first: X, second: Y) -> Self {
        Self { first, second }
    }

    pub const fn make(first: X, second: Y) -> Self {
        Self::new(first, second)
    }

    #[inline]
    pub fn first(&self) -> &X {
        &self.first
    }

    #[inline]
    pub fn second(&self) -> &Y {
        &self.second
    }

    pub fn into_inner(self) -> (X, Y) {
        (self.first, self.second)
    }
}

impl<X, Y> From<(X, Y)> for Pair<X, Y> {
    fn from((first, second): (X, Y)) -> Self {
        Pair::new(first, second)
    }
}

impl<X, Y> From<Pair<X, Y>> for (X, Y) {
    fn from(pair: Pair<X, Y>) -> Self {
        pair.into_inner()
    }
}

impl<X: fmt::Display, Y: fmt::Display> fmt::Display for Pair<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

//! A neutral sum type for the growing union of failure details.
//!
//! Every refinement layered on a validator widens the set of failure details
//! that validator can produce. The wider set is spelled `Either<Upstream, Own>`:
//! failures forwarded from the wrapped validator are `Left`, failures added
//! by the new refinement are `Right`.
//!
//! # Examples
//!
//! ```rust
//! use sluice::Either;
//!
//! let upstream: Either<&str, i32> = Either::left("base");
//! let own: Either<&str, i32> = Either::right(3);
//!
//! let describe = |e: Either<&str, i32>| e.fold(|l| format!("upstream {}", l), |r| format!("own {}", r));
//! assert_eq!(describe(upstream), "upstream base");
//! assert_eq!(describe(own), "own 3");
//! ```

/// A value that is either `Left(L)` or `Right(R)`.
///
/// `Either` carries no success/failure meaning. In this crate `Left` holds a
/// detail produced further up a refinement chain and `Right` a detail produced
/// by the outermost refinement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Either<L, R> {
    /// The left variant
    Left(L),
    /// The right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Create a Left value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Returns `true` if this is a Left value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a Right value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Convert to `Option<L>`, discarding a Right value.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Convert to `Option<R>`, discarding a Left value.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Borrow the contents.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::Either;
    ///
    /// let e: Either<i32, String> = Either::right("size".to_string());
    /// assert_eq!(e.as_ref().into_right().map(String::as_str), Some("size"));
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the Left value.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the Right value.
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Collapse both variants into one value.
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        let left: Either<i32, &str> = Either::left(42);
        let right: Either<i32, &str> = Either::right("hello");

        assert!(left.is_left());
        assert!(!left.is_right());
        assert!(right.is_right());
        assert!(!right.is_left());
    }

    #[test]
    fn test_into_left_into_right() {
        let left: Either<i32, &str> = Either::left(42);
        assert_eq!(left.into_left(), Some(42));
        assert_eq!(left.into_right(), None);

        let right: Either<i32, &str> = Either::right("hello");
        assert_eq!(right.into_right(), Some("hello"));
        assert_eq!(right.into_left(), None);
    }

    #[test]
    fn test_map_sides() {
        let e: Either<i32, i32> = Either::left(21);
        assert_eq!(e.map_left(|x| x * 2), Either::left(42));
        assert_eq!(e.map_right(|x| x * 2), Either::left(21));

        let e: Either<i32, i32> = Either::right(21);
        assert_eq!(e.map_right(|x| x * 2), Either::right(42));
    }

    #[test]
    fn test_fold() {
        let e: Either<i32, &str> = Either::right("abc");
        assert_eq!(e.fold(|n| n as usize, str::len), 3);
    }
}

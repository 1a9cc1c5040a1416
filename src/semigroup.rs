//! Semigroup trait for associative accumulation
//!
//! Failures from independently validated values are accumulated rather than
//! short-circuited. `Semigroup` is the associative "append" that
//! [`Validation::and`](crate::Validation::and) uses to do that.
//!
//! # Examples
//!
//! ```
//! use sluice::Semigroup;
//!
//! let first = vec!["name is empty"];
//! let second = vec!["age is negative"];
//! assert_eq!(first.combine(second), vec!["name is empty", "age is negative"]);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

//! Error returned when a value is asserted valid but is not
//!
//! Rejections are ordinary data everywhere else in the crate. Only
//! [`Validator::assert`](crate::Validator::assert) turns them into an error,
//! for callers that want `?` at a boundary.

use crate::failure::{Detail, Failure};
use crate::nonempty::NonEmptyVec;

/// Every failure of a rejected value. Displays as the first failure's message.
///
/// # Example
///
/// ```
/// use sluice::prelude::*;
///
/// fn parse_port(n: u32) -> Result<u32, Box<dyn std::error::Error>> {
///     max(integer::<u32>(), 65_535, ThresholdOptions::default()).assert(&n)?;
///     Ok(n)
/// }
///
/// assert!(parse_port(80).is_ok());
/// assert!(parse_port(70_000).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", .failures.head().message)]
pub struct ValidateError<D: Detail> {
    failures: NonEmptyVec<Failure<D>>,
}

impl<D: Detail> ValidateError<D> {
    /// Wrap the failures of a rejected value.
    pub fn new(failures: NonEmptyVec<Failure<D>>) -> Self {
        ValidateError { failures }
    }

    /// Every failure, in the order it was produced.
    pub fn failures(&self) -> &NonEmptyVec<Failure<D>> {
        &self.failures
    }

    /// The first failure.
    pub fn first(&self) -> &Failure<D> {
        self.failures.head()
    }

    /// Take the failures out of the error.
    pub fn into_failures(self) -> Vec<Failure<D>> {
        self.failures.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::GenericFailure;

    #[test]
    fn test_display_is_first_message() {
        let err = ValidateError::new(NonEmptyVec::new(
            Failure::new("first", "string", GenericFailure),
            vec![Failure::new("second", "string", GenericFailure)],
        ));

        assert_eq!(err.to_string(), "first");
        assert_eq!(err.first().message, "first");
        assert_eq!(err.failures().len(), 2);
        assert_eq!(err.into_failures()[1].message, "second");
    }
}

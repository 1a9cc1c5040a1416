//! Emptiness refiners
//!
//! Both apply to strings, sequences, maps and sets, measured by their length
//! or size.

use crate::context::Context;
use crate::failure::{Measure, SizeFailure};
use crate::outcome::{Issue, Outcome};
use crate::refine::{Refine, Refiner};
use crate::refiners::measure::Collection;
use crate::validator::Validator;

/// Refiner accepting only values with a size of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Empty {
    type_name: String,
}

impl<T: Collection + ?Sized> Refiner<T> for Empty {
    type Detail = SizeFailure;

    fn refine(&self, value: &T, _ctx: &Context) -> Outcome<SizeFailure> {
        let size = value.measure();
        if size == 0 {
            return Outcome::Pass;
        }

        let detail = SizeFailure::between(Measure::Count(size), Measure::Count(0), Measure::Count(0));
        Outcome::issue(Issue::new(detail).message(format!(
            "Expected an empty {} but received one with a size of `{}`",
            self.type_name, size
        )))
    }
}

/// Refiner accepting only values with at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmpty {
    type_name: String,
}

impl<T: Collection + ?Sized> Refiner<T> for NonEmpty {
    type Detail = SizeFailure;

    fn refine(&self, value: &T, _ctx: &Context) -> Outcome<SizeFailure> {
        if value.measure() > 0 {
            return Outcome::Pass;
        }

        let detail = SizeFailure::below(Measure::Count(0), Measure::Count(1), false);
        Outcome::issue(Issue::new(detail).message(format!(
            "Expected a nonempty {} but received an empty one",
            self.type_name
        )))
    }
}

/// Require the value to be empty.
///
/// # Example
///
/// ```
/// use sluice::prelude::*;
///
/// let v = empty(array::<u8>());
/// assert!(v.is_valid(&[]));
///
/// let failure = v.first_failure(&[1]).unwrap();
/// let size = failure.as_size().unwrap();
/// assert_eq!(size.min, Some(Measure::Count(0)));
/// assert_eq!(size.max, Some(Measure::Count(0)));
/// assert_eq!(size.actually, Measure::Count(1));
/// ```
pub fn empty<V>(validator: V) -> Refine<V, Empty>
where
    V: Validator,
    V::Value: Collection,
{
    let type_name = validator.type_name().to_string();
    Refine::new(validator, "empty", Empty { type_name })
}

/// Require the value to have at least one element.
///
/// # Example
///
/// ```
/// use sluice::prelude::*;
///
/// let v = nonempty(string());
/// assert!(v.is_valid("x"));
/// assert_eq!(
///     v.first_failure("").unwrap().message,
///     "Expected a nonempty string but received an empty one"
/// );
/// ```
pub fn nonempty<V>(validator: V) -> Refine<V, NonEmpty>
where
    V: Validator,
    V::Value: Collection,
{
    let type_name = validator.type_name().to_string();
    Refine::new(validator, "nonempty", NonEmpty { type_name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::FailureClass;
    use crate::validator::{array, map, set, string};
    use std::collections::{BTreeSet, HashMap};

    #[test]
    fn test_empty_accepts_every_empty_collection() {
        assert!(empty(string()).is_valid(""));
        assert!(empty(array::<i32>()).is_valid(&[]));
        assert!(empty(map::<HashMap<String, i32>>()).is_valid(&HashMap::new()));
        assert!(empty(set::<BTreeSet<i32>>()).is_valid(&BTreeSet::new()));
    }

    #[test]
    fn test_empty_rejects_string() {
        let failures: Vec<_> = empty(string()).check("x", &Context::root()).collect();

        assert_eq!(failures.len(), 1);
        let failure = &failures[0];
        assert_eq!(failure.class(), FailureClass::Size);
        assert_eq!(failure.refinement(), Some("empty"));
        assert_eq!(
            failure.message,
            "Expected an empty string but received one with a size of `1`"
        );

        let size = failure.as_size().unwrap();
        assert_eq!(size.actually, Measure::Count(1));
        assert_eq!(size.min, Some(Measure::Count(0)));
        assert_eq!(size.max, Some(Measure::Count(0)));
        assert!(!size.min_exclusive);
        assert!(!size.max_exclusive);
    }

    #[test]
    fn test_empty_rejects_set_with_size() {
        let v = empty(set::<BTreeSet<i32>>());
        let values: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
        let failure = v.first_failure(&values).unwrap();

        assert_eq!(failure.as_size().unwrap().actually, Measure::Count(3));
        assert_eq!(
            failure.message,
            "Expected an empty set but received one with a size of `3`"
        );
    }

    #[test]
    fn test_nonempty() {
        let v = nonempty(array::<u8>());
        assert!(v.is_valid(&[0]));

        let failure = v.first_failure(&[]).unwrap();
        let size = failure.as_size().unwrap();
        assert_eq!(size.min, Some(Measure::Count(1)));
        assert_eq!(size.max, None);
        assert_eq!(size.actually, Measure::Count(0));
        assert_eq!(failure.refinement(), Some("nonempty"));
    }
}

//! Inclusive size refiner
//!
//! `size` measures numbers and dates by value, maps and sets by their size,
//! and strings and sequences by their length. Bounds are always inclusive.

use std::fmt;

use crate::context::Context;
use crate::failure::SizeFailure;
use crate::outcome::{Issue, Outcome};
use crate::refine::{Refine, Refiner};
use crate::refiners::measure::{MeasureKind, Measurable};
use crate::validator::Validator;

/// Refiner accepting values whose measure lies in `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Size<U> {
    min: U,
    max: U,
    type_name: String,
}

impl<U: fmt::Display + PartialEq> Size<U> {
    fn describe_bounds(&self) -> String {
        if self.min == self.max {
            format!("of `{}`", self.min)
        } else {
            format!("between `{}` and `{}`", self.min, self.max)
        }
    }
}

impl<T> Refiner<T> for Size<T::Unit>
where
    T: Measurable + ?Sized,
{
    type Detail = SizeFailure;

    fn refine(&self, value: &T, _ctx: &Context) -> Outcome<SizeFailure> {
        let measured = value.measure();
        if self.min <= measured && measured <= self.max {
            return Outcome::Pass;
        }

        let bounds = self.describe_bounds();
        let message = match T::KIND {
            MeasureKind::Value => format!(
                "Expected a {} {} but received `{}`",
                self.type_name, bounds, measured
            ),
            MeasureKind::Size => format!(
                "Expected a {} with a size {} but received one with a size of `{}`",
                self.type_name, bounds, measured
            ),
            MeasureKind::Length => format!(
                "Expected a {} with a length {} but received one with a length of `{}`",
                self.type_name, bounds, measured
            ),
        };
        let detail = SizeFailure::between(
            T::to_detail(&measured),
            T::to_detail(&self.min),
            T::to_detail(&self.max),
        );
        Outcome::issue(Issue::new(detail).message(message))
    }
}

/// Require the measure of the value to lie within `[min, max]`.
///
/// # Example
///
/// ```
/// use sluice::prelude::*;
///
/// let v = size(array::<u8>(), 2, 4);
/// assert!(v.is_valid(&[1, 2, 3]));
///
/// let failure = v.first_failure(&[1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(
///     failure.message,
///     "Expected a array with a length between `2` and `4` but received one with a length of `5`"
/// );
/// ```
pub fn size<V>(
    validator: V,
    min: <V::Value as Measurable>::Unit,
    max: <V::Value as Measurable>::Unit,
) -> Refine<V, Size<<V::Value as Measurable>::Unit>>
where
    V: Validator,
    V::Value: Measurable,
{
    let type_name = validator.type_name().to_string();
    Refine::new(validator, "size", Size { min, max, type_name })
}

/// Require the measure of the value to be exactly `size`.
///
/// # Example
///
/// ```
/// use sluice::prelude::*;
///
/// let pin = exact_size(string(), 4);
/// assert!(pin.is_valid("1234"));
/// assert_eq!(
///     pin.first_failure("123").unwrap().message,
///     "Expected a string with a length of `4` but received one with a length of `3`"
/// );
/// ```
pub fn exact_size<V>(
    validator: V,
    size: <V::Value as Measurable>::Unit,
) -> Refine<V, Size<<V::Value as Measurable>::Unit>>
where
    V: Validator,
    V::Value: Measurable,
{
    self::size(validator, size.clone(), size)
}

//! Threshold refiners for numbers and dates

use crate::context::Context;
use crate::failure::SizeFailure;
use crate::outcome::{Issue, Outcome};
use crate::refine::{Refine, Refiner};
use crate::refiners::measure::Magnitude;
use crate::validator::Validator;

/// Options shared by [`min`] and [`max`].
///
/// # Example
///
/// ```
/// use sluice::ThresholdOptions;
///
/// assert!(!ThresholdOptions::default().exclusive);
/// assert!(ThresholdOptions::default().exclusive().exclusive);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThresholdOptions {
    /// Exclude the threshold itself from the accepted range
    pub exclusive: bool,
}

impl ThresholdOptions {
    /// Exclude the threshold itself.
    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }
}

// The wording is shared by both directions.
fn threshold_message<T: Magnitude>(type_name: &str, threshold: &T, exclusive: bool, value: &T) -> String {
    format!(
        "Expected a {} greater than {}{} but received `{}`",
        type_name,
        if exclusive { "" } else { "or equal to " },
        threshold,
        value
    )
}

/// Refiner accepting values at or above a threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Min<T> {
    threshold: T,
    exclusive: bool,
    type_name: String,
}

impl<T: Magnitude> Refiner<T> for Min<T> {
    type Detail = SizeFailure;

    fn refine(&self, value: &T, _ctx: &Context) -> Outcome<SizeFailure> {
        let accepted = if self.exclusive {
            *value > self.threshold
        } else {
            *value >= self.threshold
        };
        if accepted {
            return Outcome::Pass;
        }

        let detail = SizeFailure::below(value.to_measure(), self.threshold.to_measure(), self.exclusive);
        let message = threshold_message(&self.type_name, &self.threshold, self.exclusive, value);
        Outcome::issue(Issue::new(detail).message(message))
    }
}

/// Refiner accepting values at or below a threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Max<T> {
    threshold: T,
    exclusive: bool,
    type_name: String,
}

impl<T: Magnitude> Refiner<T> for Max<T> {
    type Detail = SizeFailure;

    fn refine(&self, value: &T, _ctx: &Context) -> Outcome<SizeFailure> {
        let accepted = if self.exclusive {
            *value < self.threshold
        } else {
            *value <= self.threshold
        };
        if accepted {
            return Outcome::Pass;
        }

        let detail = SizeFailure::above(value.to_measure(), self.threshold.to_measure(), self.exclusive);
        let message = threshold_message(&self.type_name, &self.threshold, self.exclusive, value);
        Outcome::issue(Issue::new(detail).message(message))
    }
}

/// Require the value to be at least `threshold` (or above it, if exclusive).
///
/// # Example
///
/// ```
/// use sluice::prelude::*;
///
/// let v = min(number::<i64>(), 3, ThresholdOptions::default());
/// assert!(v.is_valid(&3));
/// assert_eq!(
///     v.first_failure(&2).unwrap().message,
///     "Expected a number greater than or equal to 3 but received `2`"
/// );
/// ```
pub fn min<V>(validator: V, threshold: V::Value, options: ThresholdOptions) -> Refine<V, Min<V::Value>>
where
    V: Validator,
    V::Value: Magnitude,
{
    let type_name = validator.type_name().to_string();
    Refine::new(
        validator,
        "min",
        Min {
            threshold,
            exclusive: options.exclusive,
            type_name,
        },
    )
}

/// Require the value to be at most `threshold` (or below it, if exclusive).
///
/// # Example
///
/// ```
/// use sluice::prelude::*;
///
/// let v = max(number::<i64>(), 10, ThresholdOptions::default().exclusive());
/// assert!(v.is_valid(&9));
/// assert!(v.first_failure(&10).unwrap().as_size().unwrap().max_exclusive);
/// ```
pub fn max<V>(validator: V, threshold: V::Value, options: ThresholdOptions) -> Refine<V, Max<V::Value>>
where
    V: Validator,
    V::Value: Magnitude,
{
    let type_name = validator.type_name().to_string();
    Refine::new(
        validator,
        "max",
        Max {
            threshold,
            exclusive: options.exclusive,
            type_name,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::{FailureClass, Measure};
    use crate::validator::{date, number};
    use chrono::NaiveDate;

    #[test]
    fn test_min_inclusive() {
        let v = min(number::<i32>(), 3, ThresholdOptions::default());
        assert!(v.is_valid(&3));
        assert!(v.is_valid(&4));

        let failure = v.first_failure(&2).unwrap();
        assert_eq!(failure.class(), FailureClass::Size);
        assert_eq!(failure.refinement(), Some("min"));
        let size = failure.as_size().unwrap();
        assert_eq!(size.min, Some(Measure::Int(3)));
        assert_eq!(size.max, None);
        assert_eq!(size.actually, Measure::Int(2));
        assert!(!size.min_exclusive);
    }

    #[test]
    fn test_min_exclusive() {
        let v = min(number::<i32>(), 3, ThresholdOptions::default().exclusive());
        assert!(v.is_valid(&4));

        let failure = v.first_failure(&3).unwrap();
        assert!(failure.as_size().unwrap().min_exclusive);
        assert_eq!(
            failure.message,
            "Expected a number greater than 3 but received `3`"
        );
    }

    #[test]
    fn test_max_exclusive() {
        let v = max(number::<i32>(), 10, ThresholdOptions { exclusive: true });
        assert!(v.is_valid(&9));

        let failure = v.first_failure(&10).unwrap();
        let size = failure.as_size().unwrap();
        assert_eq!(size.max, Some(Measure::Int(10)));
        assert_eq!(size.min, None);
        assert!(size.max_exclusive);
        assert!(!size.min_exclusive);
        assert_eq!(failure.refinement(), Some("max"));
    }

    #[test]
    fn test_max_message_keeps_greater_than_wording() {
        let v = max(number::<f64>(), 1.5, ThresholdOptions::default());
        assert_eq!(
            v.first_failure(&2.5).unwrap().message,
            "Expected a number greater than or equal to 1.5 but received `2.5`"
        );
    }

    #[test]
    fn test_dates() {
        let cutoff = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let v = min(date::<NaiveDate>(), cutoff, ThresholdOptions::default());

        assert!(v.is_valid(&NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));

        let failure = v
            .first_failure(&NaiveDate::from_ymd_opt(2023, 12, 31).unwrap())
            .unwrap();
        assert!(matches!(failure.as_size().unwrap().min, Some(Measure::Date(_))));
        assert_eq!(
            failure.message,
            "Expected a date greater than or equal to 2024-01-01 but received `2023-12-31`"
        );
    }

    #[test]
    fn test_max_dates() {
        let cutoff = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let v = max(date::<NaiveDate>(), cutoff, ThresholdOptions::default());

        assert!(v.is_valid(&cutoff));

        let failure = v
            .first_failure(&NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .unwrap();
        let size = failure.as_size().unwrap();
        assert!(matches!(size.max, Some(Measure::Date(_))));
        assert!(matches!(size.actually, Measure::Date(_)));
        assert_eq!(size.min, None);
        assert_eq!(
            failure.message,
            "Expected a date greater than or equal to 2024-12-31 but received `2025-01-01`"
        );
    }

    #[test]
    fn test_nan_never_reaches_threshold() {
        let v = min(number::<f64>(), 0.0, ThresholdOptions::default());
        let failure = v.first_failure(&f64::NAN).unwrap();
        assert_eq!(failure.class(), FailureClass::Type);
        assert_eq!(failure.refinement(), None);
    }
}

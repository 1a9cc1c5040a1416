//! How values are measured by bound and size refiners
//!
//! - [`Magnitude`]: ordered, displayable quantities (numbers, dates) that
//!   `min`/`max` compare directly against a threshold of the same type
//! - [`Measurable`]: anything `size` can measure, along with the strategy used
//!   (the value itself, the size of a collection, or the length of a sequence)
//! - [`Collection`]: measurables whose measure is an element count, accepted by
//!   `empty`/`nonempty`

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::failure::Measure;

/// An ordered quantity that can be compared against a threshold.
pub trait Magnitude: PartialOrd + fmt::Display + fmt::Debug + Clone + Send + Sync + 'static {
    /// The quantity as a detail measure
    fn to_measure(&self) -> Measure;
}

/// A numeric magnitude, checked by the `number` and `integer` base validators.
pub trait Numeric: Magnitude {
    /// `false` only for values that are not numbers at all (NaN)
    fn is_number(&self) -> bool {
        true
    }

    /// Whether the value has no fractional part
    fn is_integer(&self) -> bool {
        true
    }
}

/// The strategy used to measure a value, which also selects message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureKind {
    /// The value is its own measure (numbers, dates)
    Value,
    /// Element count of a map or set
    Size,
    /// Length of a string or sequence
    Length,
}

/// A value `size` can measure.
pub trait Measurable {
    /// The type of the measure and of the bounds compared against it
    type Unit: PartialOrd + fmt::Display + Clone + Send + Sync + 'static;

    /// Measurement strategy
    const KIND: MeasureKind;

    /// Measure the value
    fn measure(&self) -> Self::Unit;

    /// Convert a measure or bound into a detail measure
    fn to_detail(unit: &Self::Unit) -> Measure;
}

/// A measurable whose measure is an element count.
pub trait Collection: Measurable<Unit = usize> {}

macro_rules! impl_integer_magnitude {
    ($($ty:ty),+) => {
        $(
            impl Magnitude for $ty {
                fn to_measure(&self) -> Measure {
                    Measure::Int(*self as i128)
                }
            }

            impl Numeric for $ty {}
        )+
    };
}

impl_integer_magnitude!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float_magnitude {
    ($($ty:ty),+) => {
        $(
            impl Magnitude for $ty {
                fn to_measure(&self) -> Measure {
                    Measure::Float(*self as f64)
                }
            }

            impl Numeric for $ty {
                fn is_number(&self) -> bool {
                    !self.is_nan()
                }

                fn is_integer(&self) -> bool {
                    self.is_finite() && self.fract() == 0.0
                }
            }
        )+
    };
}

impl_float_magnitude!(f32, f64);

impl Magnitude for DateTime<Utc> {
    fn to_measure(&self) -> Measure {
        Measure::Date(*self)
    }
}

impl Magnitude for DateTime<FixedOffset> {
    fn to_measure(&self) -> Measure {
        Measure::Date(self.with_timezone(&Utc))
    }
}

impl Magnitude for NaiveDateTime {
    fn to_measure(&self) -> Measure {
        Measure::Date(Utc.from_utc_datetime(self))
    }
}

impl Magnitude for NaiveDate {
    fn to_measure(&self) -> Measure {
        Measure::Date(Utc.from_utc_datetime(&self.and_time(NaiveTime::default())))
    }
}

// Magnitudes are their own measure
macro_rules! impl_measurable_magnitude {
    ($($ty:ty),+) => {
        $(
            impl Measurable for $ty {
                type Unit = $ty;

                const KIND: MeasureKind = MeasureKind::Value;

                fn measure(&self) -> Self::Unit {
                    self.clone()
                }

                fn to_detail(unit: &Self::Unit) -> Measure {
                    unit.to_measure()
                }
            }
        )+
    };
}

impl_measurable_magnitude!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, f32, f64,
    DateTime<Utc>, DateTime<FixedOffset>, NaiveDateTime, NaiveDate
);

macro_rules! impl_counted {
    ($kind:expr, $len:ident, [$($ty:ty $(: [$($gen:tt)*])?),+]) => {
        $(
            impl $(<$($gen)*>)? Measurable for $ty {
                type Unit = usize;

                const KIND: MeasureKind = $kind;

                fn measure(&self) -> usize {
                    self.$len()
                }

                fn to_detail(unit: &usize) -> Measure {
                    Measure::Count(*unit)
                }
            }

            impl $(<$($gen)*>)? Collection for $ty {}
        )+
    };
}

// Strings are measured in characters, not bytes
impl Measurable for str {
    type Unit = usize;

    const KIND: MeasureKind = MeasureKind::Length;

    fn measure(&self) -> usize {
        self.chars().count()
    }

    fn to_detail(unit: &usize) -> Measure {
        Measure::Count(*unit)
    }
}

impl Collection for str {}

impl Measurable for String {
    type Unit = usize;

    const KIND: MeasureKind = MeasureKind::Length;

    fn measure(&self) -> usize {
        self.as_str().measure()
    }

    fn to_detail(unit: &usize) -> Measure {
        Measure::Count(*unit)
    }
}

impl Collection for String {}

impl_counted!(MeasureKind::Length, len, [
    [T]: [T],
    Vec<T>: [T],
    VecDeque<T>: [T]
]);

impl_counted!(MeasureKind::Size, len, [
    HashMap<K, V, S>: [K, V, S],
    BTreeMap<K, V>: [K, V],
    HashSet<T, S>: [T, S],
    BTreeSet<T>: [T]
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_measure_widens() {
        assert_eq!(5u8.to_measure(), Measure::Int(5));
        assert_eq!((-5i64).to_measure(), Measure::Int(-5));
    }

    #[test]
    fn test_float_number_checks() {
        assert!(1.5f64.is_number());
        assert!(!f64::NAN.is_number());
        assert!(!1.5f32.is_integer());
        assert!(2.0f32.is_integer());
        assert!(!f64::INFINITY.is_integer());
    }

    #[test]
    fn test_strings_measure_characters() {
        assert_eq!("abc".measure(), 3);
        assert_eq!("héllo".measure(), 5);
        assert_eq!(String::from("ab").measure(), 2);
        assert_eq!(<str as Measurable>::KIND, MeasureKind::Length);
    }

    #[test]
    fn test_collections_use_size() {
        let mut m = HashMap::new();
        m.insert("a", 1);
        assert_eq!(m.measure(), 1);
        assert_eq!(<HashMap<&str, i32> as Measurable>::KIND, MeasureKind::Size);
        assert_eq!(<BTreeSet<u8> as Measurable>::KIND, MeasureKind::Size);
    }

    #[test]
    fn test_numbers_measure_themselves() {
        assert_eq!(7i32.measure(), 7);
        assert_eq!(<i32 as Measurable>::KIND, MeasureKind::Value);
        assert_eq!(<i32 as Measurable>::to_detail(&7), Measure::Int(7));
    }

    #[test]
    fn test_naive_date_is_midnight_utc() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        match d.to_measure() {
            Measure::Date(dt) => assert_eq!(dt.to_rfc3339(), "2024-03-01T00:00:00+00:00"),
            other => panic!("unexpected measure {:?}", other),
        }
    }
}

//! Structured failure records
//!
//! A rejected value is never reported as a boolean or a bare string. Each
//! violated constraint becomes a [`Failure`]: a human-readable message plus a
//! typed *detail* describing the violation class.
//!
//! # Failure classes
//!
//! - [`GenericFailure`]: an unstructured pass/fail refinement said "no"
//! - [`SizeFailure`]: a quantitative bound on a magnitude, length or size was violated
//! - [`ValueFailure`]: a qualitative content rule (such as a pattern) was violated
//! - [`TypeFailure`]: the base validator rejected the value before any refinement ran
//!
//! # Example
//!
//! ```
//! use sluice::prelude::*;
//!
//! let validator = min(number::<i64>(), 3, ThresholdOptions::default());
//! let failure = validator.first_failure(&2).unwrap();
//!
//! assert_eq!(failure.class(), FailureClass::Size);
//! assert_eq!(failure.refinement(), Some("min"));
//!
//! let size = failure.as_size().unwrap();
//! assert_eq!(size.min, Some(Measure::Int(3)));
//! assert_eq!(size.max, None);
//! ```

use std::fmt;

use chrono::{DateTime, Utc};

use crate::context::PathSegment;
use crate::Either;

/// The class of a failure, used to branch on violation kind without
/// inspecting the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FailureClass {
    /// Unstructured rejection from a boolean or string refiner
    Generic,
    /// Quantitative bound violation
    Size,
    /// Qualitative content violation
    Value,
    /// Base type rejection
    Type,
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureClass::Generic => "generic",
            FailureClass::Size => "size",
            FailureClass::Value => "value",
            FailureClass::Type => "type",
        };
        f.write_str(name)
    }
}

/// A measured quantity carried by a [`SizeFailure`].
///
/// Integers are widened to `i128` and dates normalised to UTC so that a
/// single detail type can describe every measurable value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Measure {
    /// Length of a string or sequence, or size of a map or set
    Count(usize),
    /// Integer magnitude
    Int(i128),
    /// Floating point magnitude
    Float(f64),
    /// Point in time
    Date(DateTime<Utc>),
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Count(n) => write!(f, "{}", n),
            Measure::Int(n) => write!(f, "{}", n),
            Measure::Float(n) => write!(f, "{}", n),
            Measure::Date(d) => write!(f, "{}", d.to_rfc3339()),
        }
    }
}

/// Detail of a failure produced by a refiner that only said "no".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GenericFailure;

/// Detail of a violated quantitative bound.
///
/// `min` or `max` is `None` when the constraint is unbounded on that side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SizeFailure {
    /// The measured magnitude, length or size
    pub actually: Measure,
    /// Lower bound, if any
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min: Option<Measure>,
    /// Upper bound, if any
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max: Option<Measure>,
    /// Whether `min` itself is excluded
    pub min_exclusive: bool,
    /// Whether `max` itself is excluded
    pub max_exclusive: bool,
}

impl SizeFailure {
    /// A violation of the inclusive range `[min, max]`.
    pub fn between(actually: Measure, min: Measure, max: Measure) -> Self {
        Self {
            actually,
            min: Some(min),
            max: Some(max),
            min_exclusive: false,
            max_exclusive: false,
        }
    }

    /// A violation of a lower bound only.
    pub fn below(actually: Measure, min: Measure, exclusive: bool) -> Self {
        Self {
            actually,
            min: Some(min),
            max: None,
            min_exclusive: exclusive,
            max_exclusive: false,
        }
    }

    /// A violation of an upper bound only.
    pub fn above(actually: Measure, max: Measure, exclusive: bool) -> Self {
        Self {
            actually,
            min: None,
            max: Some(max),
            min_exclusive: false,
            max_exclusive: exclusive,
        }
    }
}

/// Detail of a violated content rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValueFailure {
    /// Description of the expected content, e.g. a pattern source
    pub except: String,
    /// The rejected value, rendered as text
    pub actually: String,
}

/// Detail of a base type rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeFailure {
    /// The type the base validator expected
    pub expected: String,
}

/// Uninhabited detail for refiners that can only produce generic failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDetail {}

/// A failure detail type.
///
/// Composite details (see [`Either`]) delegate to whichever side they hold,
/// so callers can branch on the class of a failure no matter how deep the
/// refinement chain that produced it.
pub trait Detail: fmt::Debug + Clone + 'static {
    /// The class this detail belongs to
    fn class(&self) -> FailureClass;

    /// The size detail, if this is a size failure
    fn as_size(&self) -> Option<&SizeFailure> {
        None
    }

    /// The value detail, if this is a value failure
    fn as_value(&self) -> Option<&ValueFailure> {
        None
    }

    /// The type detail, if this is a base type failure
    fn as_type(&self) -> Option<&TypeFailure> {
        None
    }
}

impl Detail for GenericFailure {
    fn class(&self) -> FailureClass {
        FailureClass::Generic
    }
}

impl Detail for SizeFailure {
    fn class(&self) -> FailureClass {
        FailureClass::Size
    }

    fn as_size(&self) -> Option<&SizeFailure> {
        Some(self)
    }
}

impl Detail for ValueFailure {
    fn class(&self) -> FailureClass {
        FailureClass::Value
    }

    fn as_value(&self) -> Option<&ValueFailure> {
        Some(self)
    }
}

impl Detail for TypeFailure {
    fn class(&self) -> FailureClass {
        FailureClass::Type
    }

    fn as_type(&self) -> Option<&TypeFailure> {
        Some(self)
    }
}

impl Detail for NoDetail {
    fn class(&self) -> FailureClass {
        match *self {}
    }
}

impl<L: Detail, R: Detail> Detail for Either<L, R> {
    fn class(&self) -> FailureClass {
        match self {
            Either::Left(l) => l.class(),
            Either::Right(r) => r.class(),
        }
    }

    fn as_size(&self) -> Option<&SizeFailure> {
        match self {
            Either::Left(l) => l.as_size(),
            Either::Right(r) => r.as_size(),
        }
    }

    fn as_value(&self) -> Option<&ValueFailure> {
        match self {
            Either::Left(l) => l.as_value(),
            Either::Right(r) => r.as_value(),
        }
    }

    fn as_type(&self) -> Option<&TypeFailure> {
        match self {
            Either::Left(l) => l.as_type(),
            Either::Right(r) => r.as_type(),
        }
    }
}

/// One way a value violated a constraint.
///
/// The `refinement` tag names the refinement step that produced the failure.
/// It is attached by the combinator and is `None` for base type failures.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<D> {
    /// Standalone human-readable description
    pub message: String,
    /// Type name of the validator that was checked
    pub type_name: String,
    /// Name of the refinement that produced this failure
    pub refinement: Option<String>,
    /// Location of the offending value inside the root input
    pub path: Vec<PathSegment>,
    /// Class-specific diagnostic fields
    pub detail: D,
}

impl<D> Failure<D> {
    /// Create a failure with an empty path and no provenance tag.
    pub fn new(message: impl Into<String>, type_name: impl Into<String>, detail: D) -> Self {
        Failure {
            message: message.into(),
            type_name: type_name.into(),
            refinement: None,
            path: Vec::new(),
            detail,
        }
    }

    /// Attach the provenance tag.
    pub fn with_refinement(mut self, name: impl Into<String>) -> Self {
        self.refinement = Some(name.into());
        self
    }

    /// Replace the path.
    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = path;
        self
    }

    /// The provenance tag, if any.
    pub fn refinement(&self) -> Option<&str> {
        self.refinement.as_deref()
    }

    /// Transform the detail, keeping message, type, provenance and path.
    ///
    /// This is how a detail is lifted into a wider union as failures pass
    /// through an enclosing refinement.
    pub fn map_detail<D2, F>(self, f: F) -> Failure<D2>
    where
        F: FnOnce(D) -> D2,
    {
        Failure {
            message: self.message,
            type_name: self.type_name,
            refinement: self.refinement,
            path: self.path,
            detail: f(self.detail),
        }
    }
}

impl<D: Detail> Failure<D> {
    /// The class of this failure.
    pub fn class(&self) -> FailureClass {
        self.detail.class()
    }

    /// Size diagnostics, if this is a size failure.
    pub fn as_size(&self) -> Option<&SizeFailure> {
        self.detail.as_size()
    }

    /// Value diagnostics, if this is a value failure.
    pub fn as_value(&self) -> Option<&ValueFailure> {
        self.detail.as_value()
    }

    /// Type diagnostics, if this is a base type failure.
    pub fn as_type(&self) -> Option<&TypeFailure> {
        self.detail.as_type()
    }
}

impl<D> fmt::Display for Failure<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

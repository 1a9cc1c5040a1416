//! # Sluice
//!
//! Composable runtime value refinement.
//!
//! A base [`Validator`] says what *shape* a value has. Refinements layered on
//! top with [`refine`] and the built-in refiners say what else must hold:
//! bounds, sizes, patterns, emptiness. Checking a value yields a lazy
//! sequence of structured [`Failure`]s instead of a boolean, each tagged with
//! the refinement that produced it.
//!
//! ## Guarantees
//!
//! - Upstream failures are always yielded before the failures of a
//!   refinement layered on top of them.
//! - A refiner only ever sees values every layer below it accepted.
//! - Failure sequences are demand-driven: stopping early skips later work.
//! - Every refinement widens the validator's static failure detail type,
//!   so the possible failure classes are part of the validator's type.
//!
//! ## Quick Example
//!
//! ```rust
//! use regex::Regex;
//! use sluice::prelude::*;
//!
//! let username = string()
//!     .size(3, 16)
//!     .pattern(Regex::new("^[a-z0-9_]+$").unwrap())
//!     .refine("not_reserved", |s: &str, _: &Context| s != "admin");
//!
//! assert!(username.is_valid("river_42"));
//!
//! let failures: Vec<_> = username.validate("Ri").into_result().unwrap_err();
//! assert_eq!(failures.len(), 1);
//! assert_eq!(failures[0].class(), FailureClass::Size);
//! assert_eq!(failures[0].refinement(), Some("size"));
//!
//! let failure = username.first_failure("admin").unwrap();
//! assert_eq!(failure.class(), FailureClass::Generic);
//! assert_eq!(failure.refinement(), Some("not_reserved"));
//! ```
//!
//! ## Cargo features
//!
//! - `tracing` (default): emit `tracing` events when refinements fail or are skipped
//! - `serde`: serialize failures as flat camelCase records

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod context;
pub mod either;
pub mod error;
pub mod failure;
pub mod nonempty;
pub mod outcome;
pub mod refine;
pub mod refiners;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod validator;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use context::{Context, PathSegment};
pub use either::Either;
pub use error::ValidateError;
pub use failure::{
    Detail, Failure, FailureClass, GenericFailure, Measure, NoDetail, SizeFailure, TypeFailure,
    ValueFailure,
};
pub use nonempty::NonEmptyVec;
pub use outcome::{normalize, IntoOutcome, Issue, Outcome};
pub use refine::{refine, Refine, Refined, Refiner, ValidatorExt};
pub use refiners::{
    empty, exact_size, max, min, nonempty, pattern, size, Collection, Magnitude, Measurable,
    MeasureKind, Numeric, ThresholdOptions,
};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use validator::{
    array, boolean, date, define, integer, map, number, set, string, Base, Failures, Validator,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::{Context, PathSegment};
    pub use crate::either::Either;
    pub use crate::error::ValidateError;
    pub use crate::failure::{Detail, Failure, FailureClass, Measure};
    pub use crate::outcome::{IntoOutcome, Issue, Outcome};
    pub use crate::refine::{refine, Refiner, ValidatorExt};
    pub use crate::refiners::{
        empty, exact_size, max, min, nonempty, pattern, size, ThresholdOptions,
    };
    pub use crate::validation::Validation;
    pub use crate::validator::{
        array, boolean, date, define, integer, map, number, set, string, Validator,
    };
}

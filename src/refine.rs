//! The refinement combinator
//!
//! [`refine`] wraps an existing validator and layers one more semantic check
//! on top of it. The wrapped validator is never modified: the result is a new
//! [`Refine`] that owns (or borrows) the old one.
//!
//! # Ordering and laziness
//!
//! Checking a refined validator first drains the wrapped validator's failure
//! sequence, forwarding each failure unchanged. Only when that sequence ends
//! *without* a single failure is the refiner invoked, so a refiner is only
//! ever handed values every upstream layer accepted. Its answer is normalized
//! and each resulting failure is tagged with the refinement's name.
//!
//! Nothing is computed ahead of demand: a caller that stops after the first
//! failure never causes later refiners to run.
//!
//! # Example
//!
//! ```
//! use sluice::prelude::*;
//!
//! let username = refine(size(string(), 3, 12), "lowercase", |s: &str, _: &Context| {
//!     if s.chars().all(|c| c.is_ascii_lowercase()) {
//!         Ok(())
//!     } else {
//!         Err("must be lowercase".to_string())
//!     }
//! });
//!
//! assert!(username.is_valid("alice"));
//!
//! let failures: Vec<_> = username.validate("Alice").into_result().unwrap_err();
//! assert_eq!(failures.len(), 1);
//! assert_eq!(failures[0].refinement(), Some("lowercase"));
//! assert_eq!(failures[0].message, "must be lowercase");
//!
//! // "ab" fails `size`, so the lowercase refiner never runs
//! let failures: Vec<_> = username.validate("AB").into_result().unwrap_err();
//! assert_eq!(failures.len(), 1);
//! assert_eq!(failures[0].refinement(), Some("size"));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;

use regex::Regex;

use crate::context::Context;
use crate::failure::{Detail, Failure, GenericFailure};
use crate::outcome::{normalize, placeholder_message, IntoOutcome, Outcome};
use crate::refiners::bounds::{Max, Min, ThresholdOptions};
use crate::refiners::empty::{Empty, NonEmpty};
use crate::refiners::measure::{Collection, Magnitude, Measurable};
use crate::refiners::pattern::Pattern;
use crate::refiners::size::Size;
use crate::validator::{Failures, Validator};
use crate::Either;

/// The failure details of a refined validator: upstream details on the left,
/// the refinement's own (generic or structured) details on the right.
pub type Refined<U, D> = Either<U, Either<GenericFailure, D>>;

/// A policy layering one semantic constraint onto an already-valid value.
///
/// Refiners must be pure: they may not rely on being called more than once,
/// nor keep state between calls. Any closure `Fn(&T, &Context) -> O` where
/// `O: IntoOutcome` is a refiner.
pub trait Refiner<T: ?Sized> {
    /// Structured detail produced on failure
    type Detail: Detail;

    /// Decide whether `value` satisfies the refinement
    fn refine(&self, value: &T, ctx: &Context) -> Outcome<Self::Detail>;
}

impl<T, F, O> Refiner<T> for F
where
    T: ?Sized,
    F: Fn(&T, &Context) -> O,
    O: IntoOutcome,
{
    type Detail = O::Detail;

    #[inline]
    fn refine(&self, value: &T, ctx: &Context) -> Outcome<O::Detail> {
        self(value, ctx).into_outcome()
    }
}

/// A validator refined by one named refinement.
///
/// Created by [`refine`], the built-in refiner functions, or the
/// [`ValidatorExt`] methods.
#[derive(Clone)]
pub struct Refine<V, R> {
    inner: V,
    name: Cow<'static, str>,
    refiner: R,
}

impl<V, R> Refine<V, R> {
    /// Wrap `inner` with a named refiner.
    ///
    /// `name` must not be empty; it is the provenance tag of every failure
    /// the refiner produces.
    pub fn new(inner: V, name: impl Into<Cow<'static, str>>, refiner: R) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "refinement name must not be empty");
        Refine {
            inner,
            name,
            refiner,
        }
    }

    /// The wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// The refinement name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The refiner policy.
    pub fn refiner(&self) -> &R {
        &self.refiner
    }
}

impl<V: fmt::Debug, R> fmt::Debug for Refine<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refine")
            .field("name", &self.name)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<V, R> Validator for Refine<V, R>
where
    V: Validator,
    V::Value: fmt::Debug,
    R: Refiner<V::Value>,
{
    type Value = V::Value;
    type Detail = Refined<V::Detail, R::Detail>;

    fn type_name(&self) -> &str {
        self.inner.type_name()
    }

    fn check<'a>(&'a self, value: &'a V::Value, ctx: &'a Context) -> Failures<'a, Self::Detail> {
        Box::new(RefineFailures {
            refine: self,
            value,
            ctx,
            state: State::Upstream {
                failures: self.inner.check(value, ctx),
                rejected: false,
            },
        })
    }
}

enum State<'a, U, D> {
    Upstream {
        failures: Failures<'a, U>,
        rejected: bool,
    },
    Refined(std::vec::IntoIter<Failure<Either<GenericFailure, D>>>),
    Done,
}

/// Failure sequence of a [`Refine`]: upstream failures, then the refinement's.
struct RefineFailures<'a, V, R>
where
    V: Validator,
    R: Refiner<V::Value>,
{
    refine: &'a Refine<V, R>,
    value: &'a V::Value,
    ctx: &'a Context,
    state: State<'a, V::Detail, R::Detail>,
}

impl<'a, V, R> RefineFailures<'a, V, R>
where
    V: Validator,
    V::Value: fmt::Debug,
    R: Refiner<V::Value>,
{
    fn run_refiner(&self) -> Vec<Failure<Either<GenericFailure, R::Detail>>> {
        let name: &str = &self.refine.name;
        let type_name = self.refine.inner.type_name();
        let ctx = self.ctx;
        let generic = |message: String| {
            Failure::new(message, type_name, Either::Left(GenericFailure))
                .with_path(ctx.path().to_vec())
        };

        let failures: Vec<_> = match self.refine.refiner.refine(self.value, ctx) {
            Outcome::Pass => Vec::new(),
            Outcome::Message(message) if !message.is_empty() => vec![generic(message)],
            Outcome::Reject | Outcome::Message(_) => vec![generic(placeholder_message(
                type_name,
                Some(name),
                &self.value,
            ))],
            Outcome::Issues(issues) => normalize(issues, ctx, type_name, Some(name), &self.value)
                .map(|failure| failure.map_detail(Either::Right))
                .collect(),
        };

        failures
            .into_iter()
            .map(|failure| {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    refinement = name,
                    type_name,
                    class = %failure.class(),
                    path = %ctx,
                    "refinement failed"
                );
                failure.with_refinement(name)
            })
            .collect()
    }
}

impl<'a, V, R> Iterator for RefineFailures<'a, V, R>
where
    V: Validator,
    V::Value: fmt::Debug,
    R: Refiner<V::Value>,
{
    type Item = Failure<Refined<V::Detail, R::Detail>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.state {
                State::Upstream { failures, rejected } => {
                    if let Some(failure) = failures.next() {
                        *rejected = true;
                        return Some(failure.map_detail(Either::Left));
                    }
                    let rejected = *rejected;
                    self.state = if rejected {
                        #[cfg(feature = "tracing")]
                        tracing::trace!(
                            refinement = %self.refine.name,
                            "skipping refinement, value rejected upstream"
                        );
                        State::Done
                    } else {
                        State::Refined(self.run_refiner().into_iter())
                    };
                }
                State::Refined(failures) => match failures.next() {
                    Some(failure) => return Some(failure.map_detail(Either::Right)),
                    None => self.state = State::Done,
                },
                State::Done => return None,
            }
        }
    }
}

impl<'a, V, R> FusedIterator for RefineFailures<'a, V, R>
where
    V: Validator,
    V::Value: fmt::Debug,
    R: Refiner<V::Value>,
{
}

/// Layer a named refinement onto `validator`.
///
/// The refiner may return anything implementing [`IntoOutcome`]: `bool`,
/// `()`, a message (`&str`, `String`, `Option<String>`, `Result<(), String>`),
/// structured issues, or an [`Outcome`].
///
/// # Example
///
/// ```
/// use sluice::prelude::*;
///
/// let even = refine(integer::<i64>(), "even", |n: &i64, _: &Context| n % 2 == 0);
///
/// assert!(even.is_valid(&4));
/// let failure = even.first_failure(&3).unwrap();
/// assert_eq!(failure.class(), FailureClass::Generic);
/// assert_eq!(
///     failure.message,
///     "Expected a value of type `integer` with refinement `even`, but received: `3`"
/// );
/// ```
pub fn refine<V, F, O>(validator: V, name: impl Into<Cow<'static, str>>, refiner: F) -> Refine<V, F>
where
    V: Validator,
    F: Fn(&V::Value, &Context) -> O,
    O: IntoOutcome,
{
    Refine::new(validator, name, refiner)
}

/// Method-chaining form of [`refine`] and the built-in refiners.
///
/// # Example
///
/// ```
/// use sluice::prelude::*;
///
/// let port = integer::<u32>()
///     .min(1, ThresholdOptions::default())
///     .max(65_535, ThresholdOptions::default());
///
/// assert!(port.is_valid(&8080));
/// assert!(!port.is_valid(&0));
/// assert!(!port.is_valid(&70_000));
/// ```
pub trait ValidatorExt: Validator + Sized {
    /// See [`refine`].
    fn refine<F, O>(self, name: impl Into<Cow<'static, str>>, refiner: F) -> Refine<Self, F>
    where
        F: Fn(&Self::Value, &Context) -> O,
        O: IntoOutcome,
    {
        Refine::new(self, name, refiner)
    }

    /// See [`empty`](crate::refiners::empty()).
    fn empty(self) -> Refine<Self, Empty>
    where
        Self::Value: Collection,
    {
        crate::refiners::empty(self)
    }

    /// See [`nonempty`](crate::refiners::nonempty()).
    fn nonempty(self) -> Refine<Self, NonEmpty>
    where
        Self::Value: Collection,
    {
        crate::refiners::nonempty(self)
    }

    /// See [`min`](crate::refiners::min()).
    fn min(self, threshold: Self::Value, options: ThresholdOptions) -> Refine<Self, Min<Self::Value>>
    where
        Self::Value: Magnitude,
    {
        crate::refiners::min(self, threshold, options)
    }

    /// See [`max`](crate::refiners::max()).
    fn max(self, threshold: Self::Value, options: ThresholdOptions) -> Refine<Self, Max<Self::Value>>
    where
        Self::Value: Magnitude,
    {
        crate::refiners::max(self, threshold, options)
    }

    /// See [`pattern`](crate::refiners::pattern()).
    fn pattern(self, regex: Regex) -> Refine<Self, Pattern>
    where
        Self::Value: AsRef<str>,
    {
        crate::refiners::pattern(self, regex)
    }

    /// See [`size`](crate::refiners::size()).
    fn size(
        self,
        min: <Self::Value as Measurable>::Unit,
        max: <Self::Value as Measurable>::Unit,
    ) -> Refine<Self, Size<<Self::Value as Measurable>::Unit>>
    where
        Self::Value: Measurable,
    {
        crate::refiners::size(self, min, max)
    }

    /// See [`exact_size`](crate::refiners::exact_size()).
    fn exact_size(
        self,
        size: <Self::Value as Measurable>::Unit,
    ) -> Refine<Self, Size<<Self::Value as Measurable>::Unit>>
    where
        Self::Value: Measurable,
    {
        crate::refiners::exact_size(self, size)
    }
}

impl<V: Validator> ValidatorExt for V {}

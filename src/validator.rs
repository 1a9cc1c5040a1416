//! The validator abstraction and the base validators refinements build on
//!
//! A [`Validator`] is an immutable descriptor with a type name and a check
//! procedure that lazily yields zero or more [`Failure`]s for a value. An
//! empty sequence means the value is accepted.
//!
//! Base validators ([`string`], [`number`], [`array`], ...) only confirm the
//! value is an acceptable instance of its type. Everything else is layered on
//! with [`refine`](crate::refine) and the built-in refiners.
//!
//! # Example
//!
//! ```
//! use sluice::prelude::*;
//!
//! let v = number::<f64>();
//! assert!(v.is_valid(&1.5));
//! assert!(!v.is_valid(&f64::NAN));
//!
//! let failure = v.first_failure(&f64::NAN).unwrap();
//! assert_eq!(failure.class(), FailureClass::Type);
//! assert_eq!(failure.refinement(), None);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::context::Context;
use crate::error::ValidateError;
use crate::failure::{Detail, Failure, TypeFailure};
use crate::nonempty::NonEmptyVec;
use crate::refiners::measure::{Magnitude, Numeric};
use crate::Validation;

/// A lazy, finite sequence of failures produced by one check.
///
/// Consumers may stop pulling early; nothing past the last pulled failure is
/// computed.
pub type Failures<'a, D> = Box<dyn Iterator<Item = Failure<D>> + 'a>;

/// An immutable "is this value acceptable" descriptor.
///
/// `Value` is the validated type and may be unsized (`str`, `[T]`). `Detail`
/// is the static union of failure details this validator can yield; it grows
/// with each refinement applied on top.
pub trait Validator {
    /// The validated type
    type Value: ?Sized;

    /// Every failure detail this validator can produce
    type Detail: Detail;

    /// Human-readable type name used in failure messages
    fn type_name(&self) -> &str;

    /// Lazily produce the failures of `value`.
    fn check<'a>(&'a self, value: &'a Self::Value, ctx: &'a Context)
        -> Failures<'a, Self::Detail>;

    /// Whether `value` is accepted. Stops at the first failure.
    fn is_valid(&self, value: &Self::Value) -> bool {
        let ctx = Context::root();
        let mut failures = self.check(value, &ctx);
        failures.next().is_none()
    }

    /// The first failure of `value`, if any. Later failures are never computed.
    fn first_failure(&self, value: &Self::Value) -> Option<Failure<Self::Detail>> {
        let ctx = Context::root();
        let mut failures = self.check(value, &ctx);
        failures.next()
    }

    /// Validate a root value, collecting every failure.
    ///
    /// # Example
    ///
    /// ```
    /// use sluice::prelude::*;
    ///
    /// let v = size(string(), 2, 4);
    /// assert!(v.validate("abc").is_success());
    /// assert!(v.validate("abcdef").is_failure());
    /// ```
    fn validate<'v>(
        &self,
        value: &'v Self::Value,
    ) -> Validation<&'v Self::Value, Vec<Failure<Self::Detail>>> {
        let ctx = Context::root();
        self.validate_at(value, &ctx)
    }

    /// Validate a value nested somewhere inside a larger input.
    fn validate_at<'v>(
        &self,
        value: &'v Self::Value,
        ctx: &Context,
    ) -> Validation<&'v Self::Value, Vec<Failure<Self::Detail>>> {
        let failures: Vec<_> = self.check(value, ctx).collect();
        if failures.is_empty() {
            Validation::Success(value)
        } else {
            Validation::Failure(failures)
        }
    }

    /// Validate a root value, turning rejection into an error.
    ///
    /// # Example
    ///
    /// ```
    /// use sluice::prelude::*;
    ///
    /// let v = empty(string());
    /// let err = v.assert("x").unwrap_err();
    /// assert_eq!(err.failures().len(), 1);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Expected an empty string but received one with a size of `1`"
    /// );
    /// ```
    fn assert(&self, value: &Self::Value) -> Result<(), ValidateError<Self::Detail>> {
        let ctx = Context::root();
        let failures: Vec<_> = self.check(value, &ctx).collect();
        match NonEmptyVec::from_vec(failures) {
            Some(failures) => Err(ValidateError::new(failures)),
            None => Ok(()),
        }
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    type Value = V::Value;
    type Detail = V::Detail;

    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn check<'a>(&'a self, value: &'a Self::Value, ctx: &'a Context) -> Failures<'a, Self::Detail> {
        (**self).check(value, ctx)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    type Value = V::Value;
    type Detail = V::Detail;

    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn check<'a>(&'a self, value: &'a Self::Value, ctx: &'a Context) -> Failures<'a, Self::Detail> {
        (**self).check(value, ctx)
    }
}

type Guard<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A base validator: a type name plus an optional guard on the value.
///
/// Values failing the guard produce one [`TypeFailure`] and no refinement
/// layered on top is ever run for them.
pub struct Base<T: ?Sized> {
    name: Cow<'static, str>,
    guard: Option<Guard<T>>,
    _value: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Base<T> {
    /// A base validator accepting every value of `T`.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Base {
            name: name.into(),
            guard: None,
            _value: PhantomData,
        }
    }

    /// Restrict the accepted values.
    pub fn with_guard<F>(mut self, guard: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Arc::new(guard));
        self
    }

    fn accepts(&self, value: &T) -> bool {
        self.guard.as_ref().map_or(true, |guard| guard(value))
    }
}

impl<T: ?Sized> Clone for Base<T> {
    fn clone(&self) -> Self {
        Base {
            name: self.name.clone(),
            guard: self.guard.clone(),
            _value: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Base<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base")
            .field("name", &self.name)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}

impl<T: fmt::Debug + ?Sized> Validator for Base<T> {
    type Value = T;
    type Detail = TypeFailure;

    fn type_name(&self) -> &str {
        &self.name
    }

    fn check<'a>(&'a self, value: &'a T, ctx: &'a Context) -> Failures<'a, TypeFailure> {
        Box::new(std::iter::once_with(move || {
            if self.accepts(value) {
                None
            } else {
                let message = format!(
                    "Expected a value of type `{}`, but received: `{:?}`",
                    self.name, value
                );
                let detail = TypeFailure {
                    expected: self.name.to_string(),
                };
                Some(Failure::new(message, &*self.name, detail).with_path(ctx.path().to_vec()))
            }
        })
        .flatten())
    }
}

/// Any string.
pub fn string() -> Base<str> {
    Base::new("string")
}

/// Any number except NaN.
pub fn number<N: Numeric + fmt::Debug + 'static>() -> Base<N> {
    Base::new("number").with_guard(|n: &N| n.is_number())
}

/// A number without a fractional part.
pub fn integer<N: Numeric + fmt::Debug + 'static>() -> Base<N> {
    Base::new("integer").with_guard(|n: &N| n.is_integer())
}

/// Any boolean.
pub fn boolean() -> Base<bool> {
    Base::new("boolean")
}

/// Any date or timestamp.
pub fn date<D: Magnitude + fmt::Debug>() -> Base<D> {
    Base::new("date")
}

/// Any sequence of `T`.
pub fn array<T: fmt::Debug>() -> Base<[T]> {
    Base::new("array")
}

/// Any keyed collection, such as `HashMap<K, V>` or `BTreeMap<K, V>`.
pub fn map<M: fmt::Debug>() -> Base<M> {
    Base::new("map")
}

/// Any unkeyed collection, such as `HashSet<T>` or `BTreeSet<T>`.
pub fn set<S: fmt::Debug>() -> Base<S> {
    Base::new("set")
}

/// A user-defined base type accepted by `guard`.
///
/// # Example
///
/// ```
/// use sluice::prelude::*;
///
/// let email = define("email", |s: &str| s.contains('@'));
/// assert!(email.is_valid("a@b.c"));
/// assert!(!email.is_valid("nope"));
/// ```
pub fn define<T, F>(name: impl Into<Cow<'static, str>>, guard: F) -> Base<T>
where
    T: fmt::Debug + ?Sized,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Base::new(name).with_guard(guard)
}

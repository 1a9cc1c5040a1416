//! Assertion macros for testing validators
//!
//! # Examples
//!
//! ```rust
//! use sluice::prelude::*;
//! use sluice::{assert_accepts, assert_failure, assert_rejects, assert_success};
//!
//! let v = size(string(), 1, 3);
//!
//! assert_accepts!(v, "ab");
//! assert_rejects!(v, "abcd");
//! assert_rejects!(v, "", FailureClass::Size);
//!
//! assert_success!(v.validate("abc"));
//! assert_failure!(v.validate(""));
//! ```

/// Assert that a validation succeeds.
///
/// This macro will panic if the validation is a `Failure`.
///
/// # Example
///
/// ```rust
/// use sluice::{Validation, assert_success};
///
/// let val = Validation::<_, Vec<String>>::success(42);
/// assert_success!(val);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// This macro will panic if the validation is a `Success`.
///
/// # Example
///
/// ```rust
/// use sluice::{Validation, assert_failure};
///
/// let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
/// assert_failure!(val);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with exactly the given failure messages,
/// in order.
///
/// # Example
///
/// ```rust
/// use sluice::prelude::*;
/// use sluice::assert_validation_errors;
///
/// let v = nonempty(string());
/// assert_validation_errors!(
///     v.validate(""),
///     vec!["Expected a nonempty string but received an empty one"]
/// );
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(failures) => {
                let messages: Vec<String> = failures.iter().map(|f| f.message.clone()).collect();
                let expected: Vec<String> = $expected.into_iter().map(|m| m.to_string()).collect();
                assert_eq!(messages, expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that a validator accepts a value.
///
/// # Example
///
/// ```rust
/// use sluice::prelude::*;
/// use sluice::assert_accepts;
///
/// assert_accepts!(min(number::<i32>(), 0, ThresholdOptions::default()), &5);
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($validator:expr, $value:expr) => {{
        use $crate::Validator as _;
        let validator = &$validator;
        let ctx = $crate::Context::root();
        let failures: Vec<_> = validator.check($value, &ctx).collect();
        if !failures.is_empty() {
            panic!("Expected value to be accepted, got failures: {:?}", failures);
        }
    }};
}

/// Assert that a validator rejects a value, optionally checking the class of
/// its first failure.
///
/// # Example
///
/// ```rust
/// use sluice::prelude::*;
/// use sluice::assert_rejects;
///
/// let v = max(number::<i32>(), 10, ThresholdOptions::default());
/// assert_rejects!(v, &11);
/// assert_rejects!(v, &11, FailureClass::Size);
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($validator:expr, $value:expr) => {{
        use $crate::Validator as _;
        let validator = &$validator;
        let ctx = $crate::Context::root();
        let mut failures = validator.check($value, &ctx);
        if failures.next().is_none() {
            panic!("Expected value to be rejected, but it was accepted");
        }
    }};
    ($validator:expr, $value:expr, $class:expr) => {{
        use $crate::Validator as _;
        let validator = &$validator;
        let ctx = $crate::Context::root();
        let mut failures = validator.check($value, &ctx);
        match failures.next() {
            Some(failure) => assert_eq!(failure.class(), $class),
            None => panic!("Expected value to be rejected, but it was accepted"),
        }
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{PathSegment, ThresholdOptions, Validation};

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Validation<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
    T::Strategy: 'static,
    E::Strategy: 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Validation::success),
            any_with::<E>(e_params).prop_map(Validation::failure),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for ThresholdOptions {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        any::<bool>()
            .prop_map(|exclusive| ThresholdOptions { exclusive })
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for PathSegment {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            "[a-z_]{1,8}".prop_map(PathSegment::Key),
            (0usize..64).prop_map(PathSegment::Index),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn assert_success_macro() {
        assert_success!(string().validate("ok"));
    }

    #[test]
    fn assert_failure_macro() {
        assert_failure!(empty(string()).validate("x"));
    }

    #[test]
    fn assert_validation_errors_macro() {
        let v = size(string(), 2, 2);
        assert_validation_errors!(
            v.validate("abc"),
            vec!["Expected a string with a length of `2` but received one with a length of `3`"]
        );
    }

    #[test]
    fn assert_accepts_and_rejects_macros() {
        let v = nonempty(array::<i32>());
        assert_accepts!(v, &[1]);
        assert_rejects!(v, &[]);
        assert_rejects!(v, &[], FailureClass::Size);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        assert_success!(empty(string()).validate("x"));
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        assert_failure!(string().validate("x"));
    }

    #[test]
    #[should_panic(expected = "Expected value to be accepted")]
    fn assert_accepts_panics_on_rejection() {
        assert_accepts!(empty(string()), "x");
    }

    #[test]
    #[should_panic(expected = "Expected value to be rejected")]
    fn assert_rejects_panics_on_acceptance() {
        assert_rejects!(empty(string()), "");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::prelude::*;
        use crate::PathSegment;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn validation_arbitrary_generates_valid_instances(
                val in any::<Validation<i32, Vec<String>>>()
            ) {
                match val {
                    Validation::Success(_) => prop_assert!(val.is_success()),
                    Validation::Failure(_) => prop_assert!(val.is_failure()),
                }
            }

            #[test]
            fn arbitrary_threshold_options_drive_min(options in any::<ThresholdOptions>(), n in -50i32..50) {
                let v = min(integer::<i32>(), 0, options);
                let expected = if options.exclusive { n > 0 } else { n >= 0 };
                prop_assert_eq!(v.is_valid(&n), expected);
            }

            #[test]
            fn arbitrary_paths_end_up_in_failures(segments in prop::collection::vec(any::<PathSegment>(), 0..4)) {
                let ctx = segments.iter().cloned().fold(Context::root(), |ctx, s| ctx.at(s));
                let failure = nonempty(string()).validate_at("", &ctx).into_result().unwrap_err();
                prop_assert_eq!(&failure[0].path, &segments);
            }
        }
    }
}

//! Tests and examples for the assertion macros
//!
//! This test suite demonstrates patterns for testing validators built with sluice.

use regex::Regex;
use sluice::prelude::*;
use sluice::{
    assert_accepts, assert_failure, assert_rejects, assert_success, assert_validation_errors,
};

// Example domain validators
fn email() -> impl Validator<Value = str> {
    string()
        .nonempty()
        .pattern(Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

fn age() -> impl Validator<Value = i32> {
    integer::<i32>()
        .min(18, ThresholdOptions::default())
        .max(130, ThresholdOptions::default())
}

fn as_messages<D: Detail>(failures: Vec<Failure<D>>) -> Vec<String> {
    failures.into_iter().map(|f| f.message).collect()
}

// Tests demonstrating assertion macros

#[test]
fn test_assert_success_with_valid_email() {
    assert_success!(email().validate("user@example.com"));
}

#[test]
fn test_assert_failure_with_invalid_email() {
    assert_failure!(email().validate("invalid"));
}

#[test]
fn test_assert_validation_errors_with_specific_error() {
    assert_validation_errors!(
        email().validate(""),
        vec!["Expected a nonempty string but received an empty one"]
    );
}

#[test]
fn test_assert_accepts_with_age() {
    assert_accepts!(age(), &25);
    assert_accepts!(age(), &18);
}

#[test]
fn test_assert_rejects_with_underage() {
    assert_rejects!(age(), &15);
    assert_rejects!(age(), &15, FailureClass::Size);
}

#[test]
fn test_accumulating_failures_across_fields() {
    let result = email()
        .validate("invalid")
        .map_err(as_messages)
        .and(age().validate(&15).map_err(as_messages));
    assert_failure!(result);

    match result {
        Validation::Failure(errors) => {
            assert_eq!(errors.len(), 2);
            assert!(errors[0].contains("matching"));
            assert_eq!(
                errors[1],
                "Expected a integer greater than or equal to 18 but received `15`"
            );
        }
        _ => panic!("Expected failure"),
    }
}

#[test]
fn test_successful_signup_validation() {
    let result = email()
        .validate("user@example.com")
        .map_err(as_messages)
        .and(age().validate(&25).map_err(as_messages));
    assert_success!(result);

    match result {
        Validation::Success((email, age)) => {
            assert_eq!(email, "user@example.com");
            assert_eq!(*age, 25);
        }
        _ => panic!("Expected success"),
    }
}

#[test]
fn test_assert_on_type_failures() {
    let positive = define("positive", |n: &i32| *n > 0);
    assert_rejects!(positive, &-1, FailureClass::Type);
    assert_accepts!(positive, &1);
}

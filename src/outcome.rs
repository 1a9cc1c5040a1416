//! Refiner outcomes and their normalization into canonical failures
//!
//! A refiner may answer in several shapes: a boolean, a message, nothing at
//! all, or a list of structured issues. [`IntoOutcome`] funnels all of them
//! into one [`Outcome`] and [`normalize`] turns structured issues into
//! canonical [`Failure`]s carrying the validator type and context path.
//!
//! # Example
//!
//! ```
//! use sluice::{IntoOutcome, Outcome};
//!
//! assert!(matches!(true.into_outcome(), Outcome::<sluice::NoDetail>::Pass));
//! assert!(matches!(false.into_outcome(), Outcome::<sluice::NoDetail>::Reject));
//! assert!(matches!("too long".into_outcome(), Outcome::<sluice::NoDetail>::Message(_)));
//! ```

use std::fmt;

use crate::context::{Context, PathSegment};
use crate::failure::{Detail, Failure, NoDetail};

/// A raw, failure-shaped record returned by a refiner.
///
/// Missing messages are filled in with the generic placeholder during
/// normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue<D> {
    /// Class-specific detail
    pub detail: D,
    /// Optional message; a placeholder is used when absent
    pub message: Option<String>,
    /// Path below the checked value, appended to the context path
    pub path: Vec<PathSegment>,
}

impl<D> Issue<D> {
    /// An issue with no message and no sub-path.
    pub fn new(detail: D) -> Self {
        Issue {
            detail,
            message: None,
            path: Vec::new(),
        }
    }

    /// Set the message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Point the issue at a nested part of the checked value.
    pub fn at(mut self, segment: impl Into<PathSegment>) -> Self {
        self.path.push(segment.into());
        self
    }
}

/// The normalized answer of a refiner.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<D> {
    /// The refinement holds
    Pass,
    /// The refinement does not hold; the generic placeholder message is used
    Reject,
    /// The refinement does not hold, for the given reason
    Message(String),
    /// Structured issues; an empty list means the refinement holds
    Issues(Vec<Issue<D>>),
}

impl<D> Outcome<D> {
    /// A single structured issue.
    pub fn issue(issue: Issue<D>) -> Self {
        Outcome::Issues(vec![issue])
    }

    /// Whether this outcome produces no failures.
    pub fn is_pass(&self) -> bool {
        match self {
            Outcome::Pass => true,
            Outcome::Issues(issues) => issues.is_empty(),
            Outcome::Reject | Outcome::Message(_) => false,
        }
    }
}

/// Anything a refiner may return.
pub trait IntoOutcome {
    /// The structured detail type this return shape may carry
    type Detail: Detail;

    /// Convert into the canonical outcome
    fn into_outcome(self) -> Outcome<Self::Detail>;
}

impl<D: Detail> IntoOutcome for Outcome<D> {
    type Detail = D;

    fn into_outcome(self) -> Outcome<D> {
        self
    }
}

impl IntoOutcome for bool {
    type Detail = NoDetail;

    fn into_outcome(self) -> Outcome<NoDetail> {
        if self {
            Outcome::Pass
        } else {
            Outcome::Reject
        }
    }
}

// An absent answer counts as a pass
impl IntoOutcome for () {
    type Detail = NoDetail;

    fn into_outcome(self) -> Outcome<NoDetail> {
        Outcome::Pass
    }
}

impl IntoOutcome for String {
    type Detail = NoDetail;

    fn into_outcome(self) -> Outcome<NoDetail> {
        Outcome::Message(self)
    }
}

impl IntoOutcome for &str {
    type Detail = NoDetail;

    fn into_outcome(self) -> Outcome<NoDetail> {
        Outcome::Message(self.to_string())
    }
}

impl IntoOutcome for Option<String> {
    type Detail = NoDetail;

    fn into_outcome(self) -> Outcome<NoDetail> {
        match self {
            Some(message) => Outcome::Message(message),
            None => Outcome::Pass,
        }
    }
}

impl IntoOutcome for Result<(), String> {
    type Detail = NoDetail;

    fn into_outcome(self) -> Outcome<NoDetail> {
        match self {
            Ok(()) => Outcome::Pass,
            Err(message) => Outcome::Message(message),
        }
    }
}

impl<D: Detail> IntoOutcome for Vec<Issue<D>> {
    type Detail = D;

    fn into_outcome(self) -> Outcome<D> {
        Outcome::Issues(self)
    }
}

impl<D: Detail> IntoOutcome for Issue<D> {
    type Detail = D;

    fn into_outcome(self) -> Outcome<D> {
        Outcome::issue(self)
    }
}

/// The placeholder message used when a refinement fails without saying why.
pub fn placeholder_message(type_name: &str, refinement: Option<&str>, value: &dyn fmt::Debug) -> String {
    match refinement {
        Some(name) => format!(
            "Expected a value of type `{}` with refinement `{}`, but received: `{:?}`",
            type_name, name, value
        ),
        None => format!(
            "Expected a value of type `{}`, but received: `{:?}`",
            type_name, value
        ),
    }
}

/// Turn raw issues into canonical failures.
///
/// Every failure gets the validator's type name and the context path followed
/// by the issue's own sub-path. Issues without a message, or with an empty
/// one, get the placeholder.
/// Provenance tagging is left to the caller.
pub fn normalize<'a, D: 'a>(
    issues: Vec<Issue<D>>,
    ctx: &'a Context,
    type_name: &'a str,
    refinement: Option<&'a str>,
    value: &'a dyn fmt::Debug,
) -> impl Iterator<Item = Failure<D>> + 'a {
    issues.into_iter().map(move |issue| {
        let message = issue
            .message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| placeholder_message(type_name, refinement, value));
        let mut path = ctx.path().to_vec();
        path.extend(issue.path);
        Failure::new(message, type_name, issue.detail).with_path(path)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::{FailureClass, ValueFailure};

    fn value_issue() -> Issue<ValueFailure> {
        Issue::new(ValueFailure {
            except: "^x$".to_string(),
            actually: "y".to_string(),
        })
    }

    #[test]
    fn test_boolean_outcomes() {
        assert_eq!(true.into_outcome(), Outcome::Pass);
        assert_eq!(false.into_outcome(), Outcome::Reject);
    }

    #[test]
    fn test_absent_outcome_passes() {
        assert!(().into_outcome().is_pass());
        assert!(None::<String>.into_outcome().is_pass());
    }

    #[test]
    fn test_message_outcomes() {
        assert_eq!("nope".into_outcome(), Outcome::Message("nope".to_string()));
        assert_eq!(
            Err::<(), _>("bad".to_string()).into_outcome(),
            Outcome::Message("bad".to_string())
        );
    }

    #[test]
    fn test_empty_issue_list_passes() {
        let issues: Vec<Issue<ValueFailure>> = Vec::new();
        assert!(issues.into_outcome().is_pass());
        assert!(!vec![value_issue()].into_outcome().is_pass());
    }

    #[test]
    fn test_normalize_fills_placeholder_and_path() {
        let ctx = Context::root().at("name");
        let value = "y";
        let failures: Vec<_> = normalize(
            vec![value_issue().at(0usize)],
            &ctx,
            "string",
            Some("pattern"),
            &value,
        )
        .collect();

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].class(), FailureClass::Value);
        assert_eq!(failures[0].type_name, "string");
        assert_eq!(
            failures[0].path,
            vec![PathSegment::Key("name".into()), PathSegment::Index(0)]
        );
        assert_eq!(
            failures[0].message,
            "Expected a value of type `string` with refinement `pattern`, but received: `\"y\"`"
        );
        assert_eq!(failures[0].refinement(), None);
    }

    #[test]
    fn test_normalize_keeps_explicit_message() {
        let ctx = Context::root();
        let failures: Vec<_> = normalize(
            vec![value_issue().message("must be x")],
            &ctx,
            "string",
            None,
            &"y",
        )
        .collect();

        assert_eq!(failures[0].message, "must be x");
    }

    #[test]
    fn test_normalize_replaces_empty_message() {
        let ctx = Context::root();
        let failures: Vec<_> = normalize(
            vec![value_issue().message("")],
            &ctx,
            "string",
            Some("pattern"),
            &"y",
        )
        .collect();

        assert_eq!(
            failures[0].message,
            "Expected a value of type `string` with refinement `pattern`, but received: `\"y\"`"
        );
    }
}

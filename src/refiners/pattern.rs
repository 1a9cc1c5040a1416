//! Regular expression refiner

use regex::Regex;

use crate::context::Context;
use crate::failure::ValueFailure;
use crate::outcome::{Issue, Outcome};
use crate::refine::{Refine, Refiner};
use crate::validator::Validator;

/// Refiner accepting strings the regex matches.
///
/// Matching follows [`Regex::is_match`]: an unanchored pattern matches
/// anywhere in the string.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    type_name: String,
}

impl Pattern {
    /// The pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl<T: AsRef<str> + ?Sized> Refiner<T> for Pattern {
    type Detail = ValueFailure;

    fn refine(&self, value: &T, _ctx: &Context) -> Outcome<ValueFailure> {
        let value = value.as_ref();
        if self.regex.is_match(value) {
            return Outcome::Pass;
        }

        let detail = ValueFailure {
            except: self.regex.as_str().to_string(),
            actually: value.to_string(),
        };
        Outcome::issue(Issue::new(detail).message(format!(
            "Expected a {} matching `/{}/` but received \"{}\"",
            self.type_name,
            self.regex.as_str(),
            value
        )))
    }
}

/// Require the string to match `regex`.
///
/// # Example
///
/// ```
/// use regex::Regex;
/// use sluice::prelude::*;
///
/// let v = pattern(string(), Regex::new("^[a-z]+$").unwrap());
/// assert!(v.is_valid("abc"));
///
/// let failure = v.first_failure("ABC").unwrap();
/// assert_eq!(failure.as_value().unwrap().except, "^[a-z]+$");
/// ```
pub fn pattern<V>(validator: V, regex: Regex) -> Refine<V, Pattern>
where
    V: Validator,
    V::Value: AsRef<str>,
{
    let type_name = validator.type_name().to_string();
    Refine::new(validator, "pattern", Pattern { regex, type_name })
}

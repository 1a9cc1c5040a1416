//! Serde support for failures (feature-gated)
//!
//! A [`Failure`] serializes as one flat record: the common fields plus the
//! fields of whichever detail it carries, with camelCase keys.
//!
//! ```json
//! {
//!   "class": "size",
//!   "message": "Expected a number greater than or equal to 3 but received `2`",
//!   "type": "number",
//!   "refinement": "min",
//!   "path": ["age"],
//!   "actually": 2,
//!   "min": 3,
//!   "minExclusive": false,
//!   "maxExclusive": false
//! }
//! ```

use serde::{Serialize, Serializer};

use crate::context::PathSegment;
use crate::failure::{Detail, Failure, FailureClass, NoDetail};

impl Serialize for NoDetail {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        match *self {}
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FailureRecord<'a, D> {
    class: FailureClass,
    message: &'a str,
    #[serde(rename = "type")]
    type_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    refinement: Option<&'a str>,
    path: &'a [PathSegment],
    #[serde(flatten)]
    detail: &'a D,
}

impl<D> Serialize for Failure<D>
where
    D: Detail + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FailureRecord {
            class: self.class(),
            message: &self.message,
            type_name: &self.type_name,
            refinement: self.refinement(),
            path: &self.path,
            detail: &self.detail,
        }
        .serialize(serializer)
    }
}

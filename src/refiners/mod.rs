//! Built-in refiners
//!
//! Each refiner is a small policy registered through [`refine`](crate::refine())
//! under a fixed name, which becomes the provenance tag of its failures:
//!
//! | Function | Name | Applies to | Detail |
//! |---|---|---|---|
//! | [`empty`] | `empty` | strings, sequences, maps, sets | [`SizeFailure`](crate::SizeFailure) |
//! | [`nonempty`] | `nonempty` | strings, sequences, maps, sets | [`SizeFailure`](crate::SizeFailure) |
//! | [`min`] / [`max`] | `min` / `max` | numbers, dates | [`SizeFailure`](crate::SizeFailure) |
//! | [`pattern`] | `pattern` | strings | [`ValueFailure`](crate::ValueFailure) |
//! | [`size`] / [`exact_size`] | `size` | all of the above | [`SizeFailure`](crate::SizeFailure) |

pub mod bounds;
pub mod empty;
pub mod measure;
pub mod pattern;
pub mod size;

pub use bounds::{max, min, Max, Min, ThresholdOptions};
pub use empty::{empty, nonempty, Empty, NonEmpty};
pub use measure::{Collection, Magnitude, MeasureKind, Measurable, Numeric};
pub use pattern::{pattern, Pattern};
pub use size::{exact_size, size, Size};

//! Structural equivalence between the JSON domain model and the protobuf
//! messages it converts to.
//!
//! Both trees are walked through the [`Inspect`] trait. Differences that are
//! expected from the encoding, such as an `Option` around a sub-message or a
//! wrapper message around a repeated field, are absorbed by unwrapping and by
//! the [`EquivalenceRule`] table; everything else is reported as a
//! [`Mismatch`] with the path where it occurred.

#[macro_use]
mod macros;

mod compare;
mod domain;
mod message;
mod report;
pub mod rules;
mod shape;

pub use compare::{assert_equivalent, Comparator};
pub use report::{CompareError, Mismatch, MismatchKind, Report};
pub use rules::{EquivalenceRule, Verdict};
pub use shape::{Field, Inspect, InspectKey, MapKey, Record, Shape};

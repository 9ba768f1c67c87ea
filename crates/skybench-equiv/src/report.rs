use std::fmt;

use thiserror::Error;

use crate::shape::MapKey;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("cannot compare {type_name} at {path}: value is opaque")]
    Unsupported {
        path: String,
        type_name: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum MismatchKind {
    /// One side is set, the other is not.
    Presence { left_present: bool },
    /// The two values have different shapes.
    Kind {
        left: &'static str,
        right: &'static str,
    },
    Length { left: usize, right: usize },
    FieldCount {
        left_type: &'static str,
        right_type: &'static str,
        left: usize,
        right: usize,
    },
    /// A left-hand field has no counterpart of the same name on the right.
    MissingField {
        field: &'static str,
        right_type: &'static str,
    },
    /// The sorted maps disagree on the key at this position.
    Key { left: MapKey, right: MapKey },
    Value { left: String, right: String },
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Presence { left_present: true } => f.write_str("set on the left, unset on the right"),
            Self::Presence { left_present: false } => f.write_str("unset on the left, set on the right"),
            Self::Kind { left, right } => write!(f, "{left} vs {right}"),
            Self::Length { left, right } => write!(f, "length {left} vs {right}"),
            Self::FieldCount {
                left_type,
                right_type,
                left,
                right,
            } => write!(f, "{left_type} has {left} fields, {right_type} has {right}"),
            Self::MissingField { field, right_type } => {
                write!(f, "field {field} not found on {right_type}")
            }
            Self::Key { left, right } => write!(f, "key {left} vs {right}"),
            Self::Value { left, right } => write!(f, "{left} != {right}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub path: String,
    pub kind: MismatchKind,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Outcome of a comparison that ran to completion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    mismatches: Vec<Mismatch>,
}

impl Report {
    pub(crate) fn new(mismatches: Vec<Mismatch>) -> Self {
        Self { mismatches }
    }

    #[must_use]
    pub fn is_equivalent(&self) -> bool {
        self.mismatches.is_empty()
    }

    #[must_use]
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    /// The mismatch recorded at `path`, if any.
    #[must_use]
    pub fn at(&self, path: &str) -> Option<&Mismatch> {
        self.mismatches.iter().find(|mismatch| mismatch.path == path)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mismatches.is_empty() {
            return f.write_str("equivalent");
        }
        write!(f, "{} mismatch(es)", self.mismatches.len())?;
        for mismatch in &self.mismatches {
            write!(f, "\n  {mismatch}")?;
        }
        Ok(())
    }
}

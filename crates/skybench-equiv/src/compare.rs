use std::fmt;

use tracing::{debug, trace};

use crate::report::{CompareError, Mismatch, MismatchKind, Report};
use crate::rules::{default_rules, EquivalenceRule, Verdict};
use crate::shape::{Inspect, MapKey, Shape};

/// Walks two values side by side and records every structural difference.
///
/// Rules are consulted in insertion order before the structural comparison
/// of each pair, so later rules only see pairs the earlier ones declined.
#[derive(Debug, Clone)]
pub struct Comparator {
    rules: Vec<EquivalenceRule>,
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

impl Comparator {
    /// A comparator with the default rule table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// A comparator that only compares structurally.
    #[must_use]
    pub fn strict() -> Self {
        Self { rules: Vec::new() }
    }

    #[must_use]
    pub fn with_rule(mut self, rule: EquivalenceRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }

    /// Compares `left` against `right`.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Unsupported`] as soon as an opaque value is
    /// reached; mismatches found before that point are discarded.
    pub fn compare<L, R>(&self, left: &L, right: &R) -> Result<Report, CompareError>
    where
        L: Inspect + ?Sized,
        R: Inspect + ?Sized,
    {
        let mut walk = Walk {
            rules: &self.rules,
            path: Path::default(),
            mismatches: Vec::new(),
        };
        walk.pair(left.shape(), right.shape())?;
        debug!(mismatches = walk.mismatches.len(), "comparison finished");
        Ok(Report::new(walk.mismatches))
    }

    /// Panics with the full report unless the values are equivalent.
    #[track_caller]
    pub fn assert_equivalent<L, R>(&self, left: &L, right: &R)
    where
        L: Inspect + ?Sized,
        R: Inspect + ?Sized,
    {
        match self.compare(left, right) {
            Ok(report) if report.is_equivalent() => {}
            Ok(report) => panic!("values are not equivalent: {report}"),
            Err(error) => panic!("comparison aborted: {error}"),
        }
    }
}

/// [`Comparator::assert_equivalent`] with the default rule table.
#[track_caller]
pub fn assert_equivalent<L, R>(left: &L, right: &R)
where
    L: Inspect + ?Sized,
    R: Inspect + ?Sized,
{
    Comparator::new().assert_equivalent(left, right);
}

#[derive(Debug, Clone)]
enum Segment {
    Index(usize),
    Field(&'static str),
    Key(MapKey),
}

#[derive(Debug, Default)]
struct Path(Vec<Segment>);

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Index(index) => write!(f, "[{index}]")?,
                Segment::Key(key) => write!(f, "[{key}]")?,
                Segment::Field(name) if position == 0 => f.write_str(name)?,
                Segment::Field(name) => write!(f, ".{name}")?,
            }
        }
        Ok(())
    }
}

struct Walk<'r> {
    rules: &'r [EquivalenceRule],
    path: Path,
    mismatches: Vec<Mismatch>,
}

impl Walk<'_> {
    fn mismatch(&mut self, kind: MismatchKind) {
        trace!(path = %self.path, %kind, "mismatch");
        self.mismatches.push(Mismatch {
            path: self.path.to_string(),
            kind,
        });
    }

    fn nested<'a>(
        &mut self,
        segment: Segment,
        left: Shape<'a>,
        right: Shape<'a>,
    ) -> Result<(), CompareError> {
        self.path.0.push(segment);
        let result = self.pair(left, right);
        self.path.0.pop();
        result
    }

    fn pair<'a>(&mut self, left: Shape<'a>, right: Shape<'a>) -> Result<(), CompareError> {
        for shape in [&left, &right] {
            if let Shape::Opaque(type_name) = shape {
                return Err(CompareError::Unsupported {
                    path: self.path.to_string(),
                    type_name: *type_name,
                });
            }
        }

        match (left, right) {
            (Shape::Absent, Shape::Absent) => Ok(()),
            (Shape::Absent, _) => {
                self.mismatch(MismatchKind::Presence { left_present: false });
                Ok(())
            }
            (_, Shape::Absent) => {
                self.mismatch(MismatchKind::Presence { left_present: true });
                Ok(())
            }
            (Shape::Indirect(left), Shape::Indirect(right)) => self.pair(left.shape(), right.shape()),
            (Shape::Indirect(left), right) => self.pair(left.shape(), right),
            (left, Shape::Indirect(right)) => self.pair(left, right.shape()),
            (left, right) => {
                for rule in self.rules {
                    if let Some(verdict) = (rule.check)(&left, &right) {
                        trace!(path = %self.path, rule = rule.name, "rule applied");
                        return match verdict {
                            Verdict::Equivalent => Ok(()),
                            Verdict::Descend(left, right) => self.pair(left, right),
                        };
                    }
                }
                self.structural(left, right)
            }
        }
    }

    fn structural<'a>(&mut self, left: Shape<'a>, right: Shape<'a>) -> Result<(), CompareError> {
        match (left, right) {
            (Shape::Seq(left), Shape::Seq(right)) => {
                if left.len() != right.len() {
                    self.mismatch(MismatchKind::Length {
                        left: left.len(),
                        right: right.len(),
                    });
                    return Ok(());
                }
                for (index, (left, right)) in left.into_iter().zip(right).enumerate() {
                    self.nested(Segment::Index(index), left.shape(), right.shape())?;
                }
                Ok(())
            }
            (Shape::Map(mut left), Shape::Map(mut right)) => {
                if left.len() != right.len() {
                    self.mismatch(MismatchKind::Length {
                        left: left.len(),
                        right: right.len(),
                    });
                    return Ok(());
                }
                left.sort_by(|a, b| a.0.cmp(&b.0));
                right.sort_by(|a, b| a.0.cmp(&b.0));
                for ((left_key, left), (right_key, right)) in left.into_iter().zip(right) {
                    trace!(path = %self.path, key = %left_key, "map entry");
                    if left_key == right_key {
                        self.nested(Segment::Key(left_key), left.shape(), right.shape())?;
                    } else {
                        self.path.0.push(Segment::Key(left_key.clone()));
                        self.mismatch(MismatchKind::Key {
                            left: left_key,
                            right: right_key,
                        });
                        self.path.0.pop();
                    }
                }
                Ok(())
            }
            (Shape::Record(left), Shape::Record(mut right)) => {
                trace!(
                    path = %self.path,
                    left = left.type_name,
                    right = right.type_name,
                    fields = left.fields.len(),
                    "record"
                );
                if left.fields.len() != right.fields.len() {
                    self.mismatch(MismatchKind::FieldCount {
                        left_type: left.type_name,
                        right_type: right.type_name,
                        left: left.fields.len(),
                        right: right.fields.len(),
                    });
                    return Ok(());
                }
                for field in left.fields {
                    let position = right.fields.iter().position(|other| other.name == field.name);
                    match position {
                        Some(position) => {
                            let other = right.fields.swap_remove(position);
                            self.nested(Segment::Field(field.name), field.value, other.value)?;
                        }
                        None => self.mismatch(MismatchKind::MissingField {
                            field: field.name,
                            right_type: right.type_name,
                        }),
                    }
                }
                Ok(())
            }
            (left, right) => {
                if !scalars_equal(&left, &right) {
                    let kind = if same_family(&left, &right) {
                        MismatchKind::Value {
                            left: render(&left),
                            right: render(&right),
                        }
                    } else {
                        MismatchKind::Kind {
                            left: left.kind(),
                            right: right.kind(),
                        }
                    };
                    self.mismatch(kind);
                }
                Ok(())
            }
        }
    }
}

/// Floats compare with `==`, so a NaN never matches anything.
fn scalars_equal(left: &Shape<'_>, right: &Shape<'_>) -> bool {
    match (left, right) {
        (Shape::Int(a), Shape::Int(b)) => a == b,
        (Shape::Uint(a), Shape::Uint(b)) => a == b,
        (Shape::Int(a), Shape::Uint(b)) | (Shape::Uint(b), Shape::Int(a)) => {
            u64::try_from(*a).is_ok_and(|a| a == *b)
        }
        (Shape::Float(a), Shape::Float(b)) => a == b,
        (Shape::Str(a), Shape::Str(b)) => a == b,
        (Shape::Bool(a), Shape::Bool(b)) => a == b,
        _ => false,
    }
}

/// Both sides are scalars of compatible kinds, so a difference is one of value.
fn same_family(left: &Shape<'_>, right: &Shape<'_>) -> bool {
    matches!(
        (left, right),
        (Shape::Int(_) | Shape::Uint(_), Shape::Int(_) | Shape::Uint(_))
            | (Shape::Float(_), Shape::Float(_))
            | (Shape::Str(_), Shape::Str(_))
            | (Shape::Bool(_), Shape::Bool(_))
    )
}

fn render(shape: &Shape<'_>) -> String {
    match shape {
        Shape::Int(value) => value.to_string(),
        Shape::Uint(value) => value.to_string(),
        Shape::Float(value) => value.to_string(),
        Shape::Str(value) => format!("{value:?}"),
        Shape::Bool(value) => value.to_string(),
        other => other.kind().to_owned(),
    }
}

//! Pairings of differently shaped values that still count as equivalent.

use crate::shape::{Record, Shape};

pub enum Verdict<'a> {
    /// The pair is equivalent; nothing below it is compared.
    Equivalent,
    /// Compare this pair instead of the original one.
    Descend(Shape<'a>, Shape<'a>),
}

/// A named predicate consulted before structural comparison. The first rule
/// that returns a verdict decides how the pair is handled.
#[derive(Clone, Copy)]
pub struct EquivalenceRule {
    pub name: &'static str,
    pub check: for<'a> fn(&Shape<'a>, &Shape<'a>) -> Option<Verdict<'a>>,
}

impl EquivalenceRule {
    #[must_use]
    pub const fn new(
        name: &'static str,
        check: for<'a> fn(&Shape<'a>, &Shape<'a>) -> Option<Verdict<'a>>,
    ) -> Self {
        Self { name, check }
    }
}

impl std::fmt::Debug for EquivalenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("EquivalenceRule").field(&self.name).finish()
    }
}

pub const WRAPPED_MAP: EquivalenceRule = EquivalenceRule::new("wrapped-map", wrapped_map);
pub const WRAPPED_SEQ: EquivalenceRule = EquivalenceRule::new("wrapped-seq", wrapped_seq);
pub const INSTANT_AS_INT: EquivalenceRule = EquivalenceRule::new("instant-as-int", instant_as_int);
pub const CALENDAR_AS_TEXT: EquivalenceRule =
    EquivalenceRule::new("calendar-as-text", calendar_as_text);
pub const CURRENCY_AS_ENUM: EquivalenceRule =
    EquivalenceRule::new("currency-as-enum", currency_as_enum);
pub const TRI_STATE_BOOL: EquivalenceRule = EquivalenceRule::new("tri-state-bool", tri_state_bool);

#[must_use]
pub fn default_rules() -> Vec<EquivalenceRule> {
    vec![
        WRAPPED_MAP,
        WRAPPED_SEQ,
        INSTANT_AS_INT,
        CALENDAR_AS_TEXT,
        CURRENCY_AS_ENUM,
        TRI_STATE_BOOL,
    ]
}

fn record_named<'s, 'a>(shape: &'s Shape<'a>, names: &[&str]) -> Option<&'s Record<'a>> {
    match shape {
        Shape::Record(record) if names.contains(&record.type_name) => Some(record),
        _ => None,
    }
}

/// Either order of `left`/`right` satisfies `matches`.
fn either(left: &Shape<'_>, right: &Shape<'_>, matches: fn(&Shape<'_>, &Shape<'_>) -> bool) -> bool {
    matches(left, right) || matches(right, left)
}

fn wrapper_descend<'a>(
    left: &Shape<'a>,
    right: &Shape<'a>,
    is_collection: fn(&Shape<'a>) -> bool,
) -> Option<Verdict<'a>> {
    match (left, right) {
        (collection, Shape::Record(wrapper)) if is_collection(collection) => wrapper
            .single_field()
            .map(|field| Verdict::Descend(collection.clone(), field.value.clone())),
        (Shape::Record(wrapper), collection) if is_collection(collection) => wrapper
            .single_field()
            .map(|field| Verdict::Descend(field.value.clone(), collection.clone())),
        _ => None,
    }
}

/// A map against a record whose only field holds the map.
fn wrapped_map<'a>(left: &Shape<'a>, right: &Shape<'a>) -> Option<Verdict<'a>> {
    wrapper_descend(left, right, |shape| matches!(shape, Shape::Map(_)))
}

/// A sequence against a record whose only field holds the sequence.
fn wrapped_seq<'a>(left: &Shape<'a>, right: &Shape<'a>) -> Option<Verdict<'a>> {
    wrapper_descend(left, right, |shape| matches!(shape, Shape::Seq(_)))
}

/// An instant on one side and its integer encoding on the other.
fn instant_as_int<'a>(left: &Shape<'a>, right: &Shape<'a>) -> Option<Verdict<'a>> {
    either(left, right, |instant, int| {
        record_named(instant, &["Time", "Timestamp"]).is_some()
            && matches!(int, Shape::Int(_) | Shape::Uint(_))
    })
    .then_some(Verdict::Equivalent)
}

/// A date or date-time on one side and its text rendering on the other.
fn calendar_as_text<'a>(left: &Shape<'a>, right: &Shape<'a>) -> Option<Verdict<'a>> {
    either(left, right, |calendar, text| {
        record_named(calendar, &["Date", "DateTime"]).is_some() && matches!(text, Shape::Str(_))
    })
    .then_some(Verdict::Equivalent)
}

/// A currency code on one side and the currency enumeration on the other.
fn currency_as_enum<'a>(left: &Shape<'a>, right: &Shape<'a>) -> Option<Verdict<'a>> {
    either(left, right, |code, int| {
        record_named(code, &["Code"]).is_some() && matches!(int, Shape::Int(_))
    })
    .then_some(Verdict::Equivalent)
}

/// The nullable boolean against its message form.
fn tri_state_bool<'a>(left: &Shape<'a>, right: &Shape<'a>) -> Option<Verdict<'a>> {
    either(left, right, |pointer, message| {
        record_named(pointer, &["PointerBool"]).is_some()
            && record_named(message, &["OptBool"]).is_some()
    })
    .then_some(Verdict::Equivalent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Field;

    fn record<'a>(type_name: &'static str, fields: Vec<Field<'a>>) -> Shape<'a> {
        Shape::Record(Record::new(type_name, fields))
    }

    #[test]
    fn instant_rule_is_symmetric() {
        let time = record("Time", Vec::new());
        let int = Shape::Int(1_671_771_084_000);
        assert!(matches!((INSTANT_AS_INT.check)(&time, &int), Some(Verdict::Equivalent)));
        assert!(matches!((INSTANT_AS_INT.check)(&int, &time), Some(Verdict::Equivalent)));
        assert!((INSTANT_AS_INT.check)(&time, &Shape::Str("x")).is_none());
    }

    #[test]
    fn wrapper_rule_needs_exactly_one_field() {
        let list = Vec::<u32>::new();
        let seq = crate::Inspect::shape(&list);
        let wrapper = record(
            "Proposals",
            vec![Field {
                name: "proposals",
                value: Shape::Seq(Vec::new()),
            }],
        );
        assert!(matches!((WRAPPED_SEQ.check)(&seq, &wrapper), Some(Verdict::Descend(..))));

        let two_fields = record(
            "Pair",
            vec![
                Field { name: "a", value: Shape::Int(1) },
                Field { name: "b", value: Shape::Int(2) },
            ],
        );
        assert!((WRAPPED_SEQ.check)(&seq, &two_fields).is_none());
    }

    #[test]
    fn unrelated_records_are_left_alone() {
        let left = record("PointerBool", Vec::new());
        let right = record("Colors", Vec::new());
        for rule in default_rules() {
            assert!((rule.check)(&left, &right).is_none(), "{} fired", rule.name);
        }
    }
}

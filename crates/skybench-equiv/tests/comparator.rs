use std::collections::{BTreeMap, HashMap};

use skybench_equiv::{
    assert_equivalent, inspect_record, Comparator, CompareError, EquivalenceRule, Inspect,
    MismatchKind, Shape, Verdict,
};

struct Listing {
    id: u32,
    name: String,
    tags: Vec<String>,
    scores: HashMap<String, f64>,
    nested: Inner,
}

struct ListingMessage {
    id: i64,
    name: String,
    tags: Vec<String>,
    scores: BTreeMap<String, f64>,
    nested: Option<Inner>,
}

struct Inner {
    value: i32,
}

struct Short {
    id: u32,
}

struct Renamed {
    id: i64,
    title: String,
    tags: Vec<String>,
    scores: BTreeMap<String, f64>,
    nested: Option<Inner>,
}

struct Handle;

impl Inspect for Handle {
    fn shape(&self) -> Shape<'_> {
        Shape::Opaque("Handle")
    }
}

struct WithHandle {
    id: u32,
    handle: Handle,
}

struct Wrapper {
    items: Vec<u32>,
}

struct Flag {
    enabled: String,
}

struct FlagMessage {
    enabled: bool,
}

inspect_record! {
    Listing as "Listing" { id, name, tags, scores, nested }
    ListingMessage as "ListingMessage" { id, name, tags, scores, nested }
    Inner as "Inner" { value }
    Short as "Short" { id }
    Renamed as "Renamed" { id, title as "name_v2", tags, scores, nested }
    WithHandle as "WithHandle" { id, handle }
    Wrapper as "Wrapper" { items }
    Flag as "Flag" { enabled }
    FlagMessage as "FlagMessage" { enabled }
}

fn listing() -> Listing {
    let mut scores = HashMap::new();
    for (key, score) in [("c", 3.0), ("a", 1.0), ("b", 2.0)] {
        scores.insert(key.to_owned(), score);
    }
    Listing {
        id: 5,
        name: "five".to_owned(),
        tags: vec!["x".to_owned(), "y".to_owned()],
        scores,
        nested: Inner { value: 9 },
    }
}

fn message() -> ListingMessage {
    let scores = [("a", 1.0), ("b", 2.0), ("c", 3.0)]
        .into_iter()
        .map(|(key, score)| (key.to_owned(), score))
        .collect();
    ListingMessage {
        id: 5,
        name: "five".to_owned(),
        tags: vec!["x".to_owned(), "y".to_owned()],
        scores,
        nested: Some(Inner { value: 9 }),
    }
}

#[test]
fn containers_and_integer_widths_do_not_matter() {
    assert_equivalent(&listing(), &message());
}

#[test]
fn unset_optional_is_reported_as_presence() {
    let right = ListingMessage {
        nested: None,
        ..message()
    };
    let report = Comparator::new().compare(&listing(), &right).expect("comparable");

    assert_eq!(report.mismatches().len(), 1);
    assert_eq!(
        report.at("nested").map(|m| &m.kind),
        Some(&MismatchKind::Presence { left_present: true })
    );
}

#[test]
fn sibling_mismatches_are_all_collected() {
    let right = ListingMessage {
        name: "six".to_owned(),
        tags: vec!["x".to_owned()],
        nested: Some(Inner { value: 10 }),
        ..message()
    };
    let report = Comparator::new().compare(&listing(), &right).expect("comparable");

    assert_eq!(report.mismatches().len(), 3);
    assert!(matches!(
        report.at("name").map(|m| &m.kind),
        Some(MismatchKind::Value { .. })
    ));
    assert_eq!(
        report.at("tags").map(|m| &m.kind),
        Some(&MismatchKind::Length { left: 2, right: 1 })
    );
    assert!(report.at("nested.value").is_some());
    assert!(report.to_string().starts_with("3 mismatch(es)"));
}

#[test]
fn differing_map_keys_are_reported_by_position() {
    let mut right = message();
    right.scores.remove("c");
    right.scores.insert("d".to_owned(), 3.0);

    let report = Comparator::new().compare(&listing(), &right).expect("comparable");
    let mismatch = report.at("scores[\"c\"]").expect("key mismatch");
    assert!(matches!(mismatch.kind, MismatchKind::Key { .. }));
}

#[test]
fn nan_scores_never_compare_equal() {
    let mut left = listing();
    left.scores.insert("a".to_owned(), f64::NAN);
    let mut right = message();
    right.scores.insert("a".to_owned(), f64::NAN);

    let report = Comparator::new().compare(&left, &right).expect("comparable");
    assert_eq!(report.mismatches().len(), 1);
    assert!(matches!(
        report.at("scores[\"a\"]").map(|m| &m.kind),
        Some(MismatchKind::Value { .. })
    ));
}

#[test]
fn field_count_and_names_must_line_up() {
    let comparator = Comparator::new();

    let report = comparator.compare(&listing(), &Short { id: 5 }).expect("comparable");
    assert!(matches!(
        report.at("<root>").map(|m| &m.kind),
        Some(MismatchKind::FieldCount { left: 5, right: 1, .. })
    ));

    let renamed = Renamed {
        id: 5,
        title: "five".to_owned(),
        tags: vec!["x".to_owned(), "y".to_owned()],
        scores: message().scores,
        nested: Some(Inner { value: 9 }),
    };
    let report = comparator.compare(&listing(), &renamed).expect("comparable");
    assert_eq!(
        report.at("<root>").map(|m| &m.kind),
        Some(&MismatchKind::MissingField {
            field: "name",
            right_type: "Renamed",
        })
    );
}

#[test]
fn opaque_values_abort_the_walk() {
    let left = WithHandle { id: 1, handle: Handle };
    let right = WithHandle { id: 2, handle: Handle };

    let error = Comparator::new().compare(&left, &right).expect_err("opaque");
    let CompareError::Unsupported { path, type_name } = error;
    assert_eq!(type_name, "Handle");
    assert_eq!(path, "handle");
}

#[test]
fn wrapper_records_need_the_default_rules() {
    let items = vec![1_u32, 2, 3];
    let wrapper = Wrapper { items: vec![1, 2, 3] };

    let report = Comparator::new().compare(&items, &wrapper).expect("comparable");
    assert!(report.is_equivalent());

    let report = Comparator::strict().compare(&items, &wrapper).expect("comparable");
    assert_eq!(
        report.mismatches()[0].kind,
        MismatchKind::Kind {
            left: "sequence",
            right: "record",
        }
    );
}

fn yes_as_true<'a>(left: &Shape<'a>, right: &Shape<'a>) -> Option<Verdict<'a>> {
    match (left, right) {
        (Shape::Str("yes"), Shape::Bool(true)) | (Shape::Str("no"), Shape::Bool(false)) => {
            Some(Verdict::Equivalent)
        }
        _ => None,
    }
}

#[test]
fn custom_rules_extend_the_table() {
    let left = Flag {
        enabled: "yes".to_owned(),
    };
    let right = FlagMessage { enabled: true };

    assert!(!Comparator::new()
        .compare(&left, &right)
        .expect("comparable")
        .is_equivalent());

    let comparator = Comparator::new().with_rule(EquivalenceRule::new("yes-no", yes_as_true));
    assert!(comparator.rule_names().any(|name| name == "yes-no"));
    comparator.assert_equivalent(&left, &right);
}

#[test]
#[should_panic(expected = "values are not equivalent")]
fn assert_equivalent_panics_with_the_report() {
    let right = ListingMessage {
        id: 6,
        ..message()
    };
    assert_equivalent(&listing(), &right);
}

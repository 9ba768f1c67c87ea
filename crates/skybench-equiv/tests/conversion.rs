use skybench_convert::{large_response_to_proto, results_to_proto};
use skybench_equiv::{assert_equivalent, Comparator, MismatchKind};
use skybench_model::samples::{JsonLargeResponse, JsonObject};
use skybench_model::SearchResults;

const CHUNK: &str = r#"[{
    "chunk_id": "c1",
    "last_update_timestamp": 1671771084,
    "order": "fastest",
    "debug_info": {"server_name": "s1", "search_start_time": "2022-12-23T04:51:24.250Z"},
    "search_params": {"trip_class": "C", "passengers": {"adults": 2}},
    "agents": {"51": {"id": 51, "gate_name": "gate", "label": {"en": {"default": "Gate"}}}},
    "places": {"airports": {"SVO": {"code": "SVO", "has_transit_zone": null}}},
    "direct_flights": [{
        "carrier": "SU",
        "schedule": [[
            {"time": "10:00", "datetime": null},
            {"time": "12:30", "datetime": "2023-03-01T12:30:00"}
        ]]
    }],
    "tickets": [{
        "signature": "s1",
        "segments": [{"flights": [0, 1], "transfers": [{"visa_rules": {"required": true}}]}],
        "extra_fares": {"basic": [{"proposal_id": "p2", "index": 1}]},
        "proposals": [{
            "id": "p1",
            "agent_id": 51,
            "price": {"currency_code": "rub", "value": 12000.5},
            "flight_terms": {"0": {"fare_code": "Y1", "seats_available": 4, "baggage": {"count": 1, "weight": 23}}},
            "transfer_terms": [[{"is_virtual_interline": true}]],
            "options": {}
        }]
    }]
}]"#;

fn results() -> SearchResults {
    serde_json::from_str(CHUNK).expect("fixture should deserialize")
}

#[test]
fn converted_results_are_equivalent() {
    let results = results();
    assert_equivalent(&results, &results_to_proto(&results));
}

#[test]
fn changed_price_is_reported_with_its_path() {
    let results = results();
    let mut converted = results_to_proto(&results);
    if let Some(price) = converted.chunks[0].tickets[0].proposals[0].price.as_mut() {
        price.value = 1.0;
    }

    let report = Comparator::new()
        .compare(&results, &converted)
        .expect("comparable");
    assert_eq!(report.mismatches().len(), 1);
    let mismatch = report
        .at("[0].tickets[0].proposals[0].price.value")
        .expect("price mismatch");
    assert!(matches!(mismatch.kind, MismatchKind::Value { .. }));
}

#[test]
fn dropped_sub_message_is_a_presence_mismatch() {
    let results = results();
    let mut converted = results_to_proto(&results);
    converted.chunks[0].search_params = None;

    let report = Comparator::new()
        .compare(&results, &converted)
        .expect("comparable");
    assert_eq!(
        report.at("[0].search_params").map(|m| &m.kind),
        Some(&MismatchKind::Presence { left_present: true })
    );
}

#[test]
fn schedule_datetime_presence_is_checked() {
    let results = results();
    let mut converted = results_to_proto(&results);
    converted.chunks[0].direct_flights[0].schedule[0].list[0].datetime =
        Some("2023-03-01T10:00:00".to_owned());

    let report = Comparator::new()
        .compare(&results, &converted)
        .expect("comparable");
    assert!(report
        .at("[0].direct_flights[0].schedule[0][0].datetime")
        .is_some());
}

#[test]
fn sample_objects_match_their_messages() {
    let response = JsonLargeResponse {
        data: vec![
            JsonObject {
                id: 15123,
                price: 0.412,
                datetime: Some(1_671_771_084),
                data: "abcdefghij".to_owned(),
            },
            JsonObject::default(),
        ],
    };
    assert_equivalent(&response, &large_response_to_proto(&response));
}

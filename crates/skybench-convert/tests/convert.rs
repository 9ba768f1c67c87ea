use skybench_convert::{large_response_to_proto, object_to_proto, results_to_proto};
use skybench_model::samples::{JsonLargeResponse, JsonObject};
use skybench_model::{Chunk, SearchResults};
use skybench_proto::{Currency, Order, TripClass};

fn parse(json: &str) -> SearchResults {
    serde_json::from_str(json).expect("fixture should deserialize")
}

#[test]
fn empty_chunk_keeps_optional_records_unset() {
    let converted = results_to_proto(&vec![Chunk::default()]);
    let chunk = &converted.chunks[0];

    assert!(chunk.debug_info.is_none());
    assert!(chunk.soft_tickets.is_none());
    assert!(chunk.brand_ticket.is_none());
    assert!(chunk.cheapest_ticket.is_none());
    assert!(chunk.degraded_filter_boundaries.is_none());
    assert!(chunk.filter_boundaries.is_none());
    assert!(chunk.filter_state.is_none());
    assert!(chunk.tickets.is_empty());

    // Non-optional domain records always produce a sub-message.
    assert!(chunk.places.is_some());
    assert!(chunk.search_params.is_some());
    assert!(chunk.meta.is_some());
}

#[test]
fn identifiers_and_codes_are_mapped() {
    let results = parse(
        r#"[{
            "chunk_id": "c1",
            "order": "fastest",
            "search_params": {"trip_class": "C", "passengers": {"adults": 2}},
            "agents": {"51": {"id": 51, "gate_name": "gate", "label": {"en": {"default": "Gate"}}}},
            "tickets": [{
                "signature": "s1",
                "segments": [{"flights": [0, 1]}],
                "proposals": [{
                    "id": "p1",
                    "agent_id": 51,
                    "price": {"currency_code": "rub", "value": 12000.5},
                    "flight_terms": {"0": {"fare_code": "Y1", "seats_available": 4, "baggage": {"count": 1, "weight": 23}}},
                    "transfer_terms": [[{"is_virtual_interline": true}]],
                    "options": {}
                }]
            }]
        }]"#,
    );

    let converted = results_to_proto(&results);
    let chunk = &converted.chunks[0];
    assert_eq!(chunk.chunk_id, "c1");
    assert_eq!(chunk.order(), Order::Fastest);

    let params = chunk.search_params.as_ref().expect("search params");
    assert_eq!(params.trip_class(), TripClass::Business);
    assert_eq!(params.passengers.as_ref().map(|p| p.adults), Some(2));

    let agent = &chunk.agents[&51];
    assert_eq!(agent.id, 51);
    assert_eq!(agent.label["en"].map["default"], "Gate");

    let ticket = &chunk.tickets[0];
    assert_eq!(ticket.segments[0].flights, vec![0, 1]);

    let proposal = &ticket.proposals[0];
    assert_eq!(proposal.agent_id, 51);
    let price = proposal.price.as_ref().expect("price");
    assert_eq!(price.currency_code(), Currency::Rub);
    assert_eq!(price.value, 12000.5);

    let term = &proposal.flight_terms[&0];
    assert_eq!(term.seats_available, 4);
    assert_eq!(term.baggage.as_ref().map(|b| b.count), Some(1));
    assert!(term.handbags.is_none());
    assert!(proposal.transfer_terms[0].terms[0].is_virtual_interline);

    let options = proposal.options.as_ref().expect("options present");
    assert!(options.hotel.is_none());
}

#[test]
fn null_schedule_datetime_stays_unset() {
    let results = parse(
        r#"[{
            "direct_flights": [{
                "carrier": "SU",
                "schedule": [[
                    {"time": "10:00", "datetime": null},
                    {"time": "12:30", "datetime": "2023-03-01T12:30:00"}
                ]]
            }]
        }]"#,
    );

    let converted = results_to_proto(&results);
    let schedule = &converted.chunks[0].direct_flights[0].schedule[0].list;
    assert_eq!(schedule[0].datetime, None);
    assert_eq!(schedule[1].datetime.as_deref(), Some("2023-03-01T12:30:00"));
}

#[test]
fn debug_start_time_is_unix_millis() {
    let results = parse(
        r#"[{"debug_info": {"server_name": "s", "search_start_time": "2022-12-23T04:51:24.250Z"}}]"#,
    );
    let converted = results_to_proto(&results);
    let debug = converted.chunks[0].debug_info.as_ref().expect("debug info");
    assert_eq!(debug.search_start_time, 1_671_771_084_250);
}

#[test]
fn localized_names_become_nested_maps() {
    let results = parse(
        r#"[{"places": {"airports": {"SVO": {
            "code": "SVO",
            "name": {"ru": {"default": "Шереметьево", "su": "в Шереметьево"}},
            "has_transit_zone": null
        }}}}]"#,
    );
    let converted = results_to_proto(&results);
    let places = converted.chunks[0].places.as_ref().expect("places");
    let airport = &places.airports["SVO"];
    assert_eq!(airport.name["ru"].map.len(), 2);
    let transit = airport.has_transit_zone.as_ref().expect("tri-state flag");
    assert!(transit.is_unknown);
}

#[test]
fn sample_object_without_datetime_leaves_it_unset() {
    let object = JsonObject {
        id: 7,
        price: 1.5,
        datetime: None,
        data: "abc".to_owned(),
    };
    let converted = object_to_proto(&object);
    assert_eq!(converted.id, 7);
    assert!(converted.datetime.is_none());

    let dated = object_to_proto(&JsonObject {
        datetime: Some(1_671_771_084),
        ..object
    });
    assert_eq!(dated.datetime.map(|at| at.seconds), Some(1_671_771_084));

    let response = large_response_to_proto(&JsonLargeResponse {
        data: vec![JsonObject::default(); 3],
    });
    assert_eq!(response.data.len(), 3);
}

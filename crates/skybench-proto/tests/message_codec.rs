use std::collections::HashMap;

use skybench_proto::samples::{LargeResponse, LongString, Object, SimpleObject};
use skybench_proto::{
    decode_message, encode_message, Amount, Chunk, Currency, OptBool, Order, PooledCodec,
    Proposal, Schedule, ScheduleList, SearchResults, Ticket,
};

fn search_results() -> SearchResults {
    let proposal = Proposal {
        id: "p-1".to_owned(),
        price: Some(Amount {
            currency_code: Currency::Rub.into(),
            value: 10_250.0,
        }),
        agent_id: 51,
        ..Proposal::default()
    };
    let ticket = Ticket {
        signature: "sig-1".to_owned(),
        proposals: vec![proposal],
        hashsum: u64::MAX,
        ..Ticket::default()
    };

    let mut brand_tickets = HashMap::new();
    brand_tickets.insert(7, ticket.clone());

    SearchResults {
        chunks: vec![Chunk {
            chunk_id: "chunk-1".to_owned(),
            tickets: vec![ticket],
            brand_tickets,
            order: Order::Fastest.into(),
            ..Chunk::default()
        }],
    }
}

#[test]
fn search_results_round_trip_is_deterministic() {
    let message = search_results();
    let encoded_once = encode_message(&message).expect("encoding should succeed");
    let encoded_twice = encode_message(&message).expect("encoding should succeed");
    assert_eq!(encoded_once, encoded_twice);

    let decoded: SearchResults = decode_message(&encoded_once).expect("decoding should succeed");
    assert_eq!(decoded, message);
    assert_eq!(decoded.chunks[0].order(), Order::Fastest);
    assert_eq!(decoded.chunks[0].tickets[0].hashsum, u64::MAX);
}

#[test]
fn pooled_codec_matches_plain_encoding() {
    let message = search_results();
    let plain = encode_message(&message).expect("plain encoding");

    let mut codec = PooledCodec::<SearchResults>::with_capacity(64);
    for _ in 0..3 {
        let pooled = codec.encode(&message).expect("pooled encoding");
        assert_eq!(pooled, plain.as_slice());
    }

    let decoded = codec.decode(&plain).expect("pooled decoding");
    assert_eq!(decoded, &message);
}

#[test]
fn unset_sub_messages_stay_unset() {
    let message = SimpleObject {
        id: 111,
        nested: None,
        children: Vec::new(),
        ..SimpleObject::default()
    };
    let decoded: SimpleObject =
        decode_message(&encode_message(&message).expect("encode")).expect("decode");

    assert_eq!(decoded.id, 111);
    assert!(decoded.nested.is_none());
    assert!(decoded.children.is_empty());
}

#[test]
fn optional_string_distinguishes_unset_from_empty() {
    let list = ScheduleList {
        list: vec![
            Schedule {
                time: "10:00".to_owned(),
                datetime: None,
                ..Schedule::default()
            },
            Schedule {
                time: "12:00".to_owned(),
                datetime: Some(String::new()),
                ..Schedule::default()
            },
        ],
    };
    let decoded: ScheduleList =
        decode_message(&encode_message(&list).expect("encode")).expect("decode");

    assert_eq!(decoded.list[0].datetime, None);
    assert_eq!(decoded.list[1].datetime.as_deref(), Some(""));
}

#[test]
fn default_messages_encode_to_nothing() {
    assert!(encode_message(&Chunk::default()).expect("encode").is_empty());
    assert!(encode_message(&OptBool::default()).expect("encode").is_empty());
}

#[test]
fn sample_messages_round_trip() {
    let long = LongString {
        payload: "x".repeat(5000),
    };
    let decoded: LongString = decode_message(&encode_message(&long).expect("encode")).expect("decode");
    assert_eq!(decoded.payload.len(), 5000);

    let large = LargeResponse {
        data: (0..100)
            .map(|index| Object {
                id: index,
                price: index as f32 * 0.32,
                datetime: Some(prost_types::Timestamp {
                    seconds: 1_671_771_084,
                    nanos: 0,
                }),
                data: "payload".to_owned(),
            })
            .collect(),
    };
    let decoded: LargeResponse =
        decode_message(&encode_message(&large).expect("encode")).expect("decode");
    assert_eq!(decoded.data.len(), 100);
    assert_eq!(decoded, large);
}

#[test]
fn garbage_is_rejected() {
    let error = decode_message::<SearchResults>(&[0xFF, 0xFF, 0xFF]).expect_err("invalid input");
    assert!(matches!(error, skybench_proto::ProtoError::Decode(_)));
}

use skybench_codec::{
    compress, decode_fast_json_copy, decode_json, decompress, encode_fast_json, encode_json,
    GzipLevel,
};
use skybench_model::samples::{JsonLargeResponse, JsonObject};
use skybench_model::SearchResults;

const RESULTS: &str = r#"[{
    "chunk_id": "c1",
    "order": "cheapest",
    "agents": {"51": {"id": 51, "gate_name": "gate"}},
    "direct_flights": [{"carrier": "SU", "schedule": [[{"time": "10:00", "datetime": null}]]}],
    "tickets": [{
        "signature": "s1",
        "segments": [{"flights": [0]}],
        "proposals": [{"id": "p1", "agent_id": 51, "price": {"currency_code": "RUB", "value": 12000.5}}]
    }]
}]"#;

#[test]
fn both_json_decoders_read_search_results() {
    let standard: SearchResults = decode_json(RESULTS.as_bytes()).expect("serde_json decode");
    let fast: SearchResults = decode_fast_json_copy(RESULTS.as_bytes()).expect("simd-json decode");
    assert_eq!(standard, fast);
    assert_eq!(standard[0].tickets[0].proposals[0].agent_id.get(), 51);
}

#[test]
fn each_encoder_output_decodes_with_either_decoder() {
    let results: SearchResults = decode_json(RESULTS.as_bytes()).expect("decode");

    for encoded in [
        encode_json(&results).expect("json"),
        encode_fast_json(&results).expect("fast json"),
    ] {
        let via_standard: SearchResults = decode_json(&encoded).expect("serde_json decode");
        let via_fast: SearchResults = decode_fast_json_copy(&encoded).expect("simd-json decode");
        assert_eq!(via_standard, results);
        assert_eq!(via_fast, results);
    }
}

#[test]
fn sample_objects_survive_compression() {
    let response = JsonLargeResponse {
        data: (1..=150)
            .map(|id| JsonObject {
                id,
                price: 0.5,
                datetime: Some(1_671_771_084),
                data: "abcdefghij".to_owned(),
            })
            .collect(),
    };
    let encoded = encode_json(&response).expect("encode");
    let compressed = compress(&encoded, GzipLevel::Default).expect("compress");
    let restored = decompress(&compressed).expect("decompress");
    let decoded: JsonLargeResponse = decode_json(&restored).expect("decode");
    assert_eq!(decoded, response);
}

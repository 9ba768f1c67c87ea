use skybench::config::{HarnessConfig, SampleConfig, CONFIG_ENV};
use skybench::fixture::parse_results;
use skybench::prelude::*;

fn small_config() -> HarnessConfig {
    HarnessConfig {
        samples: SampleConfig {
            long_string_len: 64,
            objects_count: 8,
            large_objects_count: 12,
            seed: Some(7),
        },
        ..HarnessConfig::default()
    }
}

fn harness() -> Harness {
    Harness::new(small_config()).expect("harness")
}

#[test]
fn embedded_fixture_converts_equivalently() {
    let harness = harness();
    let report = harness.verify_equivalence().expect("comparable");
    assert!(report.is_equivalent(), "{report}");
    assert_eq!(harness.results().domain.len(), 3);
}

#[test]
fn every_encoding_round_trips_the_fixture() {
    let mut harness = harness();
    for encoding in Encoding::ALL {
        let len = harness
            .results_mut()
            .round_trip(encoding)
            .unwrap_or_else(|error| panic!("{encoding}: {error}"));
        assert!(len > 0);
    }
}

#[test]
fn decoded_proto_stays_equivalent_to_the_fixture() {
    let harness = harness();
    let results = harness.results();
    let bytes = encode_message(&results.message).expect("proto");

    let decoded: skybench_proto::SearchResults = decode_message(&bytes).expect("decode");
    assert_eq!(decoded, results.message);
    assert_equivalent(&results.domain, &decoded);

    let mut pooled = PooledCodec::<skybench_proto::SearchResults>::new();
    let reused = pooled.decode(&bytes).expect("pooled decode");
    assert_eq!(reused, &results.message);
    assert_equivalent(&results.domain, reused);
}

#[test]
fn pooled_encoding_matches_the_plain_encoder() {
    let mut harness = harness();
    let plain = encode_message(&harness.results().message).expect("proto");
    for _ in 0..3 {
        let pooled = harness
            .results_mut()
            .encode(Encoding::PooledProto)
            .expect("pooled");
        assert_eq!(pooled, plain);
    }
}

#[test]
fn sample_payloads_round_trip() {
    let mut harness = harness();
    let samples = harness.samples_mut();
    for encoding in Encoding::ALL {
        samples.object.round_trip(encoding).expect("object");
        samples.long_string.round_trip(encoding).expect("long string");
        samples.large_response.round_trip(encoding).expect("large response");
    }
    assert_equivalent(&samples.response.domain, &samples.response.message);
}

#[test]
fn size_reports_cover_every_payload_and_level() {
    let mut harness = harness();
    let reports = harness.size_reports().expect("sizes");
    let labels: Vec<_> = reports.iter().map(|report| report.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "search_results",
            "long_string",
            "response",
            "object",
            "large_response",
            "simple_object"
        ]
    );

    let results = &reports[0];
    for encoding in Encoding::ALL {
        let entry = results.entry(encoding).expect("entry per encoding");
        assert!(entry.raw > 0);
        for level in GzipLevel::ALL {
            assert!(entry.gzip_len(level).is_some(), "{encoding} {level}");
        }
    }
    let json = results.entry(Encoding::Json).expect("json");
    let proto = results.entry(Encoding::Proto).expect("proto");
    assert!(proto.raw < json.raw);

    assert_eq!(reports[5].entries.len(), 2);
}

#[test]
fn configured_levels_limit_the_gzip_columns() {
    let mut harness = Harness::new(HarnessConfig {
        gzip_levels: vec![GzipLevel::Best],
        ..small_config()
    })
    .expect("harness");
    for report in harness.size_reports().expect("sizes") {
        for entry in &report.entries {
            assert_eq!(entry.gzip.len(), 1);
            assert_eq!(entry.gzip[0].0, GzipLevel::Best);
        }
    }
}

#[test]
fn empty_chunks_are_accepted() {
    let results = parse_results(b"[{}]").expect("empty chunk");
    let message = results_to_proto(&results);
    assert_eq!(message.chunks.len(), 1);
    assert_equivalent(&results, &message);
}

#[test]
fn null_collections_in_a_dump_read_as_empty() {
    let dump = br#"[{
        "chunk_id": "c",
        "agents": null,
        "airlines": null,
        "tickets": [{
            "signature": "s",
            "proposals": null,
            "badges": null,
            "tags": null,
            "segments": [{"flights": null, "transfers": null, "tags": null}]
        }]
    }]"#;
    let results = parse_results(dump).expect("nulls accepted");
    let chunk = &results[0];
    assert!(chunk.agents.is_empty());
    assert!(chunk.tickets[0].tags.is_empty());
    assert!(chunk.tickets[0].segments[0].tags.is_empty());

    let message = results_to_proto(&results);
    assert_equivalent(&results, &message);
}

#[test]
fn invalid_config_is_rejected_before_loading() {
    let error = Harness::new(HarnessConfig {
        gzip_levels: Vec::new(),
        ..HarnessConfig::default()
    })
    .expect_err("no levels");
    assert!(matches!(error, SkybenchError::Config(_)));
}

#[test]
fn configuration_is_read_from_the_environment() {
    let path = std::env::temp_dir().join(format!("skybench-config-{}.yaml", std::process::id()));
    std::fs::write(&path, "samples:\n  seed: 11\n  objects_count: 4\ngzip_levels: [fastest]\n")
        .expect("write config");

    std::env::set_var(CONFIG_ENV, &path);
    let loaded = HarnessConfig::from_env();
    std::env::remove_var(CONFIG_ENV);
    std::fs::remove_file(&path).expect("remove config");

    let config = loaded.expect("config from env");
    assert_eq!(config.samples.seed, Some(11));
    assert_eq!(config.samples.objects_count, 4);
    assert_eq!(config.gzip_levels, vec![GzipLevel::Fastest]);
}

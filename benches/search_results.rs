use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use skybench::fixture::embedded_results;
use skybench::prelude::*;
use skybench_codec::{decode_fast_json, decode_json, encode_fast_json, encode_json};

fn bench_search_results(criterion: &mut Criterion) {
    let results = embedded_results().expect("embedded fixture");
    let message = results_to_proto(&results);
    let json = encode_json(&results).expect("json");
    let proto = encode_message(&message).expect("proto");
    let mut pooled = PooledCodec::with_capacity(proto.len());

    let mut group = criterion.benchmark_group("search_results");

    group.bench_function("json_marshal", |bench| {
        bench.iter(|| black_box(encode_json(black_box(&results)).expect("encode")));
    });
    group.bench_function("json_unmarshal", |bench| {
        bench.iter(|| {
            let decoded: SearchResults = decode_json(black_box(&json)).expect("decode");
            black_box(decoded);
        });
    });

    group.bench_function("fast_json_marshal", |bench| {
        bench.iter(|| black_box(encode_fast_json(black_box(&results)).expect("encode")));
    });
    group.bench_function("fast_json_unmarshal", |bench| {
        bench.iter_batched(
            || json.clone(),
            |mut buffer| {
                let decoded: SearchResults = decode_fast_json(&mut buffer).expect("decode");
                black_box(decoded);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("proto_marshal", |bench| {
        bench.iter(|| black_box(encode_message(black_box(&message)).expect("encode")));
    });
    group.bench_function("proto_unmarshal", |bench| {
        bench.iter(|| {
            let decoded: skybench_proto::SearchResults =
                decode_message(black_box(&proto)).expect("decode");
            black_box(decoded);
        });
    });

    group.bench_function("pooled_proto_marshal", |bench| {
        bench.iter(|| {
            black_box(pooled.encode(black_box(&message)).expect("encode"));
        });
    });
    group.bench_function("pooled_proto_unmarshal", |bench| {
        bench.iter(|| {
            black_box(pooled.decode(black_box(&proto)).expect("decode"));
        });
    });

    group.bench_function("convert_pooled_proto_gzip_default", |bench| {
        bench.iter(|| {
            let converted = results_to_proto(black_box(&results));
            let encoded = pooled.encode(&converted).expect("encode");
            black_box(compress(encoded, GzipLevel::Default).expect("gzip"));
        });
    });
    group.bench_function("pooled_proto_gzip_default", |bench| {
        bench.iter(|| {
            let encoded = pooled.encode(black_box(&message)).expect("encode");
            black_box(compress(encoded, GzipLevel::Default).expect("gzip"));
        });
    });
    group.bench_function("fast_json_gzip_default", |bench| {
        bench.iter(|| {
            let encoded = encode_fast_json(black_box(&results)).expect("encode");
            black_box(compress(&encoded, GzipLevel::Default).expect("gzip"));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_search_results);
criterion_main!(benches);

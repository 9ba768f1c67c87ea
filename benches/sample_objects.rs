use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use skybench::config::SampleConfig;
use skybench::prelude::*;
use skybench::samples::SampleSet;
use skybench_proto::samples::SimpleObject;
use skybench_codec::{decode_fast_json, decode_json, encode_fast_json, encode_json};

fn bench_payload<D, M>(criterion: &mut Criterion, name: &str, pair: &PayloadPair<D, M>)
where
    D: Serialize + DeserializeOwned,
    M: Message + Default,
{
    let json = encode_json(&pair.domain).expect("json");
    let proto = encode_message(&pair.message).expect("proto");
    let mut pooled = PooledCodec::<M>::with_capacity(proto.len());

    let mut group = criterion.benchmark_group(name);

    group.bench_function("json_marshal", |bench| {
        bench.iter(|| black_box(encode_json(black_box(&pair.domain)).expect("encode")));
    });
    group.bench_function("json_unmarshal", |bench| {
        bench.iter(|| black_box(decode_json::<D>(black_box(&json)).expect("decode")));
    });

    group.bench_function("fast_json_marshal", |bench| {
        bench.iter(|| black_box(encode_fast_json(black_box(&pair.domain)).expect("encode")));
    });
    group.bench_function("fast_json_unmarshal", |bench| {
        bench.iter_batched(
            || json.clone(),
            |mut buffer| black_box(decode_fast_json::<D>(&mut buffer).expect("decode")),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("proto_marshal", |bench| {
        bench.iter(|| black_box(encode_message(black_box(&pair.message)).expect("encode")));
    });
    group.bench_function("proto_unmarshal", |bench| {
        bench.iter(|| black_box(decode_message::<M>(black_box(&proto)).expect("decode")));
    });

    group.bench_function("pooled_proto_marshal", |bench| {
        bench.iter(|| {
            black_box(pooled.encode(black_box(&pair.message)).expect("encode"));
        });
    });
    group.bench_function("pooled_proto_unmarshal", |bench| {
        bench.iter(|| {
            black_box(pooled.decode(black_box(&proto)).expect("decode"));
        });
    });

    group.finish();
}

fn bench_simple_object(criterion: &mut Criterion, simple: &SimpleObject) {
    let proto = encode_message(simple).expect("proto");
    let mut pooled = PooledCodec::<SimpleObject>::new();

    let mut group = criterion.benchmark_group("simple_object");
    group.bench_function("proto_marshal", |bench| {
        bench.iter(|| black_box(encode_message(black_box(simple)).expect("encode")));
    });
    group.bench_function("proto_unmarshal", |bench| {
        bench.iter(|| black_box(decode_message::<SimpleObject>(black_box(&proto)).expect("decode")));
    });
    group.bench_function("pooled_proto_marshal", |bench| {
        bench.iter(|| {
            black_box(pooled.encode(black_box(simple)).expect("encode"));
        });
    });
    group.bench_function("pooled_proto_unmarshal", |bench| {
        bench.iter(|| {
            black_box(pooled.decode(black_box(&proto)).expect("decode"));
        });
    });
    group.finish();
}

fn bench_sample_objects(criterion: &mut Criterion) {
    let samples = SampleSet::generate(&SampleConfig {
        seed: Some(0x5eed),
        ..SampleConfig::default()
    });

    bench_payload(criterion, "object", &samples.object);
    bench_payload(criterion, "long_string", &samples.long_string);
    bench_payload(criterion, "large_response", &samples.large_response);
    bench_simple_object(criterion, &samples.simple);
}

criterion_group!(benches, bench_sample_objects);
criterion_main!(benches);

//! Generated sample payloads for the object-size study.

use chrono::Utc;
use rand::Rng;
use skybench_convert::{large_response_to_proto, long_string_to_proto, object_to_proto};
use skybench_model::samples::{JsonLargeResponse, JsonLongString, JsonObject};
use skybench_proto::samples::{LargeResponse, LongString, NestedObject, Object, SimpleObject};

use crate::config::SampleConfig;
use crate::payload::PayloadPair;
use crate::random::{random_string, sample_rng};

/// 2022-12-23T04:51:24Z.
pub const FIXED_OBJECT_DATETIME: i64 = 1_671_771_084;

/// Objects numbered from zero, priced `i * 0.32`, stamped with the current
/// time and carrying `count` random characters each.
pub fn gen_objects<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<JsonObject> {
    let now = Utc::now().timestamp();
    (0..count)
        .map(|index| {
            let id = i32::try_from(index).unwrap_or(i32::MAX);
            JsonObject {
                id,
                price: id as f32 * 0.32,
                datetime: Some(now),
                data: random_string(rng, count),
            }
        })
        .collect()
}

pub fn fixed_object<R: Rng + ?Sized>(rng: &mut R) -> JsonObject {
    JsonObject {
        id: 15123,
        price: 0.412,
        datetime: Some(FIXED_OBJECT_DATETIME),
        data: random_string(rng, 10),
    }
}

pub fn long_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> JsonLongString {
    JsonLongString {
        payload: random_string(rng, len),
    }
}

/// Message-only sample with every field kind populated.
#[must_use]
pub fn simple_object() -> SimpleObject {
    SimpleObject {
        id: 853_528,
        price: 416.765_145_4,
        count: 6_851_943,
        ratio: 97.000_004_32,
        label: "Hello World!".to_owned(),
        nested: Some(NestedObject {
            index: 666,
            amount: 999_999,
            tag: "Yes".to_owned(),
        }),
        children: vec![NestedObject {
            index: 333,
            amount: 666_666,
            tag: "No".to_owned(),
        }],
    }
}

/// Every sample payload, generated once per run.
#[derive(Debug)]
pub struct SampleSet {
    pub long_string: PayloadPair<JsonLongString, LongString>,
    pub response: PayloadPair<JsonLargeResponse, LargeResponse>,
    pub object: PayloadPair<JsonObject, Object>,
    pub large_response: PayloadPair<JsonLargeResponse, LargeResponse>,
    pub simple: SimpleObject,
}

impl SampleSet {
    pub fn generate(config: &SampleConfig) -> Self {
        let mut rng = sample_rng(config.seed);

        let long = long_string(&mut rng, config.long_string_len);
        let long_message = long_string_to_proto(&long);

        let response = JsonLargeResponse {
            data: gen_objects(&mut rng, config.objects_count),
        };
        let response_message = large_response_to_proto(&response);

        let object = fixed_object(&mut rng);
        let object_message = object_to_proto(&object);

        let large = JsonLargeResponse {
            data: gen_objects(&mut rng, config.large_objects_count),
        };
        let large_message = large_response_to_proto(&large);

        Self {
            long_string: PayloadPair::new(long, long_message),
            response: PayloadPair::new(response, response_message),
            object: PayloadPair::new(object, object_message),
            large_response: PayloadPair::new(large, large_message),
            simple: simple_object(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_objects_follow_the_pattern() {
        let objects = gen_objects(&mut sample_rng(Some(3)), 4);
        assert_eq!(objects.len(), 4);
        for (index, object) in objects.iter().enumerate() {
            assert_eq!(object.id as usize, index);
            assert_eq!(object.data.len(), 4);
            assert!(object.datetime.is_some());
        }
        assert_eq!(objects[2].price, 2.0_f32 * 0.32);
    }

    #[test]
    fn fixed_object_is_stable_apart_from_its_data() {
        let object = fixed_object(&mut sample_rng(None));
        assert_eq!(object.id, 15123);
        assert_eq!(object.datetime, Some(FIXED_OBJECT_DATETIME));
        assert_eq!(object.data.len(), 10);
    }

    #[test]
    fn sample_set_honours_the_configured_sizes() {
        let config = SampleConfig {
            long_string_len: 32,
            objects_count: 3,
            large_objects_count: 5,
            seed: Some(9),
        };
        let samples = SampleSet::generate(&config);
        assert_eq!(samples.long_string.domain.payload.len(), 32);
        assert_eq!(samples.response.message.data.len(), 3);
        assert_eq!(samples.large_response.domain.data.len(), 5);
        assert_eq!(samples.simple.children.len(), 1);
    }
}

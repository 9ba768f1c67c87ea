use skybench_model::samples as model;
use skybench_proto::samples as proto;

use crate::conv_vec;

#[must_use]
pub fn long_string_to_proto(value: &model::JsonLongString) -> proto::LongString {
    proto::LongString {
        payload: value.payload.clone(),
    }
}

/// Converts a sample object. A missing `datetime` stays unset.
#[must_use]
pub fn object_to_proto(object: &model::JsonObject) -> proto::Object {
    proto::Object {
        id: object.id,
        price: object.price,
        datetime: object.datetime.map(|seconds| prost_types::Timestamp { seconds, nanos: 0 }),
        data: object.data.clone(),
    }
}

#[must_use]
pub fn objects_to_proto(objects: &[model::JsonObject]) -> Vec<proto::Object> {
    conv_vec(objects, object_to_proto)
}

#[must_use]
pub fn large_response_to_proto(response: &model::JsonLargeResponse) -> proto::LargeResponse {
    proto::LargeResponse {
        data: objects_to_proto(&response.data),
    }
}

//! Small JSON payloads used by the object-size benchmarks.
//!
//! Empty fields are left out of the encoded form, so a default object
//! serialises to `{}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonLongString {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonObject {
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub id: i32,
    #[serde(skip_serializing_if = "is_zero_f32")]
    pub price: f32,
    /// Unix seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<i64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonLargeResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<JsonObject>,
}

fn is_zero_i32(value: &i32) -> bool {
    *value == 0
}

fn is_zero_f32(value: &f32) -> bool {
    *value == 0.0
}

#[cfg(test)]
mod tests {
    use super::{JsonLargeResponse, JsonObject};

    #[test]
    fn empty_fields_are_omitted() {
        assert_eq!(
            serde_json::to_string(&JsonObject::default()).expect("encode"),
            "{}"
        );
        assert_eq!(
            serde_json::to_string(&JsonLargeResponse::default()).expect("encode"),
            "{}"
        );
    }

    #[test]
    fn populated_object_keeps_field_names() {
        let object = JsonObject {
            id: 15123,
            price: 0.5,
            datetime: Some(1_671_771_084),
            data: "abc".to_owned(),
        };
        let encoded = serde_json::to_string(&object).expect("encode");
        assert_eq!(
            encoded,
            r#"{"id":15123,"price":0.5,"datetime":1671771084,"data":"abc"}"#
        );

        let decoded: JsonObject = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(decoded, object);
    }

    #[test]
    fn missing_datetime_decodes_as_none() {
        let decoded: JsonObject = serde_json::from_str(r#"{"id":1}"#).expect("decode");
        assert_eq!(decoded.datetime, None);
        assert!(decoded.data.is_empty());
    }
}

//! Small messages used by the object-size benchmarks.

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct LongString {
    #[prost(string, tag = "1")]
    pub payload: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct Object {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(float, tag = "2")]
    pub price: f32,
    #[prost(message, optional, tag = "3")]
    pub datetime: Option<::prost_types::Timestamp>,
    #[prost(string, tag = "4")]
    pub data: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct LargeResponse {
    #[prost(message, repeated, tag = "1")]
    pub data: Vec<Object>,
}

/// Message-only sample with an optional and a repeated sub-message.
#[derive(Clone, PartialEq, Message)]
pub struct SimpleObject {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(double, tag = "2")]
    pub price: f64,
    #[prost(int64, tag = "3")]
    pub count: i64,
    #[prost(double, tag = "4")]
    pub ratio: f64,
    #[prost(string, tag = "5")]
    pub label: String,
    #[prost(message, optional, tag = "6")]
    pub nested: Option<NestedObject>,
    #[prost(message, repeated, tag = "7")]
    pub children: Vec<NestedObject>,
}

#[derive(Clone, PartialEq, Message)]
pub struct NestedObject {
    #[prost(int32, tag = "1")]
    pub index: i32,
    #[prost(int64, tag = "2")]
    pub amount: i64,
    #[prost(string, tag = "3")]
    pub tag: String,
}

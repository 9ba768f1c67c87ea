use prost::Message;

use crate::EquipmentType;

#[derive(Clone, PartialEq, Message)]
pub struct FlightLeg {
    #[prost(string, tag = "1")]
    pub origin: String,
    #[prost(string, tag = "2")]
    pub destination: String,
    #[prost(string, tag = "3")]
    pub local_departure_date_time: String,
    #[prost(string, tag = "4")]
    pub local_arrival_date_time: String,
    #[prost(int64, tag = "5")]
    pub departure_unix_timestamp: i64,
    #[prost(int64, tag = "6")]
    pub arrival_unix_timestamp: i64,
    #[prost(message, optional, tag = "7")]
    pub operating_carrier_designator: Option<FlightDesignator>,
    #[prost(message, optional, tag = "8")]
    pub equipment: Option<Equipment>,
    #[prost(message, repeated, tag = "9")]
    pub technical_stops: Vec<TechnicalStop>,
    #[prost(string, tag = "10")]
    pub signature: String,
    #[prost(string, repeated, tag = "11")]
    pub tags: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct FlightDesignator {
    #[prost(string, tag = "1")]
    pub carrier: String,
    #[prost(string, tag = "2")]
    pub airline_id: String,
    #[prost(string, tag = "3")]
    pub number: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct TechnicalStop {
    #[prost(string, tag = "1")]
    pub airport_code: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct Equipment {
    #[prost(string, tag = "1")]
    pub code: String,
    #[prost(enumeration = "EquipmentType", tag = "2")]
    pub r#type: i32,
    #[prost(string, tag = "3")]
    pub name: String,
}

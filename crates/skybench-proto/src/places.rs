use std::collections::HashMap;

use prost::Message;

/// Inner map of a localised string: grammatical case -> text.
#[derive(Clone, PartialEq, Message)]
pub struct MapStringString {
    #[prost(map = "string, string", tag = "1")]
    pub map: HashMap<String, String>,
}

/// Tri-state boolean. `value` is only meaningful when `is_unknown` is false.
#[derive(Clone, PartialEq, Message)]
pub struct OptBool {
    #[prost(bool, tag = "1")]
    pub value: bool,
    #[prost(bool, tag = "2")]
    pub is_unknown: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct Places {
    #[prost(map = "string, message", tag = "1")]
    pub airports: HashMap<String, AirportInfo>,
    #[prost(map = "string, message", tag = "2")]
    pub cities: HashMap<String, CityInfo>,
    #[prost(map = "string, message", tag = "3")]
    pub countries: HashMap<String, CountryInfo>,
    #[prost(map = "string, message", tag = "4")]
    pub metro_areas: HashMap<String, MetroAreaInfo>,
    #[prost(map = "string, string", tag = "5")]
    pub airports_to_metro: HashMap<String, String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct AirportInfo {
    #[prost(map = "string, message", tag = "1")]
    pub name: HashMap<String, MapStringString>,
    #[prost(string, tag = "2")]
    pub code: String,
    #[prost(string, tag = "3")]
    pub city_code: String,
    #[prost(string, tag = "4")]
    pub metro_area_code: String,
    #[prost(message, optional, tag = "5")]
    pub coordinates: Option<GeoPoint>,
    #[prost(message, optional, tag = "6")]
    pub has_transit_zone: Option<OptBool>,
    #[prost(int64, tag = "7")]
    pub transit_work_hours_min: i64,
    #[prost(int64, tag = "8")]
    pub transit_work_hours_max: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct CityInfo {
    #[prost(string, tag = "1")]
    pub code: String,
    #[prost(map = "string, message", tag = "2")]
    pub name: HashMap<String, MapStringString>,
    #[prost(string, tag = "3")]
    pub country: String,
    #[prost(string, tag = "4")]
    pub timezone: String,
    #[prost(string, repeated, tag = "5")]
    pub airports: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CountryInfo {
    #[prost(string, tag = "1")]
    pub code: String,
    #[prost(map = "string, message", tag = "2")]
    pub name: HashMap<String, MapStringString>,
    #[prost(string, tag = "3")]
    pub unified_visa: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct MetroAreaInfo {
    #[prost(string, tag = "1")]
    pub code: String,
    #[prost(string, repeated, tag = "2")]
    pub airports: Vec<String>,
    #[prost(string, tag = "3")]
    pub timezone: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct GeoPoint {
    #[prost(double, tag = "1")]
    pub lat: f64,
    #[prost(double, tag = "2")]
    pub lng: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct AirlineInfo {
    #[prost(string, tag = "1")]
    pub iata: String,
    #[prost(bool, tag = "2")]
    pub is_lowcost: bool,
    #[prost(map = "string, message", tag = "3")]
    pub name: HashMap<String, MapStringString>,
    #[prost(int64, tag = "4")]
    pub alliance_id: i64,
    #[prost(string, tag = "5")]
    pub site_name: String,
    #[prost(string, tag = "6")]
    pub brand_color: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct AgentInfo {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub gate_name: String,
    #[prost(map = "string, message", tag = "3")]
    pub label: HashMap<String, MapStringString>,
    #[prost(string, repeated, tag = "4")]
    pub payment_methods: Vec<String>,
    #[prost(bool, tag = "5")]
    pub mobile_version: bool,
    #[prost(bool, tag = "6")]
    pub hide_proposals: bool,
    #[prost(bool, tag = "7")]
    pub assisted: bool,
    #[prost(string, tag = "8")]
    pub mobile_type: String,
    #[prost(string, repeated, tag = "9")]
    pub airline_iatas: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Alliance {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub name: String,
}

use std::collections::HashMap;

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct FilterPrice {
    #[prost(double, tag = "1")]
    pub enable_min_price: f64,
    #[prost(double, tag = "2")]
    pub disable_min_price: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct FilterBool {
    #[prost(double, tag = "1")]
    pub enable_min_price: f64,
    #[prost(double, tag = "2")]
    pub disable_min_price: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct PriceBoundaries {
    #[prost(double, tag = "1")]
    pub min: f64,
    #[prost(double, tag = "2")]
    pub max: f64,
}

/// Price interval selected in the filter state.
#[derive(Clone, PartialEq, Message)]
pub struct FloatRange {
    #[prost(double, tag = "1")]
    pub min: f64,
    #[prost(double, tag = "2")]
    pub max: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct Range {
    #[prost(int64, tag = "1")]
    pub min: i64,
    #[prost(int64, tag = "2")]
    pub max: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct TransferDurationBoundaries {
    #[prost(int64, tag = "1")]
    pub min: i64,
    #[prost(int64, tag = "2")]
    pub max: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct RangeBoundaries {
    #[prost(int64, tag = "1")]
    pub min: i64,
    #[prost(int64, tag = "2")]
    pub max: i64,
    #[prost(double, repeated, tag = "3")]
    pub buckets: Vec<f64>,
    #[prost(int64, tag = "4")]
    pub bucket_width: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct DateTimeRangeBoundaries {
    #[prost(string, tag = "1")]
    pub min: String,
    #[prost(string, tag = "2")]
    pub max: String,
    #[prost(map = "string, double", tag = "3")]
    pub buckets: HashMap<String, f64>,
    #[prost(int64, tag = "4")]
    pub bucket_width: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct DegradedBoundaries {
    #[prost(map = "int64, message", tag = "1")]
    pub agents: HashMap<i64, FilterPrice>,
    #[prost(map = "string, message", tag = "2")]
    pub airlines: HashMap<String, FilterPrice>,
    #[prost(map = "int64, message", tag = "3")]
    pub alliances: HashMap<i64, FilterPrice>,
    #[prost(message, optional, tag = "4")]
    pub has_interlines: Option<FilterBool>,
    #[prost(message, optional, tag = "5")]
    pub has_lowcosts: Option<FilterBool>,
    #[prost(map = "int64, message", tag = "6")]
    pub airports: HashMap<i64, DegradedAirportsBoundaries>,
    #[prost(map = "string, message", tag = "7")]
    pub same_departure_arrival_airport: HashMap<String, FilterPrice>,
    #[prost(message, optional, tag = "8")]
    pub baggage: Option<FilterBaggageBoundaries>,
    #[prost(map = "string, message", tag = "9")]
    pub equipments: HashMap<String, FilterPrice>,
    #[prost(map = "string, message", tag = "10")]
    pub payment_methods: HashMap<String, FilterPrice>,
    #[prost(message, optional, tag = "11")]
    pub price: Option<PriceBoundaries>,
    #[prost(map = "int64, message", tag = "12")]
    pub departure_arrival_time: HashMap<i64, DegradedTimeBoundaries>,
    #[prost(message, optional, tag = "13")]
    pub return_ticket: Option<DegradedReturnTicketBoundaries>,
    #[prost(message, optional, tag = "14")]
    pub change_ticket: Option<DegradedReturnTicketBoundaries>,
    #[prost(map = "int64, message", tag = "15")]
    pub transfers_count: HashMap<i64, FilterPrice>,
    #[prost(message, optional, tag = "16")]
    pub transfers_duration: Option<TransferDurationBoundaries>,
    #[prost(map = "string, message", tag = "17")]
    pub transfers_airports: HashMap<String, FilterPrice>,
    #[prost(map = "string, message", tag = "18")]
    pub transfers_countries: HashMap<String, FilterPrice>,
    #[prost(message, optional, tag = "19")]
    pub has_transfers_with_airport_change: Option<FilterBool>,
    #[prost(message, optional, tag = "20")]
    pub has_transfers_with_baggage_recheck: Option<FilterBool>,
    #[prost(message, optional, tag = "21")]
    pub has_transfers_with_visa: Option<FilterBool>,
    #[prost(message, optional, tag = "22")]
    pub has_transfers_with_virtual_interline: Option<FilterBool>,
    #[prost(message, optional, tag = "23")]
    pub has_covid_restrictions: Option<FilterBool>,
    #[prost(message, optional, tag = "24")]
    pub has_night_transfers: Option<FilterBool>,
    #[prost(message, optional, tag = "25")]
    pub has_convenient_transfers: Option<FilterBool>,
    #[prost(message, optional, tag = "26")]
    pub has_short_layover_transfers: Option<FilterBool>,
    #[prost(message, optional, tag = "27")]
    pub has_long_layover_transfers: Option<FilterBool>,
}

#[derive(Clone, PartialEq, Message)]
pub struct DegradedAirportsBoundaries {
    #[prost(map = "string, message", tag = "1")]
    pub arrival: HashMap<String, FilterPrice>,
    #[prost(map = "string, message", tag = "2")]
    pub departure: HashMap<String, FilterPrice>,
}

#[derive(Clone, PartialEq, Message)]
pub struct FilterBaggageBoundaries {
    #[prost(message, optional, tag = "1")]
    pub full_baggage: Option<FilterPrice>,
    #[prost(message, optional, tag = "2")]
    pub no_baggage: Option<FilterPrice>,
    #[prost(message, optional, tag = "3")]
    pub large_handbag: Option<FilterPrice>,
}

#[derive(Clone, PartialEq, Message)]
pub struct DegradedTimeBoundaries {
    #[prost(map = "string, message", tag = "1")]
    pub arrival_date: HashMap<String, FilterPrice>,
    #[prost(message, optional, tag = "2")]
    pub arrival_time: Option<DateTimeRangeBoundaries>,
    #[prost(message, optional, tag = "3")]
    pub departure_time: Option<DateTimeRangeBoundaries>,
    #[prost(message, optional, tag = "4")]
    pub trip_duration: Option<RangeBoundaries>,
}

#[derive(Clone, PartialEq, Message)]
pub struct DegradedReturnTicketBoundaries {
    #[prost(message, optional, tag = "1")]
    pub available: Option<FilterPrice>,
    #[prost(message, optional, tag = "2")]
    pub free: Option<FilterPrice>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Boundaries {
    #[prost(map = "int64, double", tag = "1")]
    pub agents: HashMap<i64, f64>,
    #[prost(map = "string, double", tag = "2")]
    pub airlines: HashMap<String, f64>,
    #[prost(map = "int64, double", tag = "3")]
    pub alliances: HashMap<i64, f64>,
    #[prost(double, tag = "4")]
    pub has_interlines: f64,
    #[prost(double, tag = "5")]
    pub has_lowcosts: f64,
    #[prost(map = "int64, message", tag = "6")]
    pub airports: HashMap<i64, AirportsBoundaries>,
    #[prost(map = "string, double", tag = "7")]
    pub same_departure_arrival_airport: HashMap<String, f64>,
    #[prost(message, optional, tag = "8")]
    pub baggage: Option<BaggageBoundaries>,
    #[prost(map = "string, double", tag = "9")]
    pub equipments: HashMap<String, f64>,
    #[prost(map = "string, double", tag = "10")]
    pub payment_methods: HashMap<String, f64>,
    #[prost(message, optional, tag = "11")]
    pub price: Option<PriceBoundaries>,
    #[prost(map = "int64, message", tag = "12")]
    pub departure_arrival_time: HashMap<i64, TimeBoundaries>,
    #[prost(message, optional, tag = "13")]
    pub return_ticket: Option<ReturnBoundaries>,
    #[prost(message, optional, tag = "14")]
    pub change_ticket: Option<ChangeBoundaries>,
    #[prost(map = "int64, double", tag = "15")]
    pub transfers_count: HashMap<i64, f64>,
    #[prost(message, optional, tag = "16")]
    pub transfers_duration: Option<TransferDurationBoundaries>,
    #[prost(map = "string, double", tag = "17")]
    pub transfers_airports: HashMap<String, f64>,
    #[prost(map = "string, double", tag = "18")]
    pub transfers_countries: HashMap<String, f64>,
    #[prost(double, tag = "19")]
    pub has_transfers_with_airport_change: f64,
    #[prost(double, tag = "20")]
    pub has_transfers_with_baggage_recheck: f64,
    #[prost(double, tag = "21")]
    pub has_transfers_with_visa: f64,
    #[prost(double, tag = "22")]
    pub has_transfers_with_virtual_interline: f64,
    #[prost(double, tag = "23")]
    pub has_covid_restrictions: f64,
    #[prost(double, tag = "24")]
    pub has_night_transfers: f64,
    #[prost(double, tag = "25")]
    pub has_convenient_transfers: f64,
    #[prost(double, tag = "26")]
    pub has_short_layover_transfers: f64,
    #[prost(double, tag = "27")]
    pub has_long_layover_transfers: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct AirportsBoundaries {
    #[prost(map = "string, double", tag = "1")]
    pub arrival: HashMap<String, f64>,
    #[prost(map = "string, double", tag = "2")]
    pub departure: HashMap<String, f64>,
}

#[derive(Clone, PartialEq, Message)]
pub struct BaggageBoundaries {
    #[prost(double, tag = "1")]
    pub full_baggage: f64,
    #[prost(double, tag = "2")]
    pub no_baggage: f64,
    #[prost(double, tag = "3")]
    pub large_handbag: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct TimeBoundaries {
    #[prost(map = "string, double", tag = "1")]
    pub arrival_date: HashMap<String, f64>,
    #[prost(message, optional, tag = "2")]
    pub arrival_time: Option<DateTimeRangeBoundaries>,
    #[prost(message, optional, tag = "3")]
    pub departure_time: Option<DateTimeRangeBoundaries>,
    #[prost(message, optional, tag = "4")]
    pub trip_duration: Option<RangeBoundaries>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ReturnBoundaries {
    #[prost(double, tag = "1")]
    pub available: f64,
    #[prost(double, tag = "2")]
    pub free: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct ChangeBoundaries {
    #[prost(double, tag = "1")]
    pub available: f64,
    #[prost(double, tag = "2")]
    pub free: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct FilterState {
    #[prost(int64, repeated, tag = "1")]
    pub agents: Vec<i64>,
    #[prost(string, repeated, tag = "2")]
    pub airlines: Vec<String>,
    #[prost(int64, repeated, tag = "3")]
    pub alliances: Vec<i64>,
    #[prost(bool, tag = "4")]
    pub without_interlines: bool,
    #[prost(bool, tag = "5")]
    pub without_lowcosts: bool,
    #[prost(map = "int64, message", tag = "6")]
    pub segments: HashMap<i64, SegmentFilter>,
    #[prost(bool, tag = "7")]
    pub with_same_departure_arrival_airport: bool,
    #[prost(string, repeated, tag = "8")]
    pub equipments: Vec<String>,
    #[prost(string, repeated, tag = "9")]
    pub payment_methods: Vec<String>,
    #[prost(string, repeated, tag = "10")]
    pub pin_flight_signatures: Vec<String>,
    #[prost(message, repeated, tag = "11")]
    pub price: Vec<FloatRange>,
    #[prost(int64, repeated, tag = "12")]
    pub transfers_count: Vec<i64>,
    #[prost(message, repeated, tag = "13")]
    pub transfers_duration: Vec<Range>,
    #[prost(bool, tag = "14")]
    pub transfers_without_airport_change: bool,
    #[prost(bool, tag = "15")]
    pub transfers_without_baggage_recheck: bool,
    #[prost(bool, tag = "16")]
    pub transfers_without_visa: bool,
    #[prost(bool, tag = "17")]
    pub transfers_without_virtual_interline: bool,
    #[prost(bool, tag = "18")]
    pub convenient_transfers: bool,
    #[prost(bool, tag = "19")]
    pub without_night_transfers: bool,
    #[prost(bool, tag = "20")]
    pub without_short_layover: bool,
    #[prost(bool, tag = "21")]
    pub without_long_layover: bool,
    #[prost(string, repeated, tag = "22")]
    pub transfers_airports: Vec<String>,
    #[prost(string, repeated, tag = "23")]
    pub transfers_countries: Vec<String>,
    #[prost(bool, tag = "24")]
    pub without_covid_restrictions: bool,
    #[prost(string, repeated, tag = "25")]
    pub baggage: Vec<String>,
    #[prost(message, optional, tag = "26")]
    pub time_buckets: Option<TimeBuckets>,
    #[prost(bool, tag = "27")]
    pub return_before_flight: bool,
    #[prost(bool, tag = "28")]
    pub change_before_flight: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct SegmentFilter {
    #[prost(string, repeated, tag = "1")]
    pub airports_arrival: Vec<String>,
    #[prost(string, repeated, tag = "2")]
    pub airports_departure: Vec<String>,
    #[prost(message, repeated, tag = "3")]
    pub arrival_time: Vec<DateTimeOrTimeRange>,
    #[prost(string, repeated, tag = "4")]
    pub arrival_date: Vec<String>,
    #[prost(message, repeated, tag = "5")]
    pub departure_time: Vec<DateTimeRange>,
    #[prost(message, repeated, tag = "6")]
    pub trip_duration: Vec<Range>,
}

#[derive(Clone, PartialEq, Message)]
pub struct DateTimeOrTimeRange {
    #[prost(string, tag = "1")]
    pub min: String,
    #[prost(string, tag = "2")]
    pub max: String,
}

/// Departure window in Unix seconds; an unset bound is encoded as zero.
#[derive(Clone, PartialEq, Message)]
pub struct DateTimeRange {
    #[prost(int64, tag = "1")]
    pub min: i64,
    #[prost(int64, tag = "2")]
    pub max: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct TimeBuckets {
    #[prost(int64, tag = "1")]
    pub arrival_time_bucket_width: i64,
    #[prost(int64, tag = "2")]
    pub departure_time_bucket_width: i64,
    #[prost(int64, tag = "3")]
    pub trip_duration_time_bucket_width: i64,
}

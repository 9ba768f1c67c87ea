//! Filter boundaries offered to the client and the filter state it applied.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{AgentId, AirlineId, AllianceId, Date, DateTime, LegIndex, LocationCode, Timestamp, TransfersCount};

/// Cheapest price with the filter option enabled and disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPrice {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub enable_min_price: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub disable_min_price: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterBool {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub enable_min_price: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub disable_min_price: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceRange {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub min: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub max: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Range {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub min: i64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub max: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferDurationBoundaries {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub min: i64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub max: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeBoundaries {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub min: i64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub max: i64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub buckets: Vec<f64>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub bucket_width: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeRangeBoundaries {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub min: DateTime,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub max: DateTime,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub buckets: HashMap<DateTime, f64>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub bucket_width: i64,
}

/// Boundaries computed over a degraded (partial) result set, where every
/// option carries both the enabled and disabled cheapest price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DegradedBoundaries {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub agents: HashMap<AgentId, FilterPrice>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airlines: HashMap<AirlineId, FilterPrice>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub alliances: HashMap<AllianceId, FilterPrice>,
    pub has_interlines: Option<FilterBool>,
    pub has_lowcosts: Option<FilterBool>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airports: HashMap<LegIndex, DegradedAirportsBoundaries>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub same_departure_arrival_airport: HashMap<LocationCode, FilterPrice>,
    pub baggage: Option<DegradedBaggageBoundaries>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub equipments: HashMap<String, FilterPrice>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub payment_methods: HashMap<String, FilterPrice>,
    pub price: Option<PriceRange>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub departure_arrival_time: HashMap<LegIndex, DegradedTimeBoundaries>,
    pub return_ticket: Option<DegradedTicketBoundaries>,
    pub change_ticket: Option<DegradedTicketBoundaries>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_count: HashMap<TransfersCount, FilterPrice>,
    pub transfers_duration: Option<TransferDurationBoundaries>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_airports: HashMap<LocationCode, FilterPrice>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_countries: HashMap<String, FilterPrice>,
    pub has_transfers_with_airport_change: Option<FilterBool>,
    pub has_transfers_with_baggage_recheck: Option<FilterBool>,
    pub has_transfers_with_visa: Option<FilterBool>,
    pub has_transfers_with_virtual_interline: Option<FilterBool>,
    pub has_covid_restrictions: Option<FilterBool>,
    pub has_night_transfers: Option<FilterBool>,
    pub has_convenient_transfers: Option<FilterBool>,
    pub has_short_layover_transfers: Option<FilterBool>,
    pub has_long_layover_transfers: Option<FilterBool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DegradedAirportsBoundaries {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub arrival: HashMap<LocationCode, FilterPrice>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub departure: HashMap<LocationCode, FilterPrice>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DegradedBaggageBoundaries {
    pub full_baggage: Option<FilterPrice>,
    pub no_baggage: Option<FilterPrice>,
    pub large_handbag: Option<FilterPrice>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DegradedTimeBoundaries {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub arrival_date: HashMap<Date, FilterPrice>,
    pub arrival_time: Option<DateTimeRangeBoundaries>,
    pub departure_time: Option<DateTimeRangeBoundaries>,
    pub trip_duration: Option<RangeBoundaries>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DegradedTicketBoundaries {
    pub available: Option<FilterPrice>,
    pub free: Option<FilterPrice>,
}

/// Cheapest price per filter option over the full result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Boundaries {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub agents: HashMap<AgentId, f64>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airlines: HashMap<AirlineId, f64>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub alliances: HashMap<AllianceId, f64>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub has_interlines: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub has_lowcosts: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airports: HashMap<LegIndex, AirportsBoundaries>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub same_departure_arrival_airport: HashMap<LocationCode, f64>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub baggage: BaggageBoundaries,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub equipments: HashMap<String, f64>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub payment_methods: HashMap<String, f64>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub price: PriceRange,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub departure_arrival_time: HashMap<LegIndex, TimeBoundaries>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub return_ticket: TicketBoundaries,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub change_ticket: TicketBoundaries,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_count: HashMap<TransfersCount, f64>,
    pub transfers_duration: Option<TransferDurationBoundaries>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_airports: HashMap<LocationCode, f64>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_countries: HashMap<String, f64>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub has_transfers_with_airport_change: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub has_transfers_with_baggage_recheck: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub has_transfers_with_visa: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub has_transfers_with_virtual_interline: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub has_covid_restrictions: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub has_night_transfers: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub has_convenient_transfers: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub has_short_layover_transfers: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub has_long_layover_transfers: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportsBoundaries {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub arrival: HashMap<LocationCode, f64>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub departure: HashMap<LocationCode, f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaggageBoundaries {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub full_baggage: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub no_baggage: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub large_handbag: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeBoundaries {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub arrival_date: HashMap<Date, f64>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub arrival_time: DateTimeRangeBoundaries,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub departure_time: DateTimeRangeBoundaries,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub trip_duration: RangeBoundaries,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketBoundaries {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub available: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub free: f64,
}

/// Filters the client currently has applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub agents: Vec<AgentId>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airlines: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub alliances: Vec<AllianceId>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub without_interlines: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub without_lowcosts: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub segments: HashMap<LegIndex, SegmentFilter>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub with_same_departure_arrival_airport: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub equipments: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub payment_methods: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub pin_flight_signatures: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub price: Vec<PriceRange>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_count: Vec<u32>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_duration: Vec<Range>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_without_airport_change: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_without_baggage_recheck: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_without_visa: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_without_virtual_interline: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub convenient_transfers: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub without_night_transfers: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub without_short_layover: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub without_long_layover: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_airports: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers_countries: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub without_covid_restrictions: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub baggage: Vec<String>,
    pub time_buckets: Option<TimeBuckets>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub return_before_flight: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub change_before_flight: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentFilter {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airports_arrival: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airports_departure: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub arrival_time: Vec<DateTimeOrTimeRange>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub arrival_date: Vec<Date>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub departure_time: Vec<DateTimeRange>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub trip_duration: Vec<Range>,
}

/// Either two local date-times or two `HH:MM` clock times, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeOrTimeRange {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub min: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub max: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeRange {
    pub min: Option<Timestamp>,
    pub max: Option<Timestamp>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeBuckets {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub arrival_time_bucket_width: u32,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub departure_time_bucket_width: u32,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub trip_duration_time_bucket_width: u32,
}

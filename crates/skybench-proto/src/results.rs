use std::collections::HashMap;

use prost::Message;

use crate::filter::{Boundaries, DegradedBoundaries, FilterState};
use crate::{
    AgentInfo, AirlineInfo, Alliance, Amount, Brand, Equipment, FlightLeg, Order, Places,
    Proposals, SourceKind, TechnicalStop, TermSource, Ticket, TripClass,
};

#[derive(Clone, PartialEq, Message)]
pub struct SearchResults {
    #[prost(message, repeated, tag = "1")]
    pub chunks: Vec<Chunk>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Chunk {
    #[prost(string, tag = "1")]
    pub chunk_id: String,
    #[prost(int64, tag = "2")]
    pub last_update_timestamp: i64,
    #[prost(message, optional, tag = "3")]
    pub debug_info: Option<DebugInfo>,
    #[prost(message, repeated, tag = "4")]
    pub tickets: Vec<Ticket>,
    #[prost(message, optional, tag = "5")]
    pub soft_tickets: Option<SoftResponse>,
    #[prost(message, optional, tag = "6")]
    pub brand_ticket: Option<Ticket>,
    #[prost(map = "int64, message", tag = "7")]
    pub brand_tickets: HashMap<i64, Ticket>,
    #[prost(message, optional, tag = "8")]
    pub cheapest_ticket: Option<Ticket>,
    #[prost(message, optional, tag = "9")]
    pub filtered_cheapest_ticket: Option<Ticket>,
    #[prost(message, optional, tag = "10")]
    pub cheapest_ticket_without_airport_precheck: Option<Ticket>,
    #[prost(message, repeated, tag = "11")]
    pub direct_flights: Vec<DirectFlights>,
    #[prost(message, repeated, tag = "12")]
    pub flight_legs: Vec<FlightLeg>,
    #[prost(map = "string, message", tag = "13")]
    pub airlines: HashMap<String, AirlineInfo>,
    #[prost(message, optional, tag = "14")]
    pub places: Option<Places>,
    #[prost(map = "int64, message", tag = "15")]
    pub agents: HashMap<i64, AgentInfo>,
    #[prost(map = "int64, message", tag = "16")]
    pub alliances: HashMap<i64, Alliance>,
    #[prost(map = "string, message", tag = "17")]
    pub equipments: HashMap<String, Equipment>,
    #[prost(message, optional, tag = "18")]
    pub search_params: Option<SearchParams>,
    #[prost(message, optional, tag = "19")]
    pub degraded_filter_boundaries: Option<DegradedBoundaries>,
    #[prost(message, optional, tag = "20")]
    pub filter_boundaries: Option<Boundaries>,
    #[prost(message, optional, tag = "21")]
    pub meta: Option<ResultsMeta>,
    #[prost(message, optional, tag = "22")]
    pub filter_state: Option<FilterState>,
    #[prost(enumeration = "Order", tag = "23")]
    pub order: i32,
    #[prost(enumeration = "Brand", tag = "24")]
    pub brand: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct SearchParams {
    #[prost(message, optional, tag = "1")]
    pub passengers: Option<Passengers>,
    #[prost(enumeration = "TripClass", tag = "2")]
    pub trip_class: i32,
    #[prost(enumeration = "SourceKind", tag = "3")]
    pub source_kind: i32,
    #[prost(string, repeated, tag = "4")]
    pub experiments: Vec<String>,
    #[prost(string, repeated, tag = "5")]
    pub payment_options: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Passengers {
    #[prost(int32, tag = "1")]
    pub adults: i32,
    #[prost(int32, tag = "2")]
    pub children: i32,
    #[prost(int32, tag = "3")]
    pub infants: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct ResultsMeta {
    #[prost(int64, tag = "1")]
    pub filtered_tickets_count: i64,
    #[prost(int64, tag = "2")]
    pub total_tickets_count: i64,
    #[prost(int64, tag = "3")]
    pub direct_tickets_count: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct DebugInfo {
    #[prost(string, tag = "1")]
    pub server_name: String,
    #[prost(string, tag = "2")]
    pub data_center: String,
    #[prost(map = "string, message", tag = "3")]
    pub gates: HashMap<String, GateDebugInfo>,
    #[prost(bool, tag = "4")]
    pub from_cache: bool,
    /// Unix milliseconds.
    #[prost(int64, tag = "5")]
    pub search_start_time: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct GateDebugInfo {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(map = "int64, message", tag = "2")]
    pub agents: HashMap<i64, AgentDebugInfo>,
    #[prost(double, tag = "3")]
    pub response_duration_seconds: f64,
    #[prost(string, repeated, tag = "4")]
    pub errors: Vec<String>,
    #[prost(bool, tag = "5")]
    pub from_cache: bool,
    #[prost(string, tag = "6")]
    pub cache_search_uuid: String,
    #[prost(int64, tag = "7")]
    pub cache_search_created_at: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct AgentDebugInfo {
    #[prost(map = "string, message", tag = "1")]
    pub proposals: HashMap<String, ProposalDebugInfo>,
    #[prost(int64, tag = "2")]
    pub proposals_count: i64,
    #[prost(map = "string, int64", tag = "3")]
    pub bad_proposals: HashMap<String, i64>,
    #[prost(map = "string, message", tag = "4")]
    pub filtered_proposals: HashMap<String, Proposals>,
    #[prost(map = "string, int64", tag = "5")]
    pub merged_flight_terms_sources: HashMap<String, i64>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ProposalDebugInfo {
    #[prost(message, optional, tag = "1")]
    pub agency_price: Option<Amount>,
    #[prost(double, tag = "2")]
    pub multiplier: f64,
    #[prost(double, tag = "3")]
    pub productivity: f64,
    #[prost(map = "int64, message", tag = "4")]
    pub flight_terms: HashMap<i64, FlightTermDebugInfo>,
    #[prost(message, optional, tag = "5")]
    pub cashback: Option<CashbackDebugInfo>,
}

#[derive(Clone, PartialEq, Message)]
pub struct FlightTermDebugInfo {
    #[prost(enumeration = "TermSource", tag = "1")]
    pub baggage_source: i32,
    #[prost(enumeration = "TermSource", tag = "2")]
    pub handbags_source: i32,
    #[prost(message, repeated, tag = "3")]
    pub gate_technical_stops: Vec<TechnicalStop>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CashbackDebugInfo {
    #[prost(message, optional, tag = "1")]
    pub amount: Option<Amount>,
    #[prost(message, optional, tag = "2")]
    pub localized_amount: Option<Amount>,
    #[prost(bool, tag = "3")]
    pub available: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct SoftResponse {
    #[prost(string, repeated, tag = "1")]
    pub filters_applied: Vec<String>,
    #[prost(message, repeated, tag = "2")]
    pub tickets: Vec<Ticket>,
}

#[derive(Clone, PartialEq, Message)]
pub struct DirectFlights {
    #[prost(string, tag = "1")]
    pub carrier: String,
    #[prost(string, repeated, tag = "2")]
    pub carriers: Vec<String>,
    #[prost(message, optional, tag = "3")]
    pub cheapest_ticket: Option<Ticket>,
    #[prost(message, repeated, tag = "4")]
    pub schedule: Vec<ScheduleList>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ScheduleList {
    #[prost(message, repeated, tag = "1")]
    pub list: Vec<Schedule>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Schedule {
    #[prost(string, tag = "1")]
    pub time: String,
    #[prost(string, optional, tag = "2")]
    pub datetime: Option<String>,
    #[prost(string, repeated, tag = "3")]
    pub tickets_signatures: Vec<String>,
}

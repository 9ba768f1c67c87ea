use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::filter::{Boundaries, DegradedBoundaries, FilterState};
use crate::{
    AgentId, AgentInfo, AirlineId, AirlineInfo, Alliance, AllianceId, Amount, Brand, BrandId,
    DateTime, Equipment, FlightLeg, LegIndex, Order, Places, Proposal, SourceKind, TechnicalStop,
    TermSource, Ticket, Timestamp, TripClass,
};

/// A full search response: the chunks streamed to the client, in order.
pub type SearchResults = Vec<Chunk>;

/// One incremental batch of search results with its dictionaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chunk {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub chunk_id: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub last_update_timestamp: i64,
    pub debug_info: Option<DebugInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub tickets: Vec<Ticket>,
    pub soft_tickets: Option<SoftResponse>,
    pub brand_ticket: Option<Ticket>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub brand_tickets: HashMap<BrandId, Ticket>,
    pub cheapest_ticket: Option<Ticket>,
    pub filtered_cheapest_ticket: Option<Ticket>,
    pub cheapest_ticket_without_airport_precheck: Option<Ticket>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub direct_flights: Vec<DirectFlights>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub flight_legs: Vec<FlightLeg>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airlines: HashMap<AirlineId, AirlineInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub places: Places,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub agents: HashMap<AgentId, AgentInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub alliances: HashMap<AllianceId, Alliance>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub equipments: HashMap<String, Equipment>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub search_params: SearchParams,
    pub degraded_filter_boundaries: Option<DegradedBoundaries>,
    pub filter_boundaries: Option<Boundaries>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub meta: ResultsMeta,
    pub filter_state: Option<FilterState>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub order: Order,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub brand: Brand,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub passengers: Passengers,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub trip_class: TripClass,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub source_kind: SourceKind,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub experiments: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub payment_options: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Passengers {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub adults: i32,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub children: i32,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub infants: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsMeta {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub filtered_tickets_count: u64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub total_tickets_count: u64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub direct_tickets_count: u64,
}

/// Per-gate diagnostics attached to a chunk when debugging is enabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub server_name: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub data_center: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub gates: HashMap<String, GateDebugInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub from_cache: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub search_start_time: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateDebugInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub agents: HashMap<AgentId, AgentDebugInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub response_duration_seconds: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub errors: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub from_cache: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub cache_search_uuid: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub cache_search_created_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentDebugInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub proposals: HashMap<String, ProposalDebugInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub proposals_count: u32,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub bad_proposals: HashMap<String, u32>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub filtered_proposals: HashMap<String, Vec<Proposal>>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub merged_flight_terms_sources: HashMap<String, u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalDebugInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub agency_price: Amount,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub multiplier: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub productivity: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub flight_terms: HashMap<LegIndex, FlightTermDebugInfo>,
    pub cashback: Option<CashbackDebugInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTermDebugInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub baggage_source: TermSource,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub handbags_source: TermSource,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub gate_technical_stops: Vec<TechnicalStop>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashbackDebugInfo {
    pub amount: Option<Amount>,
    pub localized_amount: Option<Amount>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub available: bool,
}

/// Tickets that only match after relaxing the applied filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftResponse {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub filters_applied: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub tickets: Vec<Ticket>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectFlights {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub carrier: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub carriers: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub cheapest_ticket: Ticket,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub schedule: Vec<Vec<Schedule>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub time: String,
    pub datetime: Option<DateTime>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub tickets_signatures: Vec<String>,
}

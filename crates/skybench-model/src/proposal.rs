use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{AgentId, Amount, FlightDesignator, LegIndex, TripClass};

/// A priced offer for a ticket from one agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proposal {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub id: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub price: Amount,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub price_per_person: Amount,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub agent_id: AgentId,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub flight_terms: HashMap<LegIndex, FlightTerm>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfer_terms: Vec<Vec<TransferTerm>>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub unified_price: Amount,
    pub options: Option<ProposalOptions>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub weight: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub from_main_airline: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub minimum_fare: Fare,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub is_warmcache: bool,
    pub cashback: Option<Cashback>,
    pub cashback_per_person: Option<Cashback>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub accepted_cards: Vec<AcceptedCard>,
}

/// Fare conditions of a proposal for one flight leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTerm {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub fare_code: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub trip_class: TripClass,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub seats_available: u16,
    pub marketing_carrier_designator: Option<FlightDesignator>,
    pub baggage: Option<Baggage>,
    pub handbags: Option<Baggage>,
    pub additional_tariff_info: Option<AdditionalTariffInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub is_charter: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub merged_terms_info: MergedTermsInfo,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub merged_from_other_proposals: HashMap<String, u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Baggage {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub count: u8,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub weight: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub total_weight: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub length: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub width: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub height: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub sum_dimension: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TariffInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub available: bool,
    pub penalty: Option<Amount>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub is_from_config: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalTariffInfo {
    pub seat_at_purchase_info: Option<TariffInfo>,
    pub seat_at_registration_info: Option<TariffInfo>,
    pub return_before_flight: Option<TariffInfo>,
    pub return_after_flight: Option<TariffInfo>,
    pub change_before_flight: Option<TariffInfo>,
    pub change_after_flight: Option<TariffInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub fare_name: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub miles: i64,
}

/// Which tariff attributes were filled in from configuration or disagreed
/// between merged proposals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergedTermsInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub seat_at_registration: TariffMergeInfo,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub seat_at_purchase: TariffMergeInfo,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub return_before_flight: TariffMergeInfo,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub return_after_flight: TariffMergeInfo,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub change_before_flight: TariffMergeInfo,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub change_after_flight: TariffMergeInfo,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub baggage: BaggageMergeInfo,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub handbags: BaggageMergeInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TariffMergeInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub is_from_config: TariffMergeParams,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub mismatch: TariffMergeParams,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TariffMergeParams {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub available: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub penalty_currency_code: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub penalty_value: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaggageMergeInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub is_from_config: BaggageMergeParams,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub mismatch: BaggageMergeParams,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaggageMergeParams {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub count: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub weight: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub total_weight: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub height: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub length: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub width: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub sum_dimension: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferTerm {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub is_virtual_interline: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalOptions {
    pub hotel: Option<Hotel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotel {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub stars: i32,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub room_type: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub meals: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fare {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub code: String,
    pub baggage: Option<Baggage>,
    pub handbags: Option<Baggage>,
    pub return_before_flight: Option<TariffInfo>,
    pub return_after_flight: Option<TariffInfo>,
    pub change_before_flight: Option<TariffInfo>,
    pub change_after_flight: Option<TariffInfo>,
    pub seat_at_purchase: Option<TariffInfo>,
    pub seat_at_registration: Option<TariffInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub fare_name: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub miles: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cashback {
    pub localized_amount: Option<Amount>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceptedCard {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub region: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub system: String,
}

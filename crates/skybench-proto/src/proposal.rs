use std::collections::HashMap;

use prost::Message;

use crate::{Currency, FlightDesignator, TripClass};

/// List wrapper for proposal lists stored as map values.
#[derive(Clone, PartialEq, Message)]
pub struct Proposals {
    #[prost(message, repeated, tag = "1")]
    pub proposals: Vec<Proposal>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Proposal {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, optional, tag = "2")]
    pub price: Option<Amount>,
    #[prost(message, optional, tag = "3")]
    pub price_per_person: Option<Amount>,
    #[prost(int64, tag = "4")]
    pub agent_id: i64,
    #[prost(map = "int64, message", tag = "5")]
    pub flight_terms: HashMap<i64, FlightTerm>,
    #[prost(message, repeated, tag = "6")]
    pub transfer_terms: Vec<TransferTerms>,
    #[prost(message, optional, tag = "7")]
    pub unified_price: Option<Amount>,
    #[prost(message, optional, tag = "8")]
    pub options: Option<ProposalOptions>,
    #[prost(double, tag = "9")]
    pub weight: f64,
    #[prost(bool, tag = "10")]
    pub from_main_airline: bool,
    #[prost(string, repeated, tag = "11")]
    pub tags: Vec<String>,
    #[prost(message, optional, tag = "12")]
    pub minimum_fare: Option<Fare>,
    #[prost(bool, tag = "13")]
    pub is_warmcache: bool,
    #[prost(message, optional, tag = "14")]
    pub cashback: Option<Cashback>,
    #[prost(message, optional, tag = "15")]
    pub cashback_per_person: Option<Cashback>,
    #[prost(message, repeated, tag = "16")]
    pub accepted_cards: Vec<AcceptedCard>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Amount {
    #[prost(enumeration = "Currency", tag = "1")]
    pub currency_code: i32,
    #[prost(double, tag = "2")]
    pub value: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct FlightTerm {
    #[prost(string, tag = "1")]
    pub fare_code: String,
    #[prost(enumeration = "TripClass", tag = "2")]
    pub trip_class: i32,
    #[prost(int32, tag = "3")]
    pub seats_available: i32,
    #[prost(message, optional, tag = "4")]
    pub marketing_carrier_designator: Option<FlightDesignator>,
    #[prost(message, optional, tag = "5")]
    pub baggage: Option<Baggage>,
    #[prost(message, optional, tag = "6")]
    pub handbags: Option<Baggage>,
    #[prost(message, optional, tag = "7")]
    pub additional_tariff_info: Option<AdditionalTariffInfo>,
    #[prost(bool, tag = "8")]
    pub is_charter: bool,
    #[prost(string, repeated, tag = "9")]
    pub tags: Vec<String>,
    #[prost(message, optional, tag = "10")]
    pub merged_terms_info: Option<MergedTermsInfo>,
    #[prost(map = "string, int64", tag = "11")]
    pub merged_from_other_proposals: HashMap<String, i64>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Baggage {
    #[prost(int64, tag = "1")]
    pub count: i64,
    #[prost(double, tag = "2")]
    pub weight: f64,
    #[prost(double, tag = "3")]
    pub total_weight: f64,
    #[prost(double, tag = "4")]
    pub length: f64,
    #[prost(double, tag = "5")]
    pub width: f64,
    #[prost(double, tag = "6")]
    pub height: f64,
    #[prost(double, tag = "7")]
    pub sum_dimension: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct TariffInfo {
    #[prost(bool, tag = "1")]
    pub available: bool,
    #[prost(message, optional, tag = "2")]
    pub penalty: Option<Amount>,
    #[prost(bool, tag = "3")]
    pub is_from_config: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct AdditionalTariffInfo {
    #[prost(message, optional, tag = "1")]
    pub seat_at_purchase_info: Option<TariffInfo>,
    #[prost(message, optional, tag = "2")]
    pub seat_at_registration_info: Option<TariffInfo>,
    #[prost(message, optional, tag = "3")]
    pub return_before_flight: Option<TariffInfo>,
    #[prost(message, optional, tag = "4")]
    pub return_after_flight: Option<TariffInfo>,
    #[prost(message, optional, tag = "5")]
    pub change_before_flight: Option<TariffInfo>,
    #[prost(message, optional, tag = "6")]
    pub change_after_flight: Option<TariffInfo>,
    #[prost(string, tag = "7")]
    pub fare_name: String,
    #[prost(int64, tag = "8")]
    pub miles: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct MergedTermsInfo {
    #[prost(message, optional, tag = "1")]
    pub seat_at_registration: Option<TariffMergeInfo>,
    #[prost(message, optional, tag = "2")]
    pub seat_at_purchase: Option<TariffMergeInfo>,
    #[prost(message, optional, tag = "3")]
    pub return_before_flight: Option<TariffMergeInfo>,
    #[prost(message, optional, tag = "4")]
    pub return_after_flight: Option<TariffMergeInfo>,
    #[prost(message, optional, tag = "5")]
    pub change_before_flight: Option<TariffMergeInfo>,
    #[prost(message, optional, tag = "6")]
    pub change_after_flight: Option<TariffMergeInfo>,
    #[prost(message, optional, tag = "7")]
    pub baggage: Option<BaggageMergeInfo>,
    #[prost(message, optional, tag = "8")]
    pub handbags: Option<BaggageMergeInfo>,
}

#[derive(Clone, PartialEq, Message)]
pub struct TariffMergeInfo {
    #[prost(message, optional, tag = "1")]
    pub is_from_config: Option<TariffMergeParams>,
    #[prost(message, optional, tag = "2")]
    pub mismatch: Option<TariffMergeParams>,
}

#[derive(Clone, PartialEq, Message)]
pub struct TariffMergeParams {
    #[prost(bool, tag = "1")]
    pub available: bool,
    #[prost(bool, tag = "2")]
    pub penalty_currency_code: bool,
    #[prost(bool, tag = "3")]
    pub penalty_value: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct BaggageMergeInfo {
    #[prost(message, optional, tag = "1")]
    pub is_from_config: Option<BaggageMergeParams>,
    #[prost(message, optional, tag = "2")]
    pub mismatch: Option<BaggageMergeParams>,
}

#[derive(Clone, PartialEq, Message)]
pub struct BaggageMergeParams {
    #[prost(bool, tag = "1")]
    pub count: bool,
    #[prost(bool, tag = "2")]
    pub weight: bool,
    #[prost(bool, tag = "3")]
    pub total_weight: bool,
    #[prost(bool, tag = "4")]
    pub height: bool,
    #[prost(bool, tag = "5")]
    pub length: bool,
    #[prost(bool, tag = "6")]
    pub width: bool,
    #[prost(bool, tag = "7")]
    pub sum_dimension: bool,
}

/// Transfer terms between two consecutive legs of one segment.
#[derive(Clone, PartialEq, Message)]
pub struct TransferTerms {
    #[prost(message, repeated, tag = "1")]
    pub terms: Vec<TransferTerm>,
}

#[derive(Clone, PartialEq, Message)]
pub struct TransferTerm {
    #[prost(bool, tag = "1")]
    pub is_virtual_interline: bool,
    #[prost(string, repeated, tag = "2")]
    pub tags: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ProposalOptions {
    #[prost(message, optional, tag = "1")]
    pub hotel: Option<Hotel>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Hotel {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(int32, tag = "2")]
    pub stars: i32,
    #[prost(string, tag = "3")]
    pub room_type: String,
    #[prost(string, tag = "4")]
    pub meals: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct Fare {
    #[prost(string, tag = "1")]
    pub code: String,
    #[prost(message, optional, tag = "2")]
    pub baggage: Option<Baggage>,
    #[prost(message, optional, tag = "3")]
    pub handbags: Option<Baggage>,
    #[prost(message, optional, tag = "4")]
    pub return_before_flight: Option<TariffInfo>,
    #[prost(message, optional, tag = "5")]
    pub return_after_flight: Option<TariffInfo>,
    #[prost(message, optional, tag = "6")]
    pub change_before_flight: Option<TariffInfo>,
    #[prost(message, optional, tag = "7")]
    pub change_after_flight: Option<TariffInfo>,
    #[prost(message, optional, tag = "8")]
    pub seat_at_purchase: Option<TariffInfo>,
    #[prost(message, optional, tag = "9")]
    pub seat_at_registration: Option<TariffInfo>,
    #[prost(string, tag = "10")]
    pub fare_name: String,
    #[prost(int64, tag = "11")]
    pub miles: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct Cashback {
    #[prost(message, optional, tag = "1")]
    pub localized_amount: Option<Amount>,
    #[prost(bool, tag = "2")]
    pub available: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct AcceptedCard {
    #[prost(string, tag = "1")]
    pub region: String,
    #[prost(string, tag = "2")]
    pub system: String,
}

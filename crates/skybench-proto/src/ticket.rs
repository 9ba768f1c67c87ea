use std::collections::HashMap;

use prost::Message;

use crate::Proposal;

#[derive(Clone, PartialEq, Message)]
pub struct Ticket {
    #[prost(message, repeated, tag = "1")]
    pub segments: Vec<Segment>,
    #[prost(message, repeated, tag = "2")]
    pub proposals: Vec<Proposal>,
    #[prost(string, tag = "3")]
    pub signature: String,
    #[prost(int64, tag = "4")]
    pub popularity: i64,
    #[prost(double, tag = "5")]
    pub score: f64,
    #[prost(uint64, tag = "6")]
    pub hashsum: u64,
    #[prost(string, repeated, tag = "7")]
    pub tags: Vec<String>,
    #[prost(message, repeated, tag = "8")]
    pub badges: Vec<BadgeInfo>,
    #[prost(map = "string, message", tag = "9")]
    pub extra_fares: HashMap<String, FareProposals>,
    #[prost(string, repeated, tag = "10")]
    pub filtered_by: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Segment {
    #[prost(int64, repeated, tag = "1")]
    pub flights: Vec<i64>,
    #[prost(message, repeated, tag = "2")]
    pub transfers: Vec<Transfer>,
    #[prost(string, repeated, tag = "3")]
    pub tags: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Transfer {
    #[prost(message, optional, tag = "1")]
    pub visa_rules: Option<VisaRules>,
    #[prost(bool, tag = "2")]
    pub recheck_baggage: bool,
    #[prost(bool, tag = "3")]
    pub night_transfer: bool,
    #[prost(string, repeated, tag = "4")]
    pub tags: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct VisaRules {
    #[prost(bool, tag = "1")]
    pub required: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct BadgeInfo {
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(map = "string, double", tag = "2")]
    pub scores: HashMap<String, f64>,
    #[prost(message, optional, tag = "3")]
    pub meta: Option<BadgeInfoMeta>,
}

#[derive(Clone, PartialEq, Message)]
pub struct BadgeInfoMeta {
    #[prost(map = "string, string", tag = "1")]
    pub name: HashMap<String, String>,
    #[prost(int64, tag = "2")]
    pub priority: i64,
    #[prost(int64, tag = "3")]
    pub position: i64,
    #[prost(int64, tag = "4")]
    pub limit: i64,
    #[prost(message, optional, tag = "5")]
    pub colors: Option<Colors>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Colors {
    #[prost(string, tag = "1")]
    pub light: String,
    #[prost(string, tag = "2")]
    pub dark: String,
}

/// List wrapper for the values of `Ticket::extra_fares`.
#[derive(Clone, PartialEq, Message)]
pub struct FareProposals {
    #[prost(message, repeated, tag = "1")]
    pub proposals: Vec<FareProposal>,
}

#[derive(Clone, PartialEq, Message)]
pub struct FareProposal {
    #[prost(string, tag = "1")]
    pub proposal_id: String,
    #[prost(int64, tag = "2")]
    pub index: i64,
}

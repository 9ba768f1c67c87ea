use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{LanguageCode, LegIndex, Proposal};

/// An itinerary together with every proposal found for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub segments: Vec<Segment>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub proposals: Vec<Proposal>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub signature: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub popularity: i64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub score: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub hashsum: u64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub badges: Vec<BadgeInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub extra_fares: HashMap<String, Vec<FareProposal>>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub filtered_by: Vec<String>,
}

/// One direction of travel; `flights` indexes into the chunk's flight legs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub flights: Vec<LegIndex>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transfers: Vec<Transfer>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub visa_rules: VisaRules,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub recheck_baggage: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub night_transfer: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisaRules {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeInfo {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "crate::null::or_default")]
    pub kind: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub scores: HashMap<String, f64>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub meta: BadgeInfoMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeInfoMeta {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub name: HashMap<LanguageCode, String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub priority: i32,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub position: i32,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub limit: i32,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub colors: Colors,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub light: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub dark: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareProposal {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub proposal_id: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub index: u32,
}

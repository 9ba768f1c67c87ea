use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{AgentId, AirlineId, AllianceId, CountryCode, LanguageCode, LocationCode, PointerBool};

/// Localised names: language -> grammatical case/context -> text.
pub type LocalizableString = HashMap<LanguageCode, HashMap<String, String>>;

/// Dictionary of every location referenced by a chunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Places {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airports: HashMap<LocationCode, AirportInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub cities: HashMap<LocationCode, CityInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub countries: HashMap<CountryCode, CountryInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub metro_areas: HashMap<LocationCode, MetroAreaInfo>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airports_to_metro: HashMap<LocationCode, LocationCode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportInfo {
    #[serde(deserialize_with = "crate::null::localizable")]
    pub name: LocalizableString,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub code: LocationCode,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub city_code: LocationCode,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub metro_area_code: LocationCode,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub coordinates: GeoPoint,
    pub has_transit_zone: PointerBool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transit_work_hours_min: i32,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub transit_work_hours_max: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub code: LocationCode,
    #[serde(deserialize_with = "crate::null::localizable")]
    pub name: LocalizableString,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub country: CountryCode,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub timezone: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airports: Vec<LocationCode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub code: CountryCode,
    #[serde(deserialize_with = "crate::null::localizable")]
    pub name: LocalizableString,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub unified_visa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetroAreaInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub code: LocationCode,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airports: Vec<LocationCode>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub timezone: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoPoint {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub lat: f64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub lng: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirlineInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub iata: AirlineId,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub is_lowcost: bool,
    #[serde(deserialize_with = "crate::null::localizable")]
    pub name: LocalizableString,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub alliance_id: AllianceId,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub site_name: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub brand_color: String,
}

/// Booking agent (travel agency or airline website).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentInfo {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub id: AgentId,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub gate_name: String,
    #[serde(deserialize_with = "crate::null::localizable")]
    pub label: LocalizableString,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub payment_methods: Vec<String>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub mobile_version: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub hide_proposals: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub assisted: bool,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub mobile_type: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airline_iatas: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alliance {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub id: AllianceId,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub name: String,
}

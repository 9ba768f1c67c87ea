use serde::{Deserialize, Serialize};

use crate::{AirlineId, DateTime, EquipmentType, LocationCode};

/// One flight between two airports, referenced from segments by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightLeg {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub origin: LocationCode,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub destination: LocationCode,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub local_departure_date_time: DateTime,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub local_arrival_date_time: DateTime,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub departure_unix_timestamp: i64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub arrival_unix_timestamp: i64,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub operating_carrier_designator: FlightDesignator,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub equipment: Equipment,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub technical_stops: Vec<TechnicalStop>,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub signature: String,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightDesignator {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub carrier: AirlineId,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airline_id: AirlineId,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalStop {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub airport_code: LocationCode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipment {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub code: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "crate::null::or_default")]
    pub kind: EquipmentType,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub name: String,
}

use serde::{Deserialize, Serialize};

/// Cabin class requested by the search or offered by a fare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripClass {
    #[default]
    #[serde(rename = "Y")]
    Economy = 0,
    #[serde(rename = "W")]
    PremiumEconomy = 1,
    #[serde(rename = "C")]
    Business = 2,
    #[serde(rename = "F")]
    First = 3,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Organic = 0,
    Metasearch = 1,
    Affiliate = 2,
}

/// Ticket ordering applied to a chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    #[default]
    Cheapest = 0,
    Fastest = 1,
    Best = 2,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brand {
    #[default]
    Primary = 0,
    WhiteLabel = 1,
}

/// Where a baggage or handbag term of a proposal came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermSource {
    #[default]
    Unknown = 0,
    Gate = 1,
    Config = 2,
    Merged = 3,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    #[default]
    Unknown = 0,
    Plane = 1,
    Helicopter = 2,
    Bus = 3,
    Train = 4,
    Ship = 5,
}

macro_rules! numeric_code {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                /// Stable numeric code shared with the protobuf enum.
                #[must_use]
                pub const fn code(self) -> i32 {
                    self as i32
                }
            }
        )*
    };
}

numeric_code!(TripClass, SourceKind, Order, Brand, TermSource, EquipmentType);

#[cfg(test)]
mod tests {
    use super::{EquipmentType, TripClass};

    #[test]
    fn trip_class_uses_fare_basis_letters() {
        let business: TripClass = serde_json::from_str("\"C\"").expect("trip class");
        assert_eq!(business, TripClass::Business);
        assert_eq!(business.code(), 2);
        assert_eq!(serde_json::to_string(&TripClass::First).expect("encode"), "\"F\"");
    }

    #[test]
    fn snake_case_enums_decode() {
        let kind: EquipmentType = serde_json::from_str("\"helicopter\"").expect("equipment type");
        assert_eq!(kind.code(), 2);
    }
}

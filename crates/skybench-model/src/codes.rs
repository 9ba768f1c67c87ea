use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! string_code {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

string_code!(
    /// Two-letter airline designator (`SU`, `TK`).
    AirlineId
);
string_code!(
    /// IATA location code of an airport, city or metro area.
    LocationCode
);
string_code!(
    /// ISO 3166 alpha-2 country code.
    CountryCode
);
string_code!(LanguageCode);
string_code!(
    /// ISO 4217 currency code. Unknown codes are carried through verbatim.
    CurrencyCode
);

// Numeric identifiers are plain JSON numbers, except when they key a JSON
// object, where they arrive as decimal strings. Both forms are accepted.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub $inner);

        impl $name {
            #[must_use]
            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer
                    .deserialize_any(NumericIdVisitor::<$inner>(PhantomData))
                    .map(Self)
            }
        }
    };
}

numeric_id!(AgentId(u32));
numeric_id!(AllianceId(u32));
numeric_id!(BrandId(u32));
numeric_id!(
    /// Position of a flight leg inside a chunk's `flight_legs`.
    LegIndex(u32)
);
numeric_id!(TransfersCount(i64));

struct NumericIdVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for NumericIdVisitor<T>
where
    T: TryFrom<u64> + TryFrom<i64> + FromStr,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an integer identifier or its decimal string form")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<T, E> {
        <T as TryFrom<u64>>::try_from(value)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<T, E> {
        <T as TryFrom<i64>>::try_from(value)
            .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        value
            .parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

/// Monetary amount in a given currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amount {
    #[serde(deserialize_with = "crate::null::or_default")]
    pub currency_code: CurrencyCode,
    #[serde(deserialize_with = "crate::null::or_default")]
    pub value: f64,
}

impl Amount {
    pub fn new(currency_code: impl Into<String>, value: f64) -> Self {
        Self {
            currency_code: CurrencyCode::new(currency_code),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{AgentId, AirlineId, Amount, LegIndex, TransfersCount};

    #[test]
    fn numeric_ids_accept_numbers_and_decimal_strings() {
        let from_number: AgentId = serde_json::from_str("42").expect("number form");
        let from_string: AgentId = serde_json::from_str("\"42\"").expect("string form");
        assert_eq!(from_number, AgentId(42));
        assert_eq!(from_string, AgentId(42));

        let negative: TransfersCount = serde_json::from_str("-1").expect("signed id");
        assert_eq!(negative.get(), -1);
    }

    #[test]
    fn numeric_ids_reject_out_of_range_values() {
        assert!(serde_json::from_str::<LegIndex>("-3").is_err());
        assert!(serde_json::from_str::<LegIndex>("\"leg\"").is_err());
    }

    #[test]
    fn numeric_ids_round_trip_as_object_keys() {
        let encoded = r#"{"7":"seven","11":"eleven"}"#;
        let decoded: HashMap<LegIndex, String> =
            serde_json::from_str(encoded).expect("integer keyed object");
        assert_eq!(decoded[&LegIndex(7)], "seven");

        let reencoded = serde_json::to_string(&decoded).expect("encode");
        let again: HashMap<LegIndex, String> = serde_json::from_str(&reencoded).expect("decode");
        assert_eq!(again, decoded);
    }

    #[test]
    fn string_codes_are_transparent() {
        let airline: AirlineId = serde_json::from_str("\"SU\"").expect("code");
        assert_eq!(airline.as_str(), "SU");
        assert_eq!(serde_json::to_string(&airline).expect("encode"), "\"SU\"");
    }

    #[test]
    fn amount_missing_fields_default() {
        let amount: Amount = serde_json::from_str(r#"{"value": 12.5}"#).expect("amount");
        assert_eq!(amount.currency_code.as_str(), "");
        assert_eq!(amount.value, 12.5);
    }
}

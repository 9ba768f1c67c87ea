use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::ModelError;

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Airport-local wall clock date-time, without an offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(NaiveDateTime);

impl DateTime {
    #[must_use]
    pub const fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn naive(self) -> NaiveDateTime {
        self.0
    }
}

impl FromStr for DateTime {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
            .map(Self)
            .map_err(|source| ModelError::InvalidDateTime {
                value: value.to_owned(),
                source,
            })
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_TIME_FORMAT))
    }
}

/// Calendar date (`YYYY-MM-DD`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    #[must_use]
    pub const fn new(value: NaiveDate) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn naive(self) -> NaiveDate {
        self.0
    }
}

impl FromStr for Date {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|source| ModelError::InvalidDate {
                value: value.to_owned(),
                source,
            })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Absolute UTC instant, exchanged as RFC 3339 text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(chrono::DateTime<Utc>);

impl Timestamp {
    pub fn from_unix_millis(millis: i64) -> Result<Self, ModelError> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(Self)
            .ok_or(ModelError::TimestampOutOfRange { millis })
    }

    #[must_use]
    pub fn unix_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    #[must_use]
    pub fn unix_seconds(self) -> i64 {
        self.0.timestamp()
    }
}

impl FromStr for Timestamp {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        chrono::DateTime::parse_from_rfc3339(value)
            .map(|parsed| Self(parsed.with_timezone(&Utc)))
            .map_err(|source| ModelError::InvalidTimestamp {
                value: value.to_owned(),
                source,
            })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

macro_rules! textual_serde {
    ($($name:ident),* $(,)?) => {
        $(
            impl Serialize for $name {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let raw = String::deserialize(deserializer)?;
                    raw.parse().map_err(de::Error::custom)
                }
            }
        )*
    };
}

textual_serde!(DateTime, Date, Timestamp);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{Date, DateTime, Timestamp};
    use crate::ModelError;

    #[test]
    fn date_time_round_trips_through_text() {
        let value: DateTime = "2023-03-01T10:15:00".parse().expect("date-time");
        assert_eq!(value.to_string(), "2023-03-01T10:15:00");
    }

    #[test]
    fn date_time_rejects_offsets_and_garbage() {
        let error = "yesterday".parse::<DateTime>().expect_err("not a date-time");
        assert!(matches!(error, ModelError::InvalidDateTime { .. }));
    }

    #[test]
    fn dates_key_json_objects() {
        let decoded: HashMap<Date, f64> =
            serde_json::from_str(r#"{"2023-03-02": 101.5}"#).expect("date keyed object");
        let key: Date = "2023-03-02".parse().expect("date");
        assert_eq!(decoded[&key], 101.5);
    }

    #[test]
    fn timestamps_expose_unix_units() {
        let value: Timestamp = "2022-12-23T04:51:24Z".parse().expect("timestamp");
        assert_eq!(value.unix_seconds(), 1_671_771_084);
        assert_eq!(value.unix_millis(), 1_671_771_084_000);
        assert_eq!(value.to_string(), "2022-12-23T04:51:24Z");

        let from_millis = Timestamp::from_unix_millis(1_671_771_084_000).expect("in range");
        assert_eq!(from_millis, value);
    }

    #[test]
    fn timestamps_normalise_offsets_to_utc() {
        let value: Timestamp = "2022-12-23T07:51:24+03:00".parse().expect("timestamp");
        assert_eq!(value.to_string(), "2022-12-23T04:51:24Z");
    }
}

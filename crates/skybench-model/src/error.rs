use thiserror::Error;

/// Parse failures for the textual value types of the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid local date-time '{value}': {source}")]
    InvalidDateTime {
        value: String,
        source: chrono::ParseError,
    },

    #[error("invalid calendar date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    #[error("invalid RFC 3339 timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("unix timestamp {millis}ms is outside the supported range")]
    TimestampOutOfRange { millis: i64 },
}

//! Serialization benchmarking and equivalence harness for flight search
//! results.
//!
//! A [`Harness`] loads a search results fixture, converts it to the protobuf
//! message tree, checks that the two are equivalent and measures how large
//! every encoding is, raw and gzip-compressed. The criterion benches under
//! `benches/` time the same payloads.

pub mod config;
pub mod fixture;
mod harness;
pub mod payload;
pub mod random;
mod report;
pub mod samples;
pub mod telemetry;

use thiserror::Error;

pub use harness::Harness;
pub use report::{SizeEntry, SizeReport};

pub mod prelude {
    pub use skybench_codec::{compress, decompress, CodecError, GzipLevel};
    pub use skybench_convert::results_to_proto;
    pub use skybench_equiv::{assert_equivalent, Comparator, Mismatch, MismatchKind, Report};
    pub use skybench_model::SearchResults;
    pub use skybench_proto::{decode_message, encode_message, PooledCodec};

    pub use crate::config::{HarnessConfig, SampleConfig};
    pub use crate::payload::{Encoding, PayloadPair};
    pub use crate::{Harness, SizeReport, SkybenchError};
}

pub type Result<T> = std::result::Result<T, SkybenchError>;

#[derive(Debug, Error)]
pub enum SkybenchError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Fixture(#[from] fixture::FixtureError),
    #[error(transparent)]
    Codec(#[from] skybench_codec::CodecError),
    #[error(transparent)]
    Proto(#[from] skybench_proto::ProtoError),
    #[error(transparent)]
    Compare(#[from] skybench_equiv::CompareError),
    #[error("{encoding} round trip changed the payload")]
    RoundTrip { encoding: payload::Encoding },
    #[error("{encoding} needs a domain value to encode")]
    UnsupportedEncoding { encoding: payload::Encoding },
}

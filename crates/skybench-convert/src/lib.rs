//! Domain-to-message conversion.
//!
//! Every function here is total: absent optional records become unset
//! sub-messages, everything else maps field by field. Identifiers widen to
//! `i64`; unsigned counters are reinterpreted with `as` where the message
//! schema is signed.

mod filter;
mod places;
mod proposal;
mod results;
mod samples;
mod scalars;
mod ticket;

use std::collections::HashMap;
use std::hash::Hash;

use skybench_model as model;
use skybench_proto as proto;

pub use samples::{large_response_to_proto, long_string_to_proto, object_to_proto, objects_to_proto};

/// Converts a full search response into its message form.
#[must_use]
pub fn results_to_proto(results: &model::SearchResults) -> proto::SearchResults {
    tracing::debug!(chunks = results.len(), "converting search results");
    proto::SearchResults {
        chunks: conv_vec(results, results::chunk),
    }
}

/// Converts a single chunk.
#[must_use]
pub fn chunk_to_proto(chunk: &model::Chunk) -> proto::Chunk {
    results::chunk(chunk)
}

pub(crate) fn conv_vec<T, U>(from: &[T], conv: impl Fn(&T) -> U) -> Vec<U> {
    from.iter().map(conv).collect()
}

pub(crate) fn conv_map<K1, V1, K2, V2>(
    from: &HashMap<K1, V1>,
    key: impl Fn(&K1) -> K2,
    value: impl Fn(&V1) -> V2,
) -> HashMap<K2, V2>
where
    K2: Eq + Hash,
{
    from.iter().map(|(k, v)| (key(k), value(v))).collect()
}

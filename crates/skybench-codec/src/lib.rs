//! Text and compression codecs shared by the harness and the benchmarks.

mod gzip;
mod json;

use thiserror::Error;

pub use gzip::{compress, decompress, is_gzip, GzipLevel};
pub use json::{decode_fast_json, decode_fast_json_copy, decode_json, encode_fast_json, encode_json};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("json codec failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fast json codec failed: {0}")]
    FastJson(#[from] simd_json::Error),
    #[error("gzip compression failed: {0}")]
    Compress(#[source] std::io::Error),
    #[error("gzip decompression failed: {0}")]
    Decompress(#[source] std::io::Error),
}

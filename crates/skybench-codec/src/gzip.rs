use std::borrow::Cow;
use std::fmt;
use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::CodecError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GzipLevel {
    Fastest,
    Best,
    Default,
}

impl GzipLevel {
    pub const ALL: [Self; 3] = [Self::Fastest, Self::Best, Self::Default];

    #[must_use]
    pub fn compression(self) -> Compression {
        match self {
            Self::Fastest => Compression::fast(),
            Self::Best => Compression::best(),
            Self::Default => Compression::default(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fastest => "fastest",
            Self::Best => "best",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for GzipLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn compress(bytes: &[u8], level: GzipLevel) -> Result<Vec<u8>, CodecError> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(bytes.len() / 2), level.compression());
    encoder.write_all(bytes).map_err(CodecError::Compress)?;
    let compressed = encoder.finish().map_err(CodecError::Compress)?;
    trace!(
        raw = bytes.len(),
        compressed = compressed.len(),
        %level,
        "gzip compressed"
    );
    Ok(compressed)
}

#[must_use]
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Inflates gzip data. Input without the gzip magic is returned unchanged.
pub fn decompress(bytes: &[u8]) -> Result<Cow<'_, [u8]>, CodecError> {
    if !is_gzip(bytes) {
        return Ok(Cow::Borrowed(bytes));
    }
    let mut decoded = Vec::with_capacity(bytes.len() * 4);
    GzDecoder::new(bytes)
        .read_to_end(&mut decoded)
        .map_err(CodecError::Decompress)?;
    Ok(Cow::Owned(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_at_every_level() {
        let payload = b"search results ".repeat(64);
        for level in GzipLevel::ALL {
            let compressed = compress(&payload, level).expect("compress");
            assert!(is_gzip(&compressed));
            assert!(compressed.len() < payload.len(), "{level} did not shrink");
            assert_eq!(decompress(&compressed).expect("decompress").as_ref(), payload.as_slice());
        }
    }

    #[test]
    fn plain_input_passes_through() {
        let plain = br#"{"chunk_id":"c1"}"#;
        let output = decompress(plain).expect("pass-through");
        assert!(matches!(output, Cow::Borrowed(_)));
        assert_eq!(output.as_ref(), plain);
    }

    #[test]
    fn unknown_compression_method_is_an_error() {
        let bogus = [0x1f, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert!(matches!(decompress(&bogus), Err(CodecError::Decompress(_))));
    }

    #[test]
    fn levels_parse_from_snake_case() {
        let levels: Vec<GzipLevel> =
            serde_json::from_str(r#"["fastest","best","default"]"#).expect("levels");
        assert_eq!(levels, GzipLevel::ALL);
    }
}

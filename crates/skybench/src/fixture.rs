use std::fs;
use std::path::PathBuf;

use skybench_codec::{decode_json, decompress, CodecError};
use skybench_model::SearchResults;
use thiserror::Error;
use tracing::debug;

use crate::config::FixtureSource;

/// Search results captured from a real session, as served to clients.
pub const EMBEDDED_RESULTS: &[u8] = include_bytes!("../fixtures/results.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode fixture: {0}")]
    Decode(#[from] CodecError),
}

pub fn load_results(source: &FixtureSource) -> Result<SearchResults, FixtureError> {
    match source {
        FixtureSource::Embedded => parse_results(EMBEDDED_RESULTS),
        FixtureSource::Path { path } => {
            let bytes = fs::read(path).map_err(|source| FixtureError::Read {
                path: path.clone(),
                source,
            })?;
            parse_results(&bytes)
        }
    }
}

/// Decodes a search results document. Gzip input is inflated first.
pub fn parse_results(bytes: &[u8]) -> Result<SearchResults, FixtureError> {
    let plain = decompress(bytes)?;
    let results: SearchResults = decode_json(&plain)?;
    debug!(
        chunks = results.len(),
        bytes = plain.len(),
        compressed = plain.len() != bytes.len(),
        "parsed search results"
    );
    Ok(results)
}

pub fn embedded_results() -> Result<SearchResults, FixtureError> {
    parse_results(EMBEDDED_RESULTS)
}

#[cfg(test)]
mod tests {
    use skybench_codec::{compress, GzipLevel};

    use super::*;

    #[test]
    fn embedded_fixture_decodes() {
        let results = embedded_results().expect("embedded fixture");
        assert!(results.len() > 1);
    }

    #[test]
    fn gzip_fixture_decodes_to_the_same_results() {
        let packed = compress(EMBEDDED_RESULTS, GzipLevel::Best).expect("compress");
        assert_eq!(
            parse_results(&packed).expect("gzip fixture"),
            embedded_results().expect("plain fixture")
        );
    }

    #[test]
    fn missing_file_reports_its_path() {
        let source = FixtureSource::Path {
            path: PathBuf::from("does/not/exist.json"),
        };
        match load_results(&source) {
            Err(FixtureError::Read { path, .. }) => {
                assert_eq!(path, PathBuf::from("does/not/exist.json"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

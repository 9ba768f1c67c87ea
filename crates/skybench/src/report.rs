use std::fmt;

use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use skybench_codec::{compress, GzipLevel};
use skybench_proto::PooledCodec;
use tracing::info;

use crate::payload::{encode_with, Encoding, PayloadPair};
use crate::SkybenchError;

/// Encoded size of one payload under one encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeEntry {
    pub encoding: Encoding,
    pub raw: usize,
    pub gzip: Vec<(GzipLevel, usize)>,
}

impl SizeEntry {
    fn measure(encoding: Encoding, bytes: &[u8], levels: &[GzipLevel]) -> Result<Self, SkybenchError> {
        let gzip = levels
            .iter()
            .map(|&level| -> Result<_, SkybenchError> {
                Ok((level, compress(bytes, level)?.len()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            encoding,
            raw: bytes.len(),
            gzip,
        })
    }

    #[must_use]
    pub fn gzip_len(&self, level: GzipLevel) -> Option<usize> {
        self.gzip
            .iter()
            .find(|(candidate, _)| *candidate == level)
            .map(|&(_, len)| len)
    }
}

/// Sizes of one payload across encodings and gzip levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    pub label: String,
    pub entries: Vec<SizeEntry>,
}

impl SizeReport {
    /// Measures every encoding of `pair`.
    pub fn measure<D, M>(
        label: impl Into<String>,
        pair: &mut PayloadPair<D, M>,
        levels: &[GzipLevel],
    ) -> Result<Self, SkybenchError>
    where
        D: Serialize + DeserializeOwned + PartialEq,
        M: Message + Default + PartialEq,
    {
        let entries = Encoding::ALL
            .into_iter()
            .map(|encoding| SizeEntry::measure(encoding, &pair.encode(encoding)?, levels))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::finish(label.into(), entries))
    }

    /// Measures the message encodings of a value with no domain counterpart.
    pub fn measure_message<M: Message + Default>(
        label: impl Into<String>,
        message: &M,
        levels: &[GzipLevel],
    ) -> Result<Self, SkybenchError> {
        let mut pooled = PooledCodec::with_capacity(message.encoded_len());
        let entries = Encoding::MESSAGE
            .into_iter()
            .map(|encoding| {
                let bytes = encode_with(encoding, message, &mut pooled)?;
                SizeEntry::measure(encoding, &bytes, levels)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::finish(label.into(), entries))
    }

    fn finish(label: String, entries: Vec<SizeEntry>) -> Self {
        for entry in &entries {
            info!(
                payload = %label,
                encoding = %entry.encoding,
                raw = entry.raw,
                gzip = ?entry.gzip,
                "measured payload size"
            );
        }
        Self { label, entries }
    }

    #[must_use]
    pub fn entry(&self, encoding: Encoding) -> Option<&SizeEntry> {
        self.entries.iter().find(|entry| entry.encoding == encoding)
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        for entry in &self.entries {
            write!(f, "  {}: {} bytes", entry.encoding, entry.raw)?;
            for (index, (level, len)) in entry.gzip.iter().enumerate() {
                let open = if index == 0 { " (gzip " } else { ", " };
                write!(f, "{open}{level} {len}")?;
            }
            if !entry.gzip.is_empty() {
                f.write_str(")")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::samples::simple_object;

    use super::*;

    #[test]
    fn message_report_covers_proto_encodings_only() {
        let report =
            SizeReport::measure_message("simple_object", &simple_object(), &GzipLevel::ALL)
                .expect("measure");

        assert!(report.entry(Encoding::Json).is_none());
        let plain = report.entry(Encoding::Proto).expect("proto entry");
        let pooled = report.entry(Encoding::PooledProto).expect("pooled entry");
        assert_eq!(plain.raw, pooled.raw);
        assert_eq!(plain.raw, simple_object().encoded_len());
        for level in GzipLevel::ALL {
            assert!(plain.gzip_len(level).is_some());
        }
    }

    #[test]
    fn display_lists_each_encoding() {
        let report = SizeReport {
            label: "object".to_owned(),
            entries: vec![SizeEntry {
                encoding: Encoding::Proto,
                raw: 40,
                gzip: vec![(GzipLevel::Fastest, 52), (GzipLevel::Best, 50)],
            }],
        };
        assert_eq!(
            report.to_string(),
            "object\n  proto: 40 bytes (gzip fastest 52, best 50)\n"
        );
    }
}

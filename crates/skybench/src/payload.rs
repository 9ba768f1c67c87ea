use std::fmt;

use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use skybench_codec::{decode_fast_json_copy, decode_json, encode_fast_json, encode_json};
use skybench_proto::{decode_message, encode_message, PooledCodec};
use tracing::trace;

use crate::SkybenchError;

/// The serialization strategies under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Json,
    FastJson,
    Proto,
    PooledProto,
}

impl Encoding {
    pub const ALL: [Self; 4] = [Self::Json, Self::FastJson, Self::Proto, Self::PooledProto];
    /// The encodings that work on the message tree alone.
    pub const MESSAGE: [Self; 2] = [Self::Proto, Self::PooledProto];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::FastJson => "fast_json",
            Self::Proto => "proto",
            Self::PooledProto => "pooled_proto",
        }
    }

    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json | Self::FastJson)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encodes `message` with one of the message encodings.
pub fn encode_with<M: Message + Default>(
    encoding: Encoding,
    message: &M,
    pooled: &mut PooledCodec<M>,
) -> Result<Vec<u8>, SkybenchError> {
    match encoding {
        Encoding::Proto => Ok(encode_message(message)?),
        Encoding::PooledProto => Ok(pooled.encode(message)?.to_vec()),
        Encoding::Json | Encoding::FastJson => Err(SkybenchError::UnsupportedEncoding { encoding }),
    }
}

/// A domain value together with the message converted from it.
#[derive(Debug)]
pub struct PayloadPair<D, M> {
    pub domain: D,
    pub message: M,
    pooled: PooledCodec<M>,
}

impl<D, M: Message + Default> PayloadPair<D, M> {
    pub fn new(domain: D, message: M) -> Self {
        let pooled = PooledCodec::with_capacity(message.encoded_len());
        Self {
            domain,
            message,
            pooled,
        }
    }
}

impl<D, M> PayloadPair<D, M>
where
    D: Serialize + DeserializeOwned + PartialEq,
    M: Message + Default + PartialEq,
{
    pub fn encode(&mut self, encoding: Encoding) -> Result<Vec<u8>, SkybenchError> {
        match encoding {
            Encoding::Json => Ok(encode_json(&self.domain)?),
            Encoding::FastJson => Ok(encode_fast_json(&self.domain)?),
            Encoding::Proto | Encoding::PooledProto => {
                encode_with(encoding, &self.message, &mut self.pooled)
            }
        }
    }

    /// Encodes and decodes with `encoding` and checks that the decoded value
    /// equals the original. Returns the encoded length.
    pub fn round_trip(&mut self, encoding: Encoding) -> Result<usize, SkybenchError> {
        let encoded = self.encode(encoding)?;
        let unchanged = match encoding {
            Encoding::Json => decode_json::<D>(&encoded)? == self.domain,
            Encoding::FastJson => decode_fast_json_copy::<D>(&encoded)? == self.domain,
            Encoding::Proto => decode_message::<M>(&encoded)? == self.message,
            Encoding::PooledProto => *self.pooled.decode(&encoded)? == self.message,
        };
        trace!(%encoding, bytes = encoded.len(), unchanged, "round trip");
        if unchanged {
            Ok(encoded.len())
        } else {
            Err(SkybenchError::RoundTrip { encoding })
        }
    }
}

#[cfg(test)]
mod tests {
    use skybench_model::samples::JsonObject;
    use skybench_proto::samples::{Object, SimpleObject};

    use super::*;

    fn object_pair() -> PayloadPair<JsonObject, Object> {
        let object = JsonObject {
            id: 15123,
            price: 0.412,
            datetime: Some(1_671_771_084),
            data: "abcdefghij".to_owned(),
        };
        let message = skybench_convert::object_to_proto(&object);
        PayloadPair::new(object, message)
    }

    #[test]
    fn every_encoding_round_trips() {
        let mut pair = object_pair();
        for encoding in Encoding::ALL {
            let len = pair.round_trip(encoding).expect("round trip");
            assert!(len > 0, "{encoding} produced no bytes");
        }
    }

    #[test]
    fn both_proto_encodings_emit_the_same_bytes() {
        let mut pair = object_pair();
        let plain = pair.encode(Encoding::Proto).expect("proto");
        let pooled = pair.encode(Encoding::PooledProto).expect("pooled");
        assert_eq!(plain, pooled);
    }

    #[test]
    fn json_encodings_are_rejected_for_bare_messages() {
        let mut pooled = PooledCodec::new();
        let error = encode_with(Encoding::Json, &SimpleObject::default(), &mut pooled)
            .expect_err("json needs a domain value");
        assert!(matches!(
            error,
            SkybenchError::UnsupportedEncoding {
                encoding: Encoding::Json
            }
        ));
    }
}

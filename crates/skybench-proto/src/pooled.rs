use bytes::BytesMut;
use prost::Message;

use crate::ProtoError;

/// Low-allocation codec for one message type.
///
/// Encoding writes into a scratch buffer that keeps its capacity between
/// calls, and decoding merges into a message that is cleared first, so
/// repeated fields and maps reuse the allocations of the previous decode
/// where `prost` allows it. Output is byte-identical to [`encode_message`].
///
/// [`encode_message`]: crate::encode_message
#[derive(Debug, Default)]
pub struct PooledCodec<M> {
    scratch: BytesMut,
    message: M,
}

impl<M: Message + Default> PooledCodec<M> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scratch: BytesMut::new(),
            message: M::default(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scratch: BytesMut::with_capacity(capacity),
            message: M::default(),
        }
    }

    /// Encodes `message` and returns a view of the scratch buffer, valid
    /// until the next call.
    pub fn encode(&mut self, message: &M) -> Result<&[u8], ProtoError> {
        self.scratch.clear();
        self.scratch.reserve(message.encoded_len());
        message.encode(&mut self.scratch)?;
        Ok(&self.scratch[..])
    }

    /// Decodes `bytes` into the reused message.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<&M, ProtoError> {
        self.message.clear();
        if let Err(error) = self.message.merge(bytes) {
            self.message.clear();
            return Err(error.into());
        }
        Ok(&self.message)
    }

    /// Capacity currently retained by the scratch buffer.
    #[must_use]
    pub fn retained_capacity(&self) -> usize {
        self.scratch.capacity()
    }

    /// Takes the last decoded message out, leaving a default one behind.
    pub fn take_message(&mut self) -> M {
        std::mem::take(&mut self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::PooledCodec;
    use crate::samples::{NestedObject, SimpleObject};
    use crate::{encode_message, ProtoError};

    fn sample() -> SimpleObject {
        SimpleObject {
            id: 853_528,
            price: 416.765_145_4,
            count: 6_851_943,
            ratio: 97.000_004_32,
            label: "Hello World!".to_owned(),
            nested: Some(NestedObject {
                index: 666,
                amount: 999_999,
                tag: "Yes".to_owned(),
            }),
            children: vec![NestedObject {
                index: 333,
                amount: 666_666,
                tag: "No".to_owned(),
            }],
        }
    }

    #[test]
    fn scratch_capacity_is_retained_between_encodes() {
        let mut codec = PooledCodec::<SimpleObject>::new();
        let first_len = codec.encode(&sample()).expect("encode").len();
        let capacity = codec.retained_capacity();
        assert!(capacity >= first_len);

        codec.encode(&SimpleObject::default()).expect("encode empty");
        assert_eq!(codec.retained_capacity(), capacity);
    }

    #[test]
    fn decode_does_not_leak_previous_message() {
        let mut codec = PooledCodec::<SimpleObject>::new();
        let full = encode_message(&sample()).expect("encode");
        let sparse = encode_message(&SimpleObject {
            id: 1,
            ..SimpleObject::default()
        })
        .expect("encode");

        assert_eq!(codec.decode(&full).expect("decode").children.len(), 1);
        let decoded = codec.decode(&sparse).expect("decode");
        assert_eq!(decoded.id, 1);
        assert!(decoded.children.is_empty());
        assert!(decoded.nested.is_none());
    }

    #[test]
    fn malformed_input_is_a_decode_error() {
        let mut codec = PooledCodec::<SimpleObject>::new();
        let error = codec.decode(&[0x0A, 0x05, 0x01]).expect_err("truncated field");
        assert!(matches!(error, ProtoError::Decode(_)));
        assert_eq!(codec.take_message(), SimpleObject::default());
    }
}

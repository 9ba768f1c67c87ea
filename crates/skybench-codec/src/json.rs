use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::CodecError;

pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(value)?)
}

pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn encode_fast_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(simd_json::serde::to_vec(value)?)
}

/// Decodes with the SIMD parser, which rewrites `bytes` in place while it
/// tokenises. Callers that need to keep the input pass a copy.
pub fn decode_fast_json<T: DeserializeOwned>(bytes: &mut [u8]) -> Result<T, CodecError> {
    Ok(simd_json::serde::from_slice(bytes)?)
}

/// [`decode_fast_json`] on a private copy of `bytes`.
pub fn decode_fast_json_copy<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    let mut scratch = bytes.to_vec();
    decode_fast_json(&mut scratch)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn both_encoders_agree_on_integers_and_text() {
        let mut value = HashMap::new();
        value.insert("id".to_owned(), 42_i64);

        let standard = encode_json(&value).expect("encode");
        let fast = encode_fast_json(&value).expect("encode");
        assert_eq!(standard, fast);

        let decoded: HashMap<String, i64> = decode_fast_json_copy(&standard).expect("decode");
        assert_eq!(decoded, value);
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(matches!(
            decode_json::<Vec<u32>>(b"[1, 2"),
            Err(CodecError::Json(_))
        ));
        assert!(matches!(
            decode_fast_json_copy::<Vec<u32>>(b"[1, 2"),
            Err(CodecError::FastJson(_))
        ));
    }
}

//! Generic decode / encode entry points shared by every schema type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::compare::first_difference;
use crate::error::{DecodeError, EncodeError, FixtureError};

/// Decode a JSON document into a schema value.
///
/// Unknown fields are ignored and missing fields are left absent; the call
/// only fails on malformed JSON or a value of the wrong type.
///
/// # Errors
///
/// Returns `DecodeError::Malformed` or `DecodeError::TypeMismatch`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode a JSON document held in a string.
pub fn decode_str<T: DeserializeOwned>(json: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a schema value as compact JSON.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(value)?)
}

/// Encode a schema value as indented JSON.
pub fn encode_pretty<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec_pretty(value)?)
}

/// Decode `bytes` as `T`, re-encode, and check the result is semantically
/// equal to the input.
///
/// Returns the re-encoded bytes on success.
///
/// # Errors
///
/// Returns `FixtureError::Decode` / `FixtureError::Encode` on codec failure and
/// `FixtureError::Mismatch` with the first differing path otherwise.
pub fn round_trip<T: DeserializeOwned + Serialize>(bytes: &[u8]) -> Result<Vec<u8>, FixtureError> {
    let value: T = decode(bytes)?;
    let encoded = encode(&value)?;
    verify_same(bytes, &encoded)?;
    Ok(encoded)
}

/// Field deserializer for containers that are always written: an explicit
/// `null` reads the same as an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Check that two encodings hold the same document.
pub(crate) fn verify_same(original: &[u8], encoded: &[u8]) -> Result<(), FixtureError> {
    let expected: Value = decode(original)?;
    let actual: Value = decode(encoded)?;
    match first_difference(&expected, &actual) {
        None => Ok(()),
        Some(difference) => Err(FixtureError::Mismatch { difference }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(skip_serializing_if = "Option::is_none")]
        ver: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        seq: Option<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Lossy {
        ver: String,
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let sample: Sample = decode(br#"{"ver":"1.2","unknownField":[1,2]}"#).unwrap();
        assert_eq!(sample.ver.as_deref(), Some("1.2"));
        assert_eq!(sample.seq, None);
    }

    #[test]
    fn decode_rejects_bad_input() {
        assert!(matches!(
            decode::<Sample>(b"{\"ver\":"),
            Err(DecodeError::Malformed { .. })
        ));
        assert!(matches!(
            decode_str::<Sample>(r#"{"seq":"1"}"#),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn encode_omits_absent_fields() {
        let bytes = encode(&Sample::default()).unwrap();
        assert_eq!(bytes, b"{}");
    }

    #[test]
    fn encode_pretty_indents() {
        let bytes = encode_pretty(&Sample {
            ver: Some("1.1".into()),
            seq: None,
        })
        .unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "{\n  \"ver\": \"1.1\"\n}");
    }

    #[test]
    fn round_trip_keeps_explicit_zero() {
        let out = round_trip::<Sample>(br#"{ "seq": 0, "ver": "1.2" }"#).unwrap();
        assert_eq!(out, br#"{"ver":"1.2","seq":0}"#);
    }

    #[test]
    fn round_trip_reports_dropped_field() {
        let err = round_trip::<Lossy>(br#"{"ver":"1.2","extra":true}"#).unwrap_err();
        match err {
            FixtureError::Mismatch { difference } => assert_eq!(difference.path, "/extra"),
            other => panic!("expected mismatch, got {other:?}"),
        }
    }
}

//! Body and query-string codec.
//!
//! The API speaks JSON on the wire. Decoding is forward compatible: unknown
//! fields are ignored, and failures carry the path of the offending field.

use bytes::Bytes;

use crate::Result;

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns [`crate::Error::Encoding`] if serialization fails, e.g. for a map
/// with non-string keys.
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes with path-aware error messages.
///
/// Missing or ill-typed fields yield [`crate::Error::Decoding`] naming the
/// exact field path (e.g. `results[0].groupId`).
///
/// # Errors
///
/// Returns [`crate::Error::Decoding`] if deserialization fails.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::decoding(e.path().to_string(), e.inner().to_string()))
}

/// Serialize a value to a query string with stable field ordering.
///
/// Fields serialize in declaration order, so the same value always produces
/// the same query string.
///
/// # Errors
///
/// Returns [`crate::Error::Encoding`] if serialization fails.
pub fn to_query_string<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_html_form::to_string(value).map_err(Into::into)
}

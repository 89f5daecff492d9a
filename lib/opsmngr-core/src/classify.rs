//! Response classification.
//!
//! A response has exactly two terminal classifications: a 2xx status passes
//! through for success-shape decoding, anything else becomes an
//! [`ApiError`]. Classification is a pure function of status and body, so it
//! can be tested exhaustively without a server.

use crate::{ApiError, Error, Response, Result};

/// Classify a raw response.
///
/// # Errors
///
/// Returns [`Error::Api`] for any non-2xx status: decoded from the wire
/// error shape when the body carries one, otherwise synthesized from the
/// status code with the raw body preserved.
pub fn into_result(response: Response) -> Result<Response> {
    if response.is_success() {
        return Ok(response);
    }
    let (status, _headers, body) = response.into_parts();
    Err(Error::Api(ApiError::from_response(status, body)))
}

/// Classify a response and decode the success body into `T`.
///
/// # Errors
///
/// Returns [`Error::Api`] for non-2xx responses and [`Error::Decoding`] when
/// a 2xx body does not match `T`.
pub fn json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let response = into_result(response)?;
    crate::body::from_json(response.body())
}

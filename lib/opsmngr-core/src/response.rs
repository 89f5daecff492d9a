//! Raw HTTP response as returned by a transport.
//!
//! A [`Response`] carries status, headers, and a fully buffered body; the
//! [classifier](crate::classify) decides whether the body holds a success
//! shape or an API error.

use std::collections::HashMap;

use bytes::Bytes;

/// HTTP response with status, headers, and buffered body.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume into the body.
    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Consume into (status, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (u16, HashMap<String, String>, Bytes) {
        (self.status, self.headers, self.body)
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Deserialize the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decoding`] if deserialization fails.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> crate::Result<T> {
        crate::body::from_json(&self.body)
    }

    /// The body as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid UTF-8.
    pub fn text(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_predicates() {
        let response = Response::new(200, HashMap::new(), Bytes::new());
        assert!(response.is_success());
        assert!(!response.is_client_error());

        let response = Response::new(404, HashMap::new(), Bytes::new());
        assert!(response.is_client_error());
        assert!(!response.is_success());

        let response = Response::new(503, HashMap::new(), Bytes::new());
        assert!(response.is_server_error());
    }

    #[test]
    fn header_lookup() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_owned(), "application/json".to_owned());
        let response = Response::new(200, headers, Bytes::new());

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn json_decodes_body() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Org {
            id: String,
            name: String,
        }

        let body = Bytes::from(r#"{"id":"5991","name":"acme"}"#);
        let response = Response::new(200, HashMap::new(), body);

        let org: Org = response.json().expect("decode");
        assert_eq!(
            org,
            Org {
                id: "5991".to_owned(),
                name: "acme".to_owned()
            }
        );
    }

    #[test]
    fn text_body() {
        let response = Response::new(200, HashMap::new(), Bytes::from("plain"));
        assert_eq!(response.text().expect("utf8"), "plain");
    }
}

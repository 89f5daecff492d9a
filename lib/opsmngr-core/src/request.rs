//! HTTP request descriptor.
//!
//! A [`Request`] is created per call through [`Request::builder`], consumed by
//! the transport, and never reused.
//!
//! # Example
//!
//! ```
//! use opsmngr_core::{Method, Request};
//!
//! let url = "https://cloud.example.com/api/public/v1.0/orgs".parse().unwrap();
//! let request = Request::builder(Method::Get, url)
//!     .header("Accept", "application/json")
//!     .query("pageNum", "1")
//!     .build();
//! ```

use std::collections::HashMap;

use bytes::Bytes;
use derive_more::Display;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET - retrieve a resource.
    #[display("GET")]
    Get,
    /// POST - create a resource.
    #[display("POST")]
    Post,
    /// PUT - replace a resource.
    #[display("PUT")]
    Put,
    /// PATCH - partially update a resource.
    #[display("PATCH")]
    Patch,
    /// DELETE - remove a resource.
    #[display("DELETE")]
    Delete,
    /// HEAD - retrieve headers only.
    #[display("HEAD")]
    Head,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
            Method::Head => Self::HEAD,
        }
    }
}

/// An HTTP request with method, absolute URL, headers, and optional body.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: url::Url) -> RequestBuilder {
        RequestBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers, e.g. for credential-injecting transports.
    #[must_use]
    pub const fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HashMap<String, String>, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Appends a query parameter to the URL (percent-encoded).
    #[must_use]
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(name, value);
        self
    }

    /// Appends multiple query parameters to the URL.
    #[must_use]
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        {
            let mut query = self.url.query_pairs_mut();
            for (name, value) in pairs {
                query.append_pair(&name, &value);
            }
        }
        self
    }

    /// Sets a raw body.
    #[must_use]
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `value` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Encoding`] if serialization fails.
    pub fn json<T: serde::Serialize + ?Sized>(self, value: &T) -> crate::Result<Self> {
        let body = crate::body::to_json(value)?;
        Ok(self.header("Content-Type", "application/json").body(body))
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

//! Bundled transport: pooled hyper client with rustls TLS.
//!
//! [`HyperTransport`] is the default request executor. It owns connection
//! pooling, TLS, and the owner-configured timeouts; the engine above it adds
//! no timers of its own.

use std::collections::HashMap;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use opsmngr_core::{CancellationToken, Error, Request, Response, Result, Transport};

use crate::config::TransportConfig;

/// Default [`Transport`] backed by a hyper connection pool.
#[derive(Clone)]
pub struct HyperTransport {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: TransportConfig,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// Create a transport with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    /// Create a transport with custom configuration.
    #[must_use]
    pub fn with_config(config: TransportConfig) -> Self {
        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(https_connector(&config));

        Self { inner, config }
    }

    /// The transport configuration.
    #[must_use]
    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn build_http_request(request: Request) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = body.map_or_else(Full::default, Full::new);
        builder
            .body(body)
            .map_err(|e| Error::transport(format!("invalid request: {e}")))
    }

    fn collect_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_owned()))
            })
            .collect()
    }

    fn map_client_error(err: &hyper_util::client::legacy::Error) -> Error {
        if err.is_connect() {
            Error::transport(format!("connection failed: {err}"))
        } else {
            Error::transport(err.to_string())
        }
    }

    async fn send(&self, request: Request) -> Result<Response> {
        let http_request = Self::build_http_request(request)?;

        let response = tokio::time::timeout(self.config.timeout, self.inner.request(http_request))
            .await
            .map_err(|_| Error::transport("request timed out"))?
            .map_err(|e| Self::map_client_error(&e))?;

        let status = response.status().as_u16();
        let headers = Self::collect_headers(response.headers());

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::transport(e.to_string()))?
            .to_bytes();

        Ok(Response::new(status, headers, body))
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HyperTransport {
    async fn execute(&self, request: Request, cancel: &CancellationToken) -> Result<Response> {
        tokio::select! {
            () = cancel.cancelled() => Err(Error::Cancelled),
            result = self.send(request) => result,
        }
    }
}

/// HTTPS connector with rustls and the Mozilla root certificates.
///
/// Plain HTTP stays allowed so the client can talk to Ops Manager instances
/// on private networks (and to test servers).
fn https_connector(config: &TransportConfig) -> HttpsConnector<HttpConnector> {
    let root_store: rustls::RootCertStore =
        webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();

    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let mut http = HttpConnector::new();
    http.enforce_http(false);
    http.set_connect_timeout(Some(config.connect_timeout));

    HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .wrap_connector(http)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn transport_default_config() {
        let transport = HyperTransport::new();
        assert_eq!(transport.config().timeout, Duration::from_secs(30));
    }

    #[test]
    fn transport_custom_config() {
        let config = TransportConfig::builder()
            .timeout(Duration::from_millis(250))
            .build();
        let transport = HyperTransport::with_config(config);
        assert_eq!(transport.config().timeout, Duration::from_millis(250));
    }

    #[test]
    fn transport_is_clone_and_debug() {
        let transport = HyperTransport::new();
        let _cloned = transport.clone();
        assert!(format!("{transport:?}").contains("HyperTransport"));
    }
}

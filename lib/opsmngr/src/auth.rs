//! Programmatic API key authentication.
//!
//! The engine treats authentication as opaque: whatever [`Transport`] the
//! caller hands the client is what signs requests. [`BasicAuth`] is the
//! bundled convenience for public/private API key pairs; deployments that
//! require digest auth supply their own transport instead.

use std::sync::Arc;

use base64::Engine;
use opsmngr_core::{CancellationToken, Request, Response, Result, Transport};

/// Public/private API key pair for programmatic access.
#[derive(Clone)]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// The public key half of the pair.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    fn encode(&self) -> String {
        let pair = format!("{}:{}", self.public_key, self.private_key);
        base64::engine::general_purpose::STANDARD.encode(pair)
    }
}

// The private key never appears in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Transport decorator adding `Authorization: Basic` credentials to every
/// request before delegating to the wrapped transport.
#[derive(Debug, Clone)]
pub struct BasicAuth<T> {
    inner: T,
    encoded_credentials: Arc<str>,
}

impl<T> BasicAuth<T> {
    /// Wrap a transport with the given credentials.
    #[must_use]
    pub fn new(inner: T, credentials: &Credentials) -> Self {
        Self {
            inner,
            encoded_credentials: Arc::from(credentials.encode()),
        }
    }

    /// Consume the decorator and return the wrapped transport.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Transport> Transport for BasicAuth<T> {
    async fn execute(&self, mut request: Request, cancel: &CancellationToken) -> Result<Response> {
        request.headers_mut().insert(
            "Authorization".to_owned(),
            format!("Basic {}", self.encoded_credentials),
        );
        self.inner.execute(request, cancel).await
    }
}

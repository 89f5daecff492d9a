//! Composition root: base configuration plus the generic request primitives.

use std::time::Instant;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{Instrument, Level, debug, warn};
use url::Url;

use opsmngr_core::{
    CancellationToken, ListOptions, Method, Page, Request, Response, Result, Transport, body,
    classify, path,
};

use crate::services::{Automation, Clusters, Organizations, Projects};
use crate::transport::HyperTransport;
use crate::walker::PageWalker;

/// Cloud Manager host used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://cloud.mongodb.com/";

/// Versioned path segment of the public API.
pub const API_PUBLIC_V1_PATH: &str = "api/public/v1.0";

const DEFAULT_USER_AGENT: &str = concat!("opsmngr/", env!("CARGO_PKG_VERSION"));

/// Client for the Ops Manager / Cloud Manager public API.
///
/// Holds the composed base URL, the user agent, and the transport. All three
/// are immutable after construction, so one client can be shared freely
/// across tasks; every operation takes an explicit [`CancellationToken`].
///
/// Domain operations hang off the service accessors
/// ([`organizations`](Self::organizations), [`projects`](Self::projects),
/// [`clusters`](Self::clusters), [`automation`](Self::automation)); each is
/// a thin layer over [`call`](Self::call) and [`list`](Self::list).
#[derive(Debug, Clone)]
pub struct Client<T = HyperTransport> {
    transport: T,
    base_url: Url,
    user_agent: String,
}

impl<T: Transport> Client<T> {
    /// Create a client against the Cloud Manager default host.
    ///
    /// # Errors
    ///
    /// Returns [`opsmngr_core::Error::InvalidBaseUrl`] if the composed base
    /// URL is malformed (possible only with a broken custom build).
    pub fn new(transport: T) -> Result<Self> {
        Self::builder(transport).build()
    }

    /// Create a client builder.
    #[must_use]
    pub fn builder(transport: T) -> ClientBuilder<T> {
        ClientBuilder {
            transport,
            base_url: None,
            version_path: None,
            user_agent: None,
        }
    }

    /// The composed base URL (host plus versioned path segment).
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The transport executing this client's requests.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for a relative operation path.
    ///
    /// # Errors
    ///
    /// Returns [`opsmngr_core::Error::InvalidPath`] if `path` cannot be
    /// joined onto the base URL.
    pub fn url(&self, path: &str) -> Result<Url> {
        path::join(&self.base_url, path)
    }

    /// The generic request primitive.
    ///
    /// Builds the URL from `path` and the optional `query`, encodes the
    /// optional `payload` as JSON, executes through the transport, classifies
    /// the response, and decodes the success body into `Out`.
    ///
    /// # Errors
    ///
    /// Any variant of [`opsmngr_core::Error`]; failures surface unchanged
    /// and nothing is retried.
    pub async fn call<Q, B, Out>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        query: Option<&Q>,
        payload: Option<&B>,
    ) -> Result<Out>
    where
        Q: Serialize + Sync + ?Sized,
        B: Serialize + Sync + ?Sized,
        Out: DeserializeOwned,
    {
        let url = self.build_url(path, query)?;
        let response = self.send(cancel, method, url, payload).await?;
        body::from_json(response.body())
    }

    /// The generic list primitive: one page of a paginated listing.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`call`](Self::call).
    pub async fn list<Out: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        path: &str,
        options: Option<&ListOptions>,
    ) -> Result<Page<Out>> {
        self.call(cancel, Method::Get, path, options, None::<&()>)
            .await
    }

    /// Walk a paginated listing page by page, starting at `path`.
    ///
    /// The first page is fetched lazily on the walker's first
    /// [`try_next`](PageWalker::try_next).
    ///
    /// # Errors
    ///
    /// Returns an error if `path` or `options` cannot be turned into a URL.
    pub fn walk<Out: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        path: &str,
        options: Option<&ListOptions>,
    ) -> Result<PageWalker<'_, T, Out>> {
        let url = self.build_url(path, options)?;
        Ok(PageWalker::new(self, cancel.clone(), url))
    }

    /// Walk the pages following an already-fetched envelope.
    ///
    /// The walker yields `page` itself first, then resolves its `next`
    /// links.
    #[must_use]
    pub fn walk_from<Out: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        page: Page<Out>,
    ) -> PageWalker<'_, T, Out> {
        PageWalker::from_page(self, cancel.clone(), page)
    }

    /// GET a resource.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`call`](Self::call).
    pub async fn get<Out: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        path: &str,
    ) -> Result<Out> {
        self.call(cancel, Method::Get, path, None::<&()>, None::<&()>)
            .await
    }

    /// POST a payload and decode the created resource.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`call`](Self::call).
    pub async fn post<B, Out>(
        &self,
        cancel: &CancellationToken,
        path: &str,
        payload: &B,
    ) -> Result<Out>
    where
        B: Serialize + Sync + ?Sized,
        Out: DeserializeOwned,
    {
        self.call(cancel, Method::Post, path, None::<&()>, Some(payload))
            .await
    }

    /// PUT a payload and decode the replaced resource.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`call`](Self::call).
    pub async fn put<B, Out>(
        &self,
        cancel: &CancellationToken,
        path: &str,
        payload: &B,
    ) -> Result<Out>
    where
        B: Serialize + Sync + ?Sized,
        Out: DeserializeOwned,
    {
        self.call(cancel, Method::Put, path, None::<&()>, Some(payload))
            .await
    }

    /// PATCH a payload and decode the updated resource.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`call`](Self::call).
    pub async fn patch<B, Out>(
        &self,
        cancel: &CancellationToken,
        path: &str,
        payload: &B,
    ) -> Result<Out>
    where
        B: Serialize + Sync + ?Sized,
        Out: DeserializeOwned,
    {
        self.call(cancel, Method::Patch, path, None::<&()>, Some(payload))
            .await
    }

    /// DELETE a resource, discarding any response body.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`call`](Self::call), minus decoding.
    pub async fn delete(&self, cancel: &CancellationToken, path: &str) -> Result<()> {
        let url = self.build_url(path, None::<&()>)?;
        self.send(cancel, Method::Delete, url, None::<&()>)
            .await
            .map(|_| ())
    }

    /// Organization operations.
    #[must_use]
    pub const fn organizations(&self) -> Organizations<'_, T> {
        Organizations::new(self)
    }

    /// Project ("group") operations.
    #[must_use]
    pub const fn projects(&self) -> Projects<'_, T> {
        Projects::new(self)
    }

    /// Cluster operations.
    #[must_use]
    pub const fn clusters(&self) -> Clusters<'_, T> {
        Clusters::new(self)
    }

    /// Automation configuration operations.
    #[must_use]
    pub const fn automation(&self) -> Automation<'_, T> {
        Automation::new(self)
    }

    pub(crate) async fn fetch_page<Out: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        url: Url,
    ) -> Result<Page<Out>> {
        let response = self.send(cancel, Method::Get, url, None::<&()>).await?;
        body::from_json(response.body())
    }

    fn build_url<Q: Serialize + ?Sized>(&self, path: &str, query: Option<&Q>) -> Result<Url> {
        let mut url = self.url(path)?;
        if let Some(query) = query {
            let encoded = body::to_query_string(query)?;
            if !encoded.is_empty() {
                url.set_query(Some(&encoded));
            }
        }
        Ok(url)
    }

    async fn send<B>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        url: Url,
        payload: Option<&B>,
    ) -> Result<Response>
    where
        B: Serialize + Sync + ?Sized,
    {
        let mut builder = Request::builder(method, url.clone())
            .header("Accept", "application/json")
            .header("User-Agent", self.user_agent.as_str());
        if let Some(payload) = payload {
            builder = builder.json(payload)?;
        }
        let request = builder.build();

        let span = tracing::span!(Level::DEBUG, "api_request", %method, %url);
        async {
            let start = Instant::now();
            debug!("sending request");

            let result = self.transport.execute(request, cancel).await;
            let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            match &result {
                Ok(response) if response.is_success() => {
                    debug!(status = response.status(), elapsed_ms, "request completed");
                }
                Ok(response) => {
                    warn!(
                        status = response.status(),
                        elapsed_ms, "request returned an error status"
                    );
                }
                Err(err) => {
                    warn!(error = %err, elapsed_ms, "request failed");
                }
            }

            classify::into_result(result?)
        }
        .instrument(span)
        .await
    }
}

/// Builder for [`Client`].
///
/// Unset fields fall back to the named defaults [`DEFAULT_BASE_URL`] and
/// [`API_PUBLIC_V1_PATH`].
#[derive(Debug)]
pub struct ClientBuilder<T> {
    transport: T,
    base_url: Option<String>,
    version_path: Option<String>,
    user_agent: Option<String>,
}

impl<T: Transport> ClientBuilder<T> {
    /// Set the base URL of the Ops Manager installation.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the versioned path segment appended to the base URL.
    #[must_use]
    pub fn version_path(mut self, version_path: impl Into<String>) -> Self {
        self.version_path = Some(version_path.into());
        self
    }

    /// Set the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Compose the base configuration and build the client.
    ///
    /// # Errors
    ///
    /// Returns [`opsmngr_core::Error::InvalidBaseUrl`] when the base URL is
    /// unparseable or not absolute.
    pub fn build(self) -> Result<Client<T>> {
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let version = self.version_path.as_deref().unwrap_or(API_PUBLIC_V1_PATH);
        let base_url = path::compose_base(base, version)?;

        Ok(Client {
            transport: self.transport,
            base_url,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::builder(HyperTransport::new())
            .base_url("https://ops.example.com/")
            .build()
            .expect("client")
    }

    #[test]
    fn defaults_to_cloud_manager() {
        let client = Client::new(HyperTransport::new()).expect("client");
        assert_eq!(
            client.base_url().as_str(),
            "https://cloud.mongodb.com/api/public/v1.0/"
        );
    }

    #[test]
    fn builder_overrides_base_url() {
        let client = client();
        assert_eq!(
            client.base_url().as_str(),
            "https://ops.example.com/api/public/v1.0/"
        );
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        let err = Client::builder(HyperTransport::new())
            .base_url("not a url")
            .build()
            .expect_err("invalid");
        assert!(matches!(err, opsmngr_core::Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn url_resolves_operation_paths() {
        let client = client();
        let url = client.url("groups/abc123/clusters").expect("url");
        assert_eq!(
            url.as_str(),
            "https://ops.example.com/api/public/v1.0/groups/abc123/clusters"
        );

        // Building URLs never mutates the base configuration.
        let again = client.url("groups/abc123/clusters").expect("url");
        assert_eq!(url, again);
    }
}

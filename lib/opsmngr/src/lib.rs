//! Typed async client for the Ops Manager and Cloud Manager REST API.
//!
//! Construct a [`Client`], then use the services hanging off it to access
//! the different parts of the API. Each service is a thin typed layer over
//! the client's generic request and list primitives.
//!
//! # Example
//!
//! ```ignore
//! use opsmngr::{BasicAuth, CancellationToken, Client, Credentials, HyperTransport};
//!
//! let credentials = Credentials::new("your public key", "your private key");
//! let transport = BasicAuth::new(HyperTransport::new(), &credentials);
//!
//! let client = Client::builder(transport)
//!     .base_url("https://opsmanager.example.com/")
//!     .build()?;
//!
//! let cancel = CancellationToken::new();
//! let orgs = client.organizations().list(&cancel, None).await?;
//! ```
//!
//! When no base URL is set, the client targets Cloud Manager
//! ([`DEFAULT_BASE_URL`]) with the public v1.0 path ([`API_PUBLIC_V1_PATH`]).
//!
//! # Authentication
//!
//! The library does not implement an authentication scheme of its own.
//! Whatever [`Transport`] is handed to the client signs the requests:
//! [`BasicAuth`] covers programmatic API key pairs, and deployments that
//! need digest auth (or client certificates, proxies, ...) plug in their own
//! `Transport` implementation.
//!
//! # Cancellation
//!
//! Every operation takes a [`CancellationToken`]. If the token fires while
//! a request is in flight, the request is aborted and the operation returns
//! [`Error::Cancelled`]. Use a fresh token per logical operation; cancelling
//! one never affects requests started from another.

mod auth;
mod client;
mod config;
pub mod prelude;
pub mod services;
mod transport;
mod walker;

pub use auth::{BasicAuth, Credentials};
pub use client::{API_PUBLIC_V1_PATH, Client, ClientBuilder, DEFAULT_BASE_URL};
pub use config::{TransportConfig, TransportConfigBuilder};
pub use transport::HyperTransport;
pub use walker::PageWalker;

// Re-export the wire-level vocabulary
pub use opsmngr_core::{
    ApiError, CancellationToken, Error, Link, ListOptions, Method, Page, Request, RequestBuilder,
    Response, Result, Template, Transport, classify, from_json, to_json, to_query_string,
};

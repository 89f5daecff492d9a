//! Core types for the `opsmngr` Ops Manager / Cloud Manager API client.
//!
//! This crate provides the wire-level vocabulary shared by every API
//! operation, with no I/O of its own:
//! - [`Request`] and [`RequestBuilder`] - per-call request descriptor
//! - [`Response`] - raw transport response
//! - [`Template`] and the [`path`] module - path templating and URL composition
//! - [`classify`] - success vs. structured-API-error classification
//! - [`Page`], [`Link`], [`ListOptions`] - paginated list envelope
//! - [`Error`], [`ApiError`], [`Result`] - error taxonomy
//! - [`Transport`] - the caller-supplied request-executing capability
//! - [`CancellationToken`] - explicit per-call cancellation signal

pub mod body;
pub mod classify;
mod error;
mod page;
pub mod path;
pub mod prelude;
mod request;
mod response;
mod transport;

pub use body::{from_json, to_json, to_query_string};
pub use error::{ApiError, Error, Result, UNKNOWN_ERROR_REASON};
pub use page::{Link, ListOptions, Page, REL_NEXT};
pub use path::{Template, compose_base};
pub use request::{Method, Request, RequestBuilder};
pub use response::Response;
pub use transport::{CancellationToken, Transport};

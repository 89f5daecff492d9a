//! Prelude module for convenient imports.
//!
//! ```ignore
//! use opsmngr::prelude::*;
//! ```

pub use crate::{
    ApiError, BasicAuth, CancellationToken, Client, Credentials, Error, HyperTransport, Link,
    ListOptions, Method, Page, PageWalker, Request, Response, Result, Transport, TransportConfig,
};

//! Prelude module for convenient imports.
//!
//! ```ignore
//! use opsmngr_core::prelude::*;
//! ```

pub use crate::{
    ApiError, CancellationToken, Error, Link, ListOptions, Method, Page, Request, RequestBuilder,
    Response, Result, Template, Transport, from_json, to_json, to_query_string,
};

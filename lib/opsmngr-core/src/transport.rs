//! Transport capability.
//!
//! A [`Transport`] delivers a built [`Request`] and hands back the raw
//! [`Response`] without interpreting the body. Authentication, TLS, and
//! proxying live entirely inside the implementation, so any
//! request-executing capability the caller supplies works: the bundled
//! hyper transport, a credential decorator around it, or a canned-response
//! fake in tests.

use std::future::Future;

pub use tokio_util::sync::CancellationToken;

use crate::{Request, Response, Result};

/// A request-executing capability.
///
/// Implementations are expected to be reentrant: a single transport may be
/// driven concurrently by many callers.
pub trait Transport: Send + Sync {
    /// Execute a request, observing the caller's cancellation signal.
    ///
    /// If `cancel` fires before the response is complete, the in-flight
    /// request is aborted and [`crate::Error::Cancelled`] is returned —
    /// never a partial success.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Transport`] for network failures and
    /// timeouts, [`crate::Error::Cancelled`] when the signal fires first.
    fn execute(
        &self,
        request: Request,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<Response>> + Send;
}

impl<T: Transport> Transport for &T {
    fn execute(
        &self,
        request: Request,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<Response>> + Send {
        (**self).execute(request, cancel)
    }
}

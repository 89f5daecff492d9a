//! Lazy traversal of linked result pages.

use futures_core::Stream;
use serde::de::DeserializeOwned;
use url::Url;

use opsmngr_core::{CancellationToken, Error, Page, Result, Transport};

use crate::client::Client;

/// Lazy, strictly sequential traversal of a paginated listing.
///
/// Each page is fetched through the owning [`Client`]'s pipeline only when
/// the caller asks for it, and page N+1 is never requested before page N has
/// completed. The traversal is finite and not restartable: once the last
/// page (one without a `next` link) has been yielded, or a fetch has failed,
/// the walker stays finished. Pages yielded before a failure remain valid.
pub struct PageWalker<'c, T, Out> {
    client: &'c Client<T>,
    cancel: CancellationToken,
    state: State<Out>,
}

enum State<Out> {
    /// An already-fetched page waiting to be yielded.
    Ready(Box<Page<Out>>),
    /// The URL of the page to fetch next.
    Fetch(Box<Url>),
    Finished,
}

impl<'c, T: Transport, Out: DeserializeOwned> PageWalker<'c, T, Out> {
    pub(crate) fn new(client: &'c Client<T>, cancel: CancellationToken, first: Url) -> Self {
        Self {
            client,
            cancel,
            state: State::Fetch(Box::new(first)),
        }
    }

    pub(crate) fn from_page(client: &'c Client<T>, cancel: CancellationToken, page: Page<Out>) -> Self {
        Self {
            client,
            cancel,
            state: State::Ready(Box::new(page)),
        }
    }

    /// The next page, or `None` once the final page has been yielded.
    ///
    /// # Errors
    ///
    /// Surfaces exactly the error a single-page fetch would have produced
    /// and finishes the walker; there is no implicit retry.
    pub async fn try_next(&mut self) -> Result<Option<Page<Out>>> {
        let page = match std::mem::replace(&mut self.state, State::Finished) {
            State::Finished => return Ok(None),
            State::Ready(page) => *page,
            State::Fetch(url) => self.client.fetch_page(&self.cancel, *url).await?,
        };

        self.state = match page.next_link() {
            Some(href) => State::Fetch(Box::new(parse_next(href)?)),
            None => State::Finished,
        };
        Ok(Some(page))
    }

    /// Drain every remaining page, flattening the items in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing page fetch; see [`try_next`](Self::try_next).
    pub async fn items(mut self) -> Result<Vec<Out>> {
        let mut items = Vec::new();
        while let Some(page) = self.try_next().await? {
            items.extend(page.results);
        }
        Ok(items)
    }

    /// Adapt the walker into a [`Stream`] of pages.
    pub fn into_stream(self) -> impl Stream<Item = Result<Page<Out>>> {
        futures_util::stream::try_unfold(self, |mut walker| async move {
            let next = walker.try_next().await?;
            Ok::<_, Error>(next.map(|page| (page, walker)))
        })
    }
}

fn parse_next(href: &str) -> Result<Url> {
    Url::parse(href).map_err(|e| Error::decoding("links", format!("bad next link '{href}': {e}")))
}

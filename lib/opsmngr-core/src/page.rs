//! Paginated list envelope.
//!
//! List endpoints answer with a shared envelope: the page's results in
//! server order, the collection's total count, and navigation links keyed by
//! relation name. A page without a `next` link is the last one.

use serde::{Deserialize, Serialize};

/// Relation name of the link pointing at the following page.
pub const REL_NEXT: &str = "next";

/// Navigation link attached to a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation name: `self`, `next`, or `previous`.
    pub rel: String,
    /// Absolute URL of the related page.
    pub href: String,
}

/// One page of a paginated list response.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Navigation links, keyed by relation name.
    #[serde(default)]
    pub links: Vec<Link>,
    /// Items of this page, in server order.
    #[serde(default)]
    pub results: Vec<T>,
    /// Total number of items in the whole collection, when reported.
    #[serde(rename = "totalCount", default)]
    pub total_count: Option<u64>,
}

impl<T> Page<T> {
    /// The href of the link with the given relation name.
    #[must_use]
    pub fn link(&self, rel: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel == rel)
            .map(|link| link.href.as_str())
    }

    /// The href of the following page, if there is one.
    #[must_use]
    pub fn next_link(&self) -> Option<&str> {
        self.link(REL_NEXT)
    }

    /// Returns `true` when a following page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next_link().is_some()
    }
}

/// Pagination controls accepted by every list operation.
///
/// Fields serialize in declaration order (`pageNum`, then `itemsPerPage`),
/// keeping built URLs deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    /// 1-based page number.
    #[serde(rename = "pageNum", skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u32>,
    /// Maximum number of items per page.
    #[serde(rename = "itemsPerPage", skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<u32>,
}

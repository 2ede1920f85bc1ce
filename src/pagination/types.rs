//! Pagination types
//!
//! The next-page decision made after each fetched page.

use crate::model::LinksMap;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available at this URL
    Continue {
        /// Fully qualified URL of the next page, taken from the server verbatim
        url: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a new URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::Continue { url: url.into() }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Resolve the next page URL from a page's links map
///
/// Never fails: an absent map, a missing `"next"` key, or an empty-string
/// value all mean the pagination chain has ended. The decision depends only
/// on the (immutable) map, so calling this twice yields the same result.
pub fn resolve_next(links: Option<&LinksMap>) -> NextPage {
    match links.and_then(LinksMap::next) {
        Some(url) => NextPage::with_url(url),
        None => NextPage::Done,
    }
}

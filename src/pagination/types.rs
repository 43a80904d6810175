//! Pagination types
//!
//! Defines the fetch budget and the page containers used by the fetcher.

use super::link::next_link;
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::HeaderMap;

/// Query parameter carrying the requested page size
pub const PAGE_SIZE_PARAM: &str = "max";

/// Remaining number of items a paginated fetch may still request.
///
/// A caller maximum of 0 means "everything the server has". Otherwise each
/// round trip asks for `min(ceiling, remaining)` items and then charges the
/// full ceiling against the budget, whatever the server actually returned.
/// The remaining count may go negative; that simply ends the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchBudget {
    remaining: i64,
    unbounded: bool,
}

impl FetchBudget {
    /// Budget for a caller maximum (0 = unbounded)
    pub fn new(max: usize) -> Self {
        Self {
            remaining: i64::try_from(max).unwrap_or(i64::MAX),
            unbounded: max == 0,
        }
    }

    /// Budget that only ends when the server stops paging
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// True when no caller maximum applies
    pub fn is_unbounded(&self) -> bool {
        self.unbounded
    }

    /// Items still allowed; meaningless when unbounded
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Whether another round trip may be made
    pub fn has_remaining(&self) -> bool {
        self.unbounded || self.remaining > 0
    }

    /// Page size to request next
    pub fn page_size(&self, ceiling: u32) -> u32 {
        if self.unbounded || self.remaining > i64::from(ceiling) {
            ceiling
        } else {
            self.remaining.max(0) as u32
        }
    }

    /// Charge one round trip against the budget
    pub fn consume(&mut self, ceiling: u32) {
        self.remaining = self.remaining.saturating_sub(i64::from(ceiling));
    }
}

/// One response body plus the continuation link found in its headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Raw response body
    pub body: Bytes,
    /// URL of the next page, if the server sent one
    pub next: Option<String>,
}

impl Page {
    /// Build a page from a response's headers and body
    pub fn from_response(headers: &HeaderMap, body: Bytes) -> Self {
        Self {
            body,
            next: next_link(headers),
        }
    }
}

/// Result of a paginated fetch: every page body fetched, in order, and the
/// error that stopped the fetch early, if any.
///
/// Pages present alongside an error are valid data; only the remainder is
/// missing.
#[derive(Debug, Default)]
pub struct PageSet {
    /// Page bodies in server order
    pub pages: Vec<Bytes>,
    /// Error that ended the fetch
    pub error: Option<Error>,
}

impl PageSet {
    /// Number of pages fetched
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True when no page was fetched
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// True when the fetch ended without an error
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Discard partial results if the fetch failed
    pub fn into_result(self) -> Result<Vec<Bytes>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.pages),
        }
    }
}

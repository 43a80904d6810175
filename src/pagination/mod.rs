//! Pagination module
//!
//! Follows `Link: <url>; rel="next"` headers across as many requests as it
//! takes to satisfy a caller's item budget.
//!
//! # Overview
//!
//! A paginated fetch starts at a collection URL and keeps requesting the
//! continuation URL the server hands back until either the server stops
//! sending one or the [`FetchBudget`] runs out. Every page body is kept
//! verbatim; if a later page fails, the pages already fetched are returned
//! together with the error in a [`PageSet`].

mod fetcher;
mod link;
mod types;

pub use link::{next_link, parse_link_header};
pub use types::{FetchBudget, Page, PageSet, PAGE_SIZE_PARAM};

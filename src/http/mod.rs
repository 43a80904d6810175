//! HTTP client module
//!
//! The request path shared by every call: URL and query construction,
//! mandatory headers, transport execution and status classification.
//!
//! # Features
//!
//! - **Mandatory headers**: bearer auth and JSON content type on every request
//! - **Query merging**: parameters already in the URL are kept, new ones appended
//! - **Status checks**: only `200 OK` and `204 No Content` succeed
//! - **Scoped bodies**: the response body is always released before returning

mod client;
mod query;

pub use client::{Client, CONTENT_TYPE_JSON};
pub use query::QueryParams;

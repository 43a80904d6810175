//! Common types used throughout the Spark client
//!
//! List endpoints answer with an envelope object holding a single `items`
//! array. A paginated list call decodes every page into that envelope and
//! flattens the results into a [`Listing`].

use crate::error::{Error, Result};
use crate::pagination::PageSet;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// List Envelope
// ============================================================================

/// Wire envelope of a list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList<T> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> ItemList<T> {
    /// Wrap items in an envelope
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

// ============================================================================
// Listing
// ============================================================================

/// Items gathered by a paginated list call.
///
/// When `error` is set the fetch stopped early; `items` still holds
/// everything fetched and decoded before that point, in server order.
#[derive(Debug)]
pub struct Listing<T> {
    items: Vec<T>,
    error: Option<Error>,
}

impl<T> Listing<T> {
    /// A listing that ended without error
    pub fn complete(items: Vec<T>) -> Self {
        Self { items, error: None }
    }

    /// A listing that ended early
    pub fn partial(items: Vec<T>, error: Error) -> Self {
        Self {
            items,
            error: Some(error),
        }
    }

    /// Items fetched, in server order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Take the items, dropping any error
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Error that ended the listing early
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// True when every page was fetched and decoded
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Number of items fetched
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no item was fetched
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Split into items and error
    pub fn into_parts(self) -> (Vec<T>, Option<Error>) {
        (self.items, self.error)
    }

    /// Strict view: the items, or the error if the listing ended early
    pub fn into_result(self) -> Result<Vec<T>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.items),
        }
    }
}

impl<T> IntoIterator for Listing<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode a single JSON document
pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(Error::Decode)
}

/// Decode and flatten the pages of a paginated fetch.
///
/// - a request error with no pages is returned as `Err`
/// - a request error after some pages ends the listing with that error
/// - the first page that fails to decode ends the listing; if a request error
///   also occurred both are kept as causes of [`Error::Multiple`]
pub(crate) fn collect_items<T: DeserializeOwned>(result: PageSet) -> Result<Listing<T>> {
    let PageSet { pages, error } = result;

    if pages.is_empty() {
        if let Some(err) = error {
            return Err(err);
        }
    }

    let mut items = Vec::new();
    for page in &pages {
        match decode::<ItemList<T>>(page) {
            Ok(list) => items.extend(list.items),
            Err(decode_err) => {
                debug!("Page failed to decode after {} items", items.len());
                let err = match error {
                    Some(request_err) => Error::combine(request_err, decode_err),
                    None => decode_err,
                };
                return Ok(Listing::partial(items, err));
            }
        }
    }

    Ok(match error {
        Some(err) => Listing::partial(items, err),
        None => Listing::complete(items),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: String,
    }

    fn page(ids: &[&str]) -> Bytes {
        let items: Vec<_> = ids.iter().map(|id| serde_json::json!({ "id": id })).collect();
        Bytes::from(serde_json::to_vec(&serde_json::json!({ "items": items })).unwrap())
    }

    fn ids(listing: &Listing<Item>) -> Vec<&str> {
        listing.items().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_item_list_missing_items_is_empty() {
        let list: ItemList<Item> = decode(b"{}").unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_collect_items_flattens_in_order() {
        let pages = PageSet {
            pages: vec![page(&["1", "2"]), page(&["3"])],
            error: None,
        };

        let listing = collect_items::<Item>(pages).unwrap();
        assert!(listing.is_complete());
        assert_eq!(ids(&listing), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_collect_items_error_without_pages() {
        let pages = PageSet {
            pages: Vec::new(),
            error: Some(Error::http_status(500, "boom")),
        };

        let err = collect_items::<Item>(pages).unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_collect_items_keeps_pages_before_request_error() {
        let pages = PageSet {
            pages: vec![page(&["1"]), page(&["2"])],
            error: Some(Error::http_status(500, "boom")),
        };

        let listing = collect_items::<Item>(pages).unwrap();
        assert_eq!(ids(&listing), vec!["1", "2"]);
        assert_eq!(listing.error().and_then(Error::status), Some(500));
    }

    #[test]
    fn test_collect_items_decode_error() {
        let pages = PageSet {
            pages: vec![page(&["1"]), Bytes::from_static(b"not json"), page(&["3"])],
            error: None,
        };

        let listing = collect_items::<Item>(pages).unwrap();
        assert_eq!(ids(&listing), vec!["1"]);
        assert!(matches!(listing.error(), Some(Error::Decode(_))));
    }

    #[test]
    fn test_collect_items_keeps_both_causes() {
        let pages = PageSet {
            pages: vec![Bytes::from_static(b"{")],
            error: Some(Error::http_status(502, "bad gateway")),
        };

        let listing = collect_items::<Item>(pages).unwrap();
        assert!(listing.is_empty());
        let causes = listing.error().unwrap().causes();
        assert_eq!(causes.len(), 2);
        assert_eq!(causes[0].status(), Some(502));
        assert!(matches!(causes[1], Error::Decode(_)));
    }

    #[test]
    fn test_listing_into_result() {
        let listing = Listing::complete(vec![1, 2, 3]);
        assert_eq!(listing.into_result().unwrap(), vec![1, 2, 3]);

        let listing = Listing::partial(vec![1], Error::config("stopped"));
        assert_eq!(listing.len(), 1);
        assert!(listing.into_result().is_err());
    }

    #[test]
    fn test_listing_into_parts() {
        let (items, error) = Listing::partial(vec!["a"], Error::config("x")).into_parts();
        assert_eq!(items, vec!["a"]);
        assert!(error.is_some());
    }
}

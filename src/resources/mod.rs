//! Resource accessors
//!
//! One module per resource family. Each family is an `async_trait` implemented
//! by [`Client`](crate::Client), so callers can substitute their own
//! implementation in tests.
//!
//! Every accessor checks its required fields before any request is sent. List
//! calls go through the paginated fetcher and return a
//! [`Listing`](crate::types::Listing).

mod messages;
mod people;
mod rooms;
mod webhooks;

pub use messages::{Message, MessageListParams, MessageUpdate, MessagesApi, NewMessage};
pub use people::{PeopleApi, PeopleListParams, Person};
pub use rooms::{Room, RoomListParams, RoomsApi};
pub use webhooks::{NewWebhook, Webhook, WebhooksApi};

use crate::error::{Error, Result};
use crate::http::QueryParams;

/// Fail with a missing-field error when `value` is empty
pub(crate) fn require(value: &str, field: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::missing_field(field));
    }
    Ok(())
}

/// Add `key=value` when the value is present and non-empty
pub(crate) fn add_filter(query: &mut QueryParams, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        query.add(key, value);
    }
}

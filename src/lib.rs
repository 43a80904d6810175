// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # Spark API client
//!
//! A typed async client for the Cisco Spark (Webex Teams) REST API, covering
//! people, rooms, messages and webhooks.
//!
//! ## Features
//!
//! - **Typed resources**: one `async_trait` per resource family, implemented by [`Client`]
//! - **Link-header pagination**: list calls follow `rel="next"` links up to a caller budget
//! - **Partial results**: a failing page keeps everything fetched before it
//! - **Injectable transport**: swap the HTTP stack for tests or custom policies
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spark_api::{Client, MessagesApi, NewMessage, RoomsApi, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("my-token")?;
//!
//!     // All rooms, 25 per request
//!     let rooms = client.with_max_per_page(25).list_rooms(0, None).await?;
//!     for room in rooms.items() {
//!         println!("{} {}", room.id, room.title);
//!     }
//!
//!     let lobby = client.get_room_by_name("Lobby").await?;
//!     client
//!         .create_message(&NewMessage::to_room(&lobby.id, "hello"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │   PeopleApi    RoomsApi    MessagesApi    WebhooksApi       │
//! └─────────────────────────────────────────────────────────────┘
//!               │                              │
//!      ┌────────┴────────┐           ┌─────────┴─────────┐
//!      │  Request path   │◄──────────│ Paginated fetcher │
//!      │ headers, status │           │ budget, Link: next│
//!      └────────┬────────┘           └───────────────────┘
//!               │
//!      ┌────────┴────────┐
//!      │    Transport    │  reqwest, or anything injected
//!      └─────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Client configuration
pub mod config;

/// Transport abstraction and the reqwest implementation
pub mod transport;

/// Request builder and single-request path
pub mod http;

/// Link-header pagination
pub mod pagination;

/// List envelopes and partial results
pub mod types;

/// People, rooms, messages and webhooks
pub mod resources;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result};
pub use http::{Client, QueryParams};
pub use pagination::PageSet;
pub use resources::{
    Message, MessageListParams, MessageUpdate, MessagesApi, NewMessage, NewWebhook, PeopleApi,
    PeopleListParams, Person, Room, RoomListParams, RoomsApi, Webhook, WebhooksApi,
};
pub use transport::{ReqwestTransport, Transport};
pub use types::Listing;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

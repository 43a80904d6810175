//! Transport module
//!
//! The seam between the client and the network: send one request, get one
//! response. The client owns its transport as an injected `Arc<dyn Transport>`,
//! so tests and production code never share a global handle.
//!
//! # Features
//!
//! - **Transport trait**: any HTTP stack can be plugged in
//! - **Scoped bodies**: response bodies are released on every exit path
//! - **Reqwest backend**: the default transport used by [`Client::new`](crate::Client::new)

mod body;
mod reqwest_transport;
mod types;

pub use body::{read_to_end, BodyGuard, BytesBody, ReleaseHandle, ResponseBody};
pub use reqwest_transport::ReqwestTransport;
pub use types::{Request, Response, Transport};

#[cfg(test)]
pub(crate) mod mock;

//! Response bodies as scoped resources

use crate::error::BoxError;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// An unread response body.
///
/// `release` frees the underlying connection or stream. It must be idempotent.
#[async_trait]
pub trait ResponseBody: Send {
    /// Read the remaining body into memory
    async fn read_all(&mut self) -> std::result::Result<Bytes, BoxError>;

    /// Release the underlying resource
    fn release(&mut self);
}

/// Owns a body and releases it when dropped, whether or not reading succeeded.
pub struct BodyGuard {
    body: Box<dyn ResponseBody>,
}

impl BodyGuard {
    /// Take ownership of a body
    pub fn new(body: Box<dyn ResponseBody>) -> Self {
        Self { body }
    }

    /// Read the whole body
    pub async fn read_all(&mut self) -> std::result::Result<Bytes, BoxError> {
        self.body.read_all().await
    }
}

impl Drop for BodyGuard {
    fn drop(&mut self) {
        self.body.release();
    }
}

/// Read a body to the end, then release it
pub async fn read_to_end(body: Box<dyn ResponseBody>) -> std::result::Result<Bytes, BoxError> {
    let mut guard = BodyGuard::new(body);
    guard.read_all().await
}

/// Observes whether a body has been released
#[derive(Debug, Clone, Default)]
pub struct ReleaseHandle(Arc<AtomicBool>);

impl ReleaseHandle {
    /// True once `release` has been called on the owning body
    pub fn is_released(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub(crate) fn mark(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// In-memory body, useful for custom transports and tests
#[derive(Debug)]
pub struct BytesBody {
    data: Option<Bytes>,
    released: ReleaseHandle,
}

impl BytesBody {
    /// Wrap a byte buffer
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: Some(data.into()),
            released: ReleaseHandle::default(),
        }
    }

    /// A body with no content
    pub fn empty() -> Self {
        Self::new(Bytes::new())
    }

    /// Handle reporting whether this body was released
    pub fn release_handle(&self) -> ReleaseHandle {
        self.released.clone()
    }
}

#[async_trait]
impl ResponseBody for BytesBody {
    async fn read_all(&mut self) -> std::result::Result<Bytes, BoxError> {
        Ok(self.data.take().unwrap_or_default())
    }

    fn release(&mut self) {
        self.data = None;
        self.released.mark();
    }
}

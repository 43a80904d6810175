//! In-crate mock transport for unit tests

use super::body::{BytesBody, ReleaseHandle, ResponseBody};
use super::types::{Request, Response, Transport};
use crate::error::BoxError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderValue, LINK};
use reqwest::StatusCode;
use serde::Serialize;
use std::sync::{Arc, Mutex};

pub(crate) const MOCK_ERROR: &str = "mock error";

type Handler = dyn Fn(&Request, usize) -> Result<Response, BoxError> + Send + Sync;

/// Answers each request with a closure; `call` is 1-based.
pub(crate) struct MockTransport {
    handler: Box<Handler>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub(crate) fn new(
        handler: impl Fn(&Request, usize) -> Result<Response, BoxError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Transport whose every send fails
    pub(crate) fn failing() -> Arc<Self> {
        Self::new(|_, _| Err(MOCK_ERROR.into()))
    }

    /// Transport that must never be reached
    pub(crate) fn unreachable() -> Arc<Self> {
        Self::new(|req, _| panic!("unexpected request to {}", req.url))
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> Request {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: Request) -> Result<Response, BoxError> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };
        (self.handler)(&request, call)
    }
}

/// Body whose read always fails
pub(crate) struct FailingBody {
    released: ReleaseHandle,
}

impl FailingBody {
    pub(crate) fn new() -> (Self, ReleaseHandle) {
        let released = ReleaseHandle::default();
        (
            Self {
                released: released.clone(),
            },
            released,
        )
    }
}

#[async_trait]
impl ResponseBody for FailingBody {
    async fn read_all(&mut self) -> Result<Bytes, BoxError> {
        Err(MOCK_ERROR.into())
    }

    fn release(&mut self) {
        self.released.mark();
    }
}

/// 200 response with a plain body
pub(crate) fn ok(body: impl Into<Bytes>) -> Response {
    Response::new(StatusCode::OK, BytesBody::new(body))
}

/// 200 response with a JSON body
pub(crate) fn json<T: Serialize>(value: &T) -> Response {
    ok(serde_json::to_vec(value).unwrap())
}

/// Response with an arbitrary status and body
pub(crate) fn status(code: u16, body: impl Into<Bytes>) -> Response {
    Response::new(StatusCode::from_u16(code).unwrap(), BytesBody::new(body))
}

/// Add a `Link: <url>; rel="next"` header
pub(crate) fn with_next(response: Response, url: &str) -> Response {
    response.with_header(
        LINK,
        HeaderValue::from_str(&format!("<{url}>; rel=\"next\"")).unwrap(),
    )
}

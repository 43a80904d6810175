//! Default transport backed by reqwest

use super::body::ResponseBody;
use super::types::{Request, Response, Transport};
use crate::config::ClientConfig;
use crate::error::{BoxError, Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::trace;

/// Transport that sends requests with a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wrap an existing reqwest client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a reqwest client using the config's timeout and user agent
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> std::result::Result<Response, BoxError> {
        let Request {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        trace!("Response head received: {}", response.status());

        Ok(Response {
            status: response.status(),
            headers: response.headers().clone(),
            body: Box::new(ReqwestBody {
                response: Some(response),
            }),
        })
    }
}

/// Body of a live reqwest response; dropping the response frees the connection
struct ReqwestBody {
    response: Option<reqwest::Response>,
}

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn read_all(&mut self) -> std::result::Result<Bytes, BoxError> {
        match self.response.take() {
            Some(response) => Ok(response.bytes().await?),
            None => Ok(Bytes::new()),
        }
    }

    fn release(&mut self) {
        self.response = None;
    }
}

//! Spark API client and its single-request path
//!
//! Every call, paginated or not, goes through [`Client::execute`]:
//! - bearer auth and JSON content type are set, replacing any existing values
//! - the response body is read fully and released on every exit path
//! - anything other than `200` or `204` becomes [`Error::HttpStatus`]

use super::query::QueryParams;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::transport::{read_to_end, ReqwestTransport, Request, Response, Transport};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Content type sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Client for the Spark REST API.
///
/// Cheap to clone; clones share the transport. Configuration never changes
/// in place: [`with_max_per_page`](Self::with_max_per_page) returns a new client.
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client for `token` using the default reqwest transport
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(token))
    }

    /// Create a client from a config using the default reqwest transport
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::from_config(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client with an injected transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Create a client configured from `SPARK_TOKEN` and friends
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// A copy of this client with a different page-size ceiling.
    ///
    /// ```rust,ignore
    /// let people = client.with_max_per_page(25).list_people(50, None).await?;
    /// ```
    #[must_use]
    pub fn with_max_per_page(&self, max: u32) -> Self {
        Self {
            config: self.config.with_max_per_page(max),
            transport: Arc::clone(&self.transport),
        }
    }

    /// URL of a resource collection
    pub(crate) fn collection_url(&self, resource: &str) -> String {
        self.config.endpoint(resource)
    }

    /// URL of a single resource
    pub(crate) fn item_url(&self, resource: &str, id: &str) -> String {
        format!("{}/{}", self.config.endpoint(resource), id)
    }

    /// Build a request: parse the URL, merge query parameters into it and set
    /// the mandatory headers.
    pub fn build_request(
        &self,
        method: Method,
        url: &str,
        params: Option<&QueryParams>,
        body: Option<Bytes>,
    ) -> Result<Request> {
        let mut url = Url::parse(url)?;
        if let Some(params) = params {
            params.merge_into(&mut url);
        }

        let mut request = Request::new(method, url);
        self.apply_headers(&mut request.headers)?;
        request.body = body;
        Ok(request)
    }

    pub(crate) fn apply_headers(&self, headers: &mut HeaderMap) -> Result<()> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.config.token()))
            .map_err(|_| Error::config("token contains characters not allowed in a header"))?;
        auth.set_sensitive(true);

        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        Ok(())
    }

    /// Send a built request and return the response headers and body.
    ///
    /// Transport failures are returned before any body exists. Otherwise the
    /// body is read and released before the status is checked, so protocol
    /// errors can carry the body text.
    pub(crate) async fn execute(&self, request: Request) -> Result<(HeaderMap, Bytes)> {
        debug!("Sending request: {} {}", request.method, request.url.path());

        let Response {
            status,
            headers,
            body,
        } = self
            .transport
            .send(request)
            .await
            .map_err(Error::transport)?;

        let bytes = read_to_end(body).await.map_err(Error::body_read)?;

        if status != StatusCode::OK && status != StatusCode::NO_CONTENT {
            return Err(Error::http_status(
                status.as_u16(),
                String::from_utf8_lossy(&bytes),
            ));
        }

        debug!("Request succeeded: {} ({} bytes)", status.as_u16(), bytes.len());
        Ok((headers, bytes))
    }

    /// Make a single request and return the raw response body
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        params: Option<&QueryParams>,
        body: Option<Bytes>,
    ) -> Result<Bytes> {
        let request = self.build_request(method, url, params, body)?;
        let (_, bytes) = self.execute(request).await?;
        Ok(bytes)
    }

    /// Make a GET request
    pub async fn get(&self, url: &str, params: Option<&QueryParams>) -> Result<Bytes> {
        self.request(Method::GET, url, params, None).await
    }

    /// Make a POST request with a JSON body
    pub async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<Bytes> {
        let body = encode(body)?;
        self.request(Method::POST, url, None, Some(body)).await
    }

    /// Make a PUT request with a JSON body
    pub async fn put_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<Bytes> {
        let body = encode(body)?;
        self.request(Method::PUT, url, None, Some(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, url: &str) -> Result<Bytes> {
        self.request(Method::DELETE, url, None, None).await
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Error::Encode)
}

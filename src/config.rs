//! Client configuration
//!
//! A [`ClientConfig`] is an immutable value: the auth token, the API base URL
//! and the page-size ceiling used by paginated list calls. Changing any of
//! them produces a new value; clients already holding the old one are
//! unaffected.

use crate::error::{Error, Result};
use std::fmt;
use std::time::Duration;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.ciscospark.com/v1";

/// Default number of items requested per page
pub const DEFAULT_MAX_PER_PAGE: u32 = 50;

/// Environment variable holding the auth token
pub const TOKEN_ENV: &str = "SPARK_TOKEN";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "SPARK_BASE_URL";

/// Environment variable overriding the page-size ceiling
pub const MAX_PER_PAGE_ENV: &str = "SPARK_MAX_PER_PAGE";

/// Configuration shared by every call made through a client
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    token: String,
    base_url: String,
    max_per_page: u32,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    /// Create a config with defaults for everything but the token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_per_page: DEFAULT_MAX_PER_PAGE,
            timeout: Duration::from_secs(30),
            user_agent: format!("spark-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a config builder
    pub fn builder(token: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(token),
        }
    }

    /// Load a config from `SPARK_TOKEN` and the optional overrides
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::config(format!("{TOKEN_ENV} is not set")))?;

        let mut builder = Self::builder(token);

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(base_url);
        }

        if let Ok(raw) = std::env::var(MAX_PER_PAGE_ENV) {
            let max = raw.parse::<u32>().map_err(|e| {
                Error::config(format!("invalid {MAX_PER_PAGE_ENV} value {raw:?}: {e}"))
            })?;
            builder = builder.max_per_page(max);
        }

        Ok(builder.build())
    }

    /// Auth token sent as a bearer credential
    pub fn token(&self) -> &str {
        &self.token
    }

    /// API root, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Page-size ceiling for paginated requests
    pub fn max_per_page(&self) -> u32 {
        self.max_per_page
    }

    /// Per-request timeout applied by the default transport
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// User agent applied by the default transport
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Copy of this config with a different page-size ceiling.
    ///
    /// The ceiling never drops below 1.
    #[must_use]
    pub fn with_max_per_page(&self, max: u32) -> Self {
        Self {
            max_per_page: max.max(1),
            ..self.clone()
        }
    }

    /// Full URL for a resource collection, e.g. `people`
    pub fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("max_per_page", &self.max_per_page)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the page-size ceiling (0 is raised to 1)
    #[must_use]
    pub fn max_per_page(mut self, max: u32) -> Self {
        self.config.max_per_page = max.max(1);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Serializes tests that read or write the `SPARK_*` environment
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

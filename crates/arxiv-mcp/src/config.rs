//! Configuration for the arXiv MCP server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv query endpoint.
    pub const QUERY_URL: &str = "http://export.arxiv.org/api/query";

    /// Path of the query endpoint relative to the API host.
    pub const QUERY_PATH: &str = "/api/query";

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!("arxiv-mcp/", env!("CARGO_PKG_VERSION"));

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Retries for transient failures (connection resets, 5xx).
    pub const MAX_RETRIES: u32 = 3;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Tool parameter limits and defaults.
pub mod limits {
    /// Default number of papers returned by search tools.
    pub const DEFAULT_MAX_RESULTS: u32 = 5;

    /// Upper bound for `max_results` on a single call.
    pub const MAX_RESULTS_LIMIT: u32 = 100;

    /// Upper bound on identifiers accepted by `get_papers_by_ids`.
    pub const MAX_IDS: usize = 100;

    /// Characters of abstract kept in search listings.
    pub const ABSTRACT_PREVIEW_CHARS: usize = 250;
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the arXiv query endpoint (overridable for mock servers).
    pub api_url: String,

    /// User agent header value.
    pub user_agent: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Retries for transient failures.
    pub max_retries: u32,
}

impl Config {
    /// Create a configuration pointing at the given endpoint, or the public
    /// arXiv API when `None`.
    #[must_use]
    pub fn new(api_url: Option<String>) -> Self {
        Self {
            api_url: api_url.unwrap_or_else(|| api::QUERY_URL.to_string()),
            user_agent: api::USER_AGENT.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: api::MAX_RETRIES,
        }
    }

    /// Create a test configuration with a custom host for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}{}", base_url.trim_end_matches('/'), api::QUERY_PATH),
            user_agent: api::USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: 0, // Fail fast in tests
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if `ARXIV_API_URL` is set but is not a valid URL.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self::new(std::env::var("ARXIV_API_URL").ok());
        config.validate()?;
        Ok(config)
    }

    /// Check that the endpoint is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns error describing the invalid endpoint.
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = url::Url::parse(&self.api_url)
            .map_err(|e| anyhow::anyhow!("invalid arXiv API URL '{}': {e}", self.api_url))?;

        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("arXiv API URL must use http or https, got '{}'", url.scheme());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

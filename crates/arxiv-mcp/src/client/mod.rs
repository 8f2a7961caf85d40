//! arXiv API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff for transient failures
//! - Atom feed parsing into [`Feed`] / [`Paper`] records
//!
//! Every public method issues exactly one logical GET against the query endpoint.
//!
//! [`Paper`]: crate::models::Paper

pub mod atom;
pub mod query;

use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

pub use query::{SearchQuery, id_list_params};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::Feed;

/// Fallback wait when a 429 carries no usable `Retry-After` (arXiv asks for 3s between calls).
const DEFAULT_RETRY_AFTER_SECS: u64 = 3;

/// arXiv API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Query endpoint URL.
    api_url: String,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint is invalid or HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/atom+xml"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self { client, api_url: config.api_url })
    }

    /// Endpoint this client talks to.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Run a `search_query` request.
    ///
    /// # Errors
    ///
    /// Returns error on API failure or an unparseable feed.
    pub async fn search(&self, query: &SearchQuery) -> ClientResult<Feed> {
        tracing::debug!(search_query = %query.search_query(), "Searching arXiv");
        self.get_feed(&query.to_params()).await
    }

    /// Fetch papers by identifier in one `id_list` request.
    ///
    /// Identifiers arXiv does not know are simply absent from the result.
    ///
    /// # Errors
    ///
    /// Returns error on API failure or an unparseable feed.
    pub async fn fetch_by_ids(&self, ids: &[String]) -> ClientResult<Feed> {
        if ids.is_empty() {
            return Ok(Feed::default());
        }

        tracing::debug!(count = ids.len(), "Fetching arXiv papers by id");
        self.get_feed(&id_list_params(ids)).await
    }

    /// Make a GET request and parse the Atom body.
    async fn get_feed(&self, params: &[(String, String)]) -> ClientResult<Feed> {
        let response = self.client.get(&self.api_url).query(params).send().await?;

        let response = self.handle_response(response).await?;
        let body = response.text().await?;

        atom::parse_feed(&body)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        tracing::warn!(status = status.as_u16(), url = %response.url(), "arXiv API returned an error status");

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient").field("api_url", &self.api_url).finish()
    }
}

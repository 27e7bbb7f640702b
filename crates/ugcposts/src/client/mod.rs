//! HTTP client for the `listugcposts` review endpoint.

mod fetch_all;

use std::time::Duration;

use reqwest::Client;

use crate::endpoint::{listugcposts_url, DEFAULT_BASE_URL};
use crate::envelope::parse_page;
use crate::error::ScrapeError;
use crate::types::{ContinuationToken, RawPage, SortOrder};

/// Minimum spacing between successive page fetches.
///
/// The endpoint publishes no rate-limit contract but empirically throttles
/// faster cadences, so this is a protocol constant rather than a tunable.
pub(crate) const INTER_PAGE_DELAY_MS: u64 = 1000;

/// Client for the review endpoint.
///
/// Handles the anti-hijacking guard, the positional response envelope, and
/// HTTP status mapping as typed errors. Owns no state beyond the connection
/// pool; each pagination run keeps its own accumulator and token, so one
/// client can drive concurrent scrape sessions.
pub struct ReviewsClient {
    client: Client,
    base_url: String,
    inter_page_delay_ms: u64,
}

impl ReviewsClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g. invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom endpoint origin (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            inter_page_delay_ms: INTER_PAGE_DELAY_MS,
        })
    }

    /// Overrides the inter-page delay. Test hook: production callers keep
    /// the default spacing to stay under the endpoint's informal rate limit.
    #[must_use]
    pub fn with_inter_page_delay_ms(mut self, delay_ms: u64) -> Self {
        self.inter_page_delay_ms = delay_ms;
        self
    }

    /// Fetches and parses a single review page.
    ///
    /// `token` is `None` for the first page. `page` is 1-based and used
    /// only for error context.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::PlaceTokenMissing`] when `place_url` carries no
    ///   token marker (no request is made).
    /// - [`ScrapeError::RateLimited`] on HTTP 429 (not retried).
    /// - [`ScrapeError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ScrapeError::Http`] on network or TLS failure.
    /// - [`ScrapeError::MissingGuardPrefix`] / [`ScrapeError::Deserialize`]
    ///   when the body does not match the expected envelope.
    pub async fn fetch_page(
        &self,
        place_url: &str,
        sort: SortOrder,
        token: Option<&ContinuationToken>,
        query: &str,
        page: u32,
    ) -> Result<RawPage, ScrapeError> {
        let url = listugcposts_url(&self.base_url, place_url, sort, token, query)?;

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(ScrapeError::RateLimited {
                page,
                url,
                retry_after_secs,
            });
        }

        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                page,
                url,
            });
        }

        let body = response.text().await?;
        parse_page(&body, &url, page)
    }
}

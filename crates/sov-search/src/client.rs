//! HTTP client for Apify's synchronous actor-run API.
//!
//! Each search runs an actor through `run-sync-get-dataset-items`, which
//! blocks until the run finishes and returns the dataset as a JSON array.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sov_core::ResultRecord;

use crate::error::SearchError;
use crate::normalize::{normalize_google_pages, normalize_youtube_items};
use crate::retry::retry_with_backoff;
use crate::types::{GoogleSearchInput, GoogleSearchPage, YoutubeSearchInput, YoutubeVideoItem};

const DEFAULT_BASE_URL: &str = "https://api.apify.com/";
pub const GOOGLE_SEARCH_ACTOR: &str = "apify~google-search-scraper";
pub const YOUTUBE_SEARCH_ACTOR: &str = "streamers~youtube-scraper";

/// Client for running Apify search actors.
///
/// Use [`ApifyClient::new`] for production or [`ApifyClient::with_base_url`]
/// to point at a mock server in tests.
pub struct ApifyClient {
    client: Client,
    token: String,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl ApifyClient {
    /// Creates a new client pointed at the production Apify API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(token: &str, timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_base_url(token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`SearchError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        token: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("sov/0.1 (share-of-voice)")
            .build()?;

        // Exactly one trailing slash so `Url::join` appends to the path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| SearchError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url,
            max_retries: 0,
            backoff_base_ms: 1_000,
        })
    }

    /// Enables retries on transient failures.
    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Runs a Google search and returns up to `max_results` organic results
    /// as web records, in ranking order.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure or non-2xx status.
    /// - [`SearchError::Deserialize`] if the dataset is not the expected shape.
    pub async fn search_google(
        &self,
        query: &str,
        max_results: usize,
        country_code: &str,
    ) -> Result<Vec<ResultRecord>, SearchError> {
        let input = GoogleSearchInput {
            queries: query.to_owned(),
            results_per_page: max_results,
            max_pages_per_query: 1,
            country_code: country_code.to_lowercase(),
        };
        let pages: Vec<GoogleSearchPage> = self.run_actor(GOOGLE_SEARCH_ACTOR, &input).await?;
        Ok(normalize_google_pages(pages, max_results))
    }

    /// Runs a YouTube search and returns up to `max_results` videos as video
    /// records, in ranking order.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure or non-2xx status.
    /// - [`SearchError::Deserialize`] if the dataset is not the expected shape.
    pub async fn search_youtube(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<ResultRecord>, SearchError> {
        let input = YoutubeSearchInput {
            search_queries: vec![query.to_owned()],
            max_results,
            max_results_shorts: 0,
            max_result_streams: 0,
        };
        let items: Vec<YoutubeVideoItem> = self.run_actor(YOUTUBE_SEARCH_ACTOR, &input).await?;
        Ok(normalize_youtube_items(items, max_results))
    }

    /// URL of the synchronous run endpoint for `actor`.
    fn actor_url(&self, actor: &str) -> Result<Url, SearchError> {
        self.base_url
            .join(&format!("v2/acts/{actor}/run-sync-get-dataset-items"))
            .map_err(|e| SearchError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Runs `actor` with `input`, retrying transient failures, and parses the
    /// returned dataset items.
    async fn run_actor<I, T>(&self, actor: &str, input: &I) -> Result<Vec<T>, SearchError>
    where
        I: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.actor_url(actor)?;
        tracing::debug!(actor, "running Apify actor");

        let body = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.post_json(&url, input)
        })
        .await?;

        serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
            context: format!("dataset items from {actor}"),
            source: e,
        })
    }

    /// POSTs `input` as JSON, asserts a 2xx status, and returns the body text.
    async fn post_json<I: Serialize + Sync>(
        &self,
        url: &Url,
        input: &I,
    ) -> Result<String, SearchError> {
        let response = self
            .client
            .post(url.clone())
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

use std::path::PathBuf;

use crate::ConfigError;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub brands_path: PathBuf,
    /// Search query sent to every acquisition source.
    pub query: String,
    /// Per-source cap on collected results.
    pub max_results: usize,
    /// Two-letter country code for web search localisation.
    pub country_code: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    /// Weighted-score multiplier for records carrying a view metric.
    pub video_multiplier: f64,
    /// Weighted-score multiplier for every other source.
    pub web_multiplier: f64,
    /// Share of the composite taken from mention share; the rest is engagement.
    pub mention_weight: f64,
    pub apify_api_token: Option<String>,
}

impl AppConfig {
    /// Returns the Apify token, or an error naming the missing variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when `APIFY_API_TOKEN` is unset.
    pub fn require_apify_token(&self) -> Result<&str, ConfigError> {
        self.apify_api_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("APIFY_API_TOKEN".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("brands_path", &self.brands_path)
            .field("query", &self.query)
            .field("max_results", &self.max_results)
            .field("country_code", &self.country_code)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("video_multiplier", &self.video_multiplier)
            .field("web_multiplier", &self.web_multiplier)
            .field("mention_weight", &self.mention_weight)
            .field(
                "apify_api_token",
                &self.apify_api_token.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

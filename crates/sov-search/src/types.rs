//! Dataset item shapes returned by the Apify actors we call.
//!
//! Only the fields that feed a [`sov_core::ResultRecord`] are modelled;
//! everything else in the item is ignored.

use serde::{Deserialize, Serialize};

/// Input for the `apify/google-search-scraper` actor.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSearchInput {
    pub queries: String,
    pub results_per_page: usize,
    pub max_pages_per_query: u32,
    /// Lowercase two-letter country code.
    pub country_code: String,
}

/// One search results page from the Google search scraper.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSearchPage {
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Input for the `streamers/youtube-scraper` actor.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeSearchInput {
    pub search_queries: Vec<String>,
    pub max_results: usize,
    pub max_results_shorts: usize,
    pub max_result_streams: usize,
}

/// One video item from the YouTube scraper.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeVideoItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Video description.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub channel_name: Option<String>,
    /// Usually a number, occasionally a display string such as `"1.2M"`.
    #[serde(default)]
    pub view_count: Option<serde_json::Value>,
}

//! Multi-source record collection.

use sov_core::ResultRecord;

use crate::client::ApifyClient;

/// What to search for and how many results to keep per source.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: usize,
    pub country_code: String,
}

impl SearchRequest {
    #[must_use]
    pub fn from_config(config: &sov_core::AppConfig) -> Self {
        Self {
            query: config.query.clone(),
            max_results: config.max_results,
            country_code: config.country_code.clone(),
        }
    }
}

/// Collect records from every source: video results first, then web results.
///
/// The order matters downstream because rank is the position in the combined
/// sequence. Continues past individual source failures, logging warnings, and
/// returns an empty `Vec` if all sources fail.
pub async fn collect_records(client: &ApifyClient, request: &SearchRequest) -> Vec<ResultRecord> {
    let mut records = Vec::new();

    match client
        .search_youtube(&request.query, request.max_results)
        .await
    {
        Ok(videos) => {
            tracing::debug!(
                query = %request.query,
                count = videos.len(),
                "collected video results"
            );
            records.extend(videos);
        }
        Err(e) => {
            tracing::warn!(
                query = %request.query,
                source = "youtube",
                error = %e,
                "video search failed"
            );
        }
    }

    match client
        .search_google(&request.query, request.max_results, &request.country_code)
        .await
    {
        Ok(pages) => {
            tracing::debug!(
                query = %request.query,
                count = pages.len(),
                "collected web results"
            );
            records.extend(pages);
        }
        Err(e) => {
            tracing::warn!(
                query = %request.query,
                source = "google",
                error = %e,
                "web search failed"
            );
        }
    }

    records
}

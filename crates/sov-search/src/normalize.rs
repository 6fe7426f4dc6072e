//! Conversion from Apify dataset items to [`ResultRecord`]s.

use sov_core::{ResultRecord, Source};

use crate::types::{GoogleSearchPage, YoutubeVideoItem};

/// Flattens organic results across pages into web records, in page order,
/// stopping at `max_results`.
#[must_use]
pub fn normalize_google_pages(
    pages: Vec<GoogleSearchPage>,
    max_results: usize,
) -> Vec<ResultRecord> {
    pages
        .into_iter()
        .flat_map(|page| page.organic_results)
        .take(max_results)
        .map(|result| ResultRecord {
            source: Source::Web,
            title: result.title,
            body: result.description,
            channel: None,
            raw_view_count: None,
            url: result.url,
        })
        .collect()
}

/// Converts video items into video records, stopping at `max_results`.
#[must_use]
pub fn normalize_youtube_items(
    items: Vec<YoutubeVideoItem>,
    max_results: usize,
) -> Vec<ResultRecord> {
    items
        .into_iter()
        .take(max_results)
        .map(|item| ResultRecord {
            source: Source::Video,
            title: item.title,
            body: item.text,
            channel: item.channel_name,
            raw_view_count: Some(view_count_text(item.view_count.as_ref())),
            url: item.url,
        })
        .collect()
}

/// Renders a view count as text for the engine's view parser.
///
/// Missing or unusable values become `"0"`.
fn view_count_text(value: Option<&serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        _ => "0".to_string(),
    }
}

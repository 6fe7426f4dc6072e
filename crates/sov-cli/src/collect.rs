//! Result collection command handlers.

use std::path::Path;

use sov_core::{AppConfig, ResultRecord};
use sov_search::{collect_records, ApifyClient, SearchRequest};

/// Collect records from every configured source.
///
/// # Errors
///
/// Returns an error if the Apify token is missing, the HTTP client cannot be
/// built, or no source returned any result. Individual source failures are
/// logged and skipped.
pub(crate) async fn fetch_records(
    config: &AppConfig,
    request: &SearchRequest,
) -> anyhow::Result<Vec<ResultRecord>> {
    let token = config.require_apify_token()?;
    let client = ApifyClient::new(token, config.request_timeout_secs)?
        .with_retry(config.max_retries, config.retry_backoff_base_ms);

    tracing::info!(
        query = %request.query,
        max_results = request.max_results,
        country = %request.country_code,
        "collecting search results"
    );
    let records = collect_records(&client, request).await;

    if records.is_empty() {
        anyhow::bail!("no results found from any source for '{}'", request.query);
    }

    tracing::info!(count = records.len(), "collected search results");
    Ok(records)
}

/// Collect records and write them to `output` as JSON.
///
/// # Errors
///
/// Returns an error if collection fails or the file cannot be written.
pub(crate) async fn run_collect(
    config: &AppConfig,
    request: &SearchRequest,
    output: &Path,
) -> anyhow::Result<()> {
    let records = fetch_records(config, request).await?;
    sov_core::save_records(output, &records)?;
    println!(
        "collected {} records for '{}' into {}",
        records.len(),
        request.query,
        output.display()
    );
    Ok(())
}

//! Analysis command handlers.

use std::path::Path;

use chrono::Utc;
use sov_core::{AppConfig, BrandsFile, ResultRecord};
use sov_engine::{SovAnalyzer, SovWeights};
use sov_sentiment::LexiconScorer;

use crate::report::{print_report, SovReport};
use crate::OutputArgs;

/// Load a saved records file and print its share-of-voice report.
///
/// # Errors
///
/// Returns an error if the records or brands file cannot be loaded, or if
/// scoring fails.
pub(crate) fn run_analyze(
    config: &AppConfig,
    brands_path: &Path,
    input: &Path,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let records = sov_core::load_records(input)?;
    tracing::info!(path = %input.display(), count = records.len(), "loaded records");
    analyze_and_print(config, brands_path, &records, None, output)
}

/// Score `records` against the tracked brands and print the report.
///
/// # Errors
///
/// Returns an error if the brands file cannot be loaded, scoring fails, or
/// the JSON report cannot be serialized.
pub(crate) fn analyze_and_print(
    config: &AppConfig,
    brands_path: &Path,
    records: &[ResultRecord],
    query: Option<&str>,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let brands = sov_core::load_brands(brands_path)?;
    let report = build_report(config, &brands, records, query, output.primary.as_deref())?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Runs the engine with the lexicon scorer and wraps the result for output.
///
/// `primary_override` wins over the brand marked primary in `brands`.
pub(crate) fn build_report(
    config: &AppConfig,
    brands: &BrandsFile,
    records: &[ResultRecord],
    query: Option<&str>,
    primary_override: Option<&str>,
) -> anyhow::Result<SovReport> {
    let tracked = brands.tracked();
    let primary = primary_override
        .map(|p| p.trim().to_lowercase())
        .or_else(|| brands.primary());

    let analyzer = SovAnalyzer::with_weights(LexiconScorer, SovWeights::from(config));
    let analysis = analyzer.run(records, &tracked, primary.as_deref())?;

    tracing::info!(
        records = records.len(),
        brands = tracked.len(),
        detected = analysis.stats.len(),
        "share of voice computed"
    );

    Ok(SovReport {
        generated_at: Utc::now(),
        query: query.map(str::to_string),
        record_count: records.len(),
        primary_brand: primary,
        weights: *analyzer.weights(),
        analysis,
    })
}

//! Single-pass scoring of result records into per-brand statistics.

use std::collections::HashSet;

use serde::Serialize;
use sov_core::ResultRecord;
use sov_sentiment::SentimentAnalyzer;

use crate::error::EngineError;
use crate::insights::get_insights;
use crate::share::calculate_sov;
use crate::types::{BrandStatsMap, ShareMap};
use crate::views::parse_views;
use crate::weights::SovWeights;

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub stats: BrandStatsMap,
    pub shares: ShareMap,
    pub insights: Vec<String>,
}

/// Share-of-voice engine with an injected sentiment analyzer.
///
/// Holds no per-run state: every [`SovAnalyzer::analyze`] call builds and
/// returns its own map.
#[derive(Debug, Clone)]
pub struct SovAnalyzer<S> {
    sentiment: S,
    weights: SovWeights,
}

impl<S: SentimentAnalyzer> SovAnalyzer<S> {
    /// Creates an engine with the default weighting policy.
    pub fn new(sentiment: S) -> Self {
        Self::with_weights(sentiment, SovWeights::default())
    }

    pub fn with_weights(sentiment: S, weights: SovWeights) -> Self {
        Self { sentiment, weights }
    }

    #[must_use]
    pub fn weights(&self) -> &SovWeights {
        &self.weights
    }

    /// Scores `records` against `brands` and returns per-brand statistics.
    ///
    /// `records` order is significant: a record's index is its rank, and
    /// rank 0 carries weight 1, rank 1 weight 0.5, and so on. Brands are
    /// case-folded and deduplicated; blank identifiers are ignored. A brand
    /// is mentioned when its identifier is a substring of the record's
    /// lowercased `title body channel` text, so short identifiers can match
    /// inside unrelated words.
    ///
    /// Brands never mentioned do not appear in the result.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Sentiment`] if the sentiment analyzer fails or
    /// returns a polarity outside `[-1, 1]` for any record.
    pub fn analyze<B: AsRef<str>>(
        &self,
        records: &[ResultRecord],
        brands: &[B],
    ) -> Result<BrandStatsMap, EngineError> {
        let brands = normalize_brands(brands);
        tracing::info!(
            records = records.len(),
            brands = brands.len(),
            "starting share-of-voice analysis"
        );

        let mut stats = BrandStatsMap::new();

        for (rank, record) in records.iter().enumerate() {
            let text = record.search_text();
            let sentiment = self
                .sentiment
                .score(&text)
                .map_err(|source| EngineError::Sentiment { rank, source })?;

            let views = record
                .source
                .carries_view_metric()
                .then(|| parse_views(record.raw_view_count.as_deref().unwrap_or("")));

            #[allow(clippy::cast_precision_loss)]
            let rank_weight = 1.0 / (rank as f64 + 1.0);
            let contribution =
                (1.0 + sentiment) * rank_weight * self.weights.source_multiplier(record.source);

            for brand in brands.iter().filter(|b| text.contains(b.as_str())) {
                let entry = stats.entry(brand.clone()).or_default();
                entry.mentions += 1;
                entry.sentiment_sum += sentiment;
                if let Some(views) = views {
                    entry.total_views = entry.total_views.saturating_add(u128::from(views));
                }
                entry.weighted_score += contribution;

                tracing::debug!(
                    brand = %brand,
                    rank,
                    source = %record.source,
                    sentiment,
                    contribution,
                    "brand mention"
                );
            }
        }

        tracing::info!(
            mentioned_brands = stats.len(),
            "share-of-voice analysis complete"
        );
        Ok(stats)
    }

    /// Derives shares from `stats` using this engine's blend weight.
    #[must_use]
    pub fn calculate_sov(&self, stats: &BrandStatsMap) -> ShareMap {
        calculate_sov(stats, &self.weights)
    }

    /// Runs the scoring pass, share derivation, and insight derivation.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError`] from [`SovAnalyzer::analyze`].
    pub fn run<B: AsRef<str>>(
        &self,
        records: &[ResultRecord],
        brands: &[B],
        primary: Option<&str>,
    ) -> Result<Analysis, EngineError> {
        let stats = self.analyze(records, brands)?;
        let shares = self.calculate_sov(&stats);
        let insights = get_insights(&shares, primary);
        Ok(Analysis {
            stats,
            shares,
            insights,
        })
    }
}

/// Case-folds, trims, and deduplicates brand identifiers, keeping first-seen order.
fn normalize_brands<B: AsRef<str>>(brands: &[B]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::with_capacity(brands.len());
    for brand in brands {
        let identifier = brand.as_ref().trim().to_lowercase();
        if identifier.is_empty() {
            // An empty identifier would match every record.
            tracing::warn!("ignoring blank brand identifier");
            continue;
        }
        if seen.insert(identifier.clone()) {
            normalized.push(identifier);
        }
    }
    normalized
}

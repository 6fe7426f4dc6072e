use std::collections::BTreeMap;

use serde::Serialize;

/// Running totals for one brand, built during a single analysis pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BrandStats {
    /// Records whose search text contains the brand identifier.
    pub mentions: u64,
    /// Sum of record polarities, one term per mention.
    pub sentiment_sum: f64,
    /// Sum of `(1 + sentiment) * rank_weight * source_multiplier`.
    pub weighted_score: f64,
    /// Parsed views from records carrying a view metric.
    ///
    /// Wider than a single parsed count so sums of near-`u64::MAX` counts
    /// stay exact.
    pub total_views: u128,
}

impl BrandStats {
    /// Mean polarity across mentions; `0.0` when there are none.
    #[must_use]
    pub fn average_sentiment(&self) -> f64 {
        if self.mentions == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let denom = self.mentions as f64;
        self.sentiment_sum / denom
    }
}

/// Per-brand statistics keyed by brand identifier.
///
/// Ordered so iteration, and anything derived from it, is reproducible.
pub type BrandStatsMap = BTreeMap<String, BrandStats>;

/// Percentage shares for one brand. Derived from [`BrandStats`], never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ShareOfVoice {
    pub mention_share: f64,
    pub engagement_share: f64,
    pub composite_share: f64,
}

pub type ShareMap = BTreeMap<String, ShareOfVoice>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_sentiment_without_mentions_is_zero() {
        assert!(BrandStats::default().average_sentiment().abs() < f64::EPSILON);
    }

    #[test]
    fn average_sentiment_divides_by_mentions() {
        let stats = BrandStats {
            mentions: 4,
            sentiment_sum: 1.0,
            ..BrandStats::default()
        };
        assert!((stats.average_sentiment() - 0.25).abs() < f64::EPSILON);
    }
}

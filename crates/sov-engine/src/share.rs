//! Percentage shares derived from per-brand statistics.

use crate::types::{BrandStatsMap, ShareMap, ShareOfVoice};
use crate::weights::SovWeights;

/// Converts per-brand statistics into mention, engagement, and composite shares.
///
/// Each share is a percentage of the corresponding total across all brands in
/// `stats`. A zero total yields a zero share rather than NaN. The composite is
/// blended with [`SovWeights::blend`]. Pure: the same input always produces
/// the same output.
#[must_use]
pub fn calculate_sov(stats: &BrandStatsMap, weights: &SovWeights) -> ShareMap {
    let total_mentions = stats
        .values()
        .fold(0_u64, |acc, s| acc.saturating_add(s.mentions));
    let total_views = stats
        .values()
        .fold(0_u128, |acc, s| acc.saturating_add(s.total_views));

    stats
        .iter()
        .map(|(brand, s)| {
            let mention_share = percentage(u128::from(s.mentions), u128::from(total_mentions));
            let engagement_share = percentage(s.total_views, total_views);
            let share = ShareOfVoice {
                mention_share,
                engagement_share,
                composite_share: weights.blend(mention_share, engagement_share),
            };
            (brand.clone(), share)
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: u128, total: u128) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BrandStats;

    fn stats_of(entries: &[(&str, u64, u128)]) -> BrandStatsMap {
        entries
            .iter()
            .map(|&(brand, mentions, total_views)| {
                (
                    brand.to_string(),
                    BrandStats {
                        mentions,
                        total_views,
                        ..BrandStats::default()
                    },
                )
            })
            .collect()
    }

    #[test]
    fn shares_are_percentages_of_totals() {
        let stats = stats_of(&[("atomberg", 3, 0), ("havells", 1, 10_000)]);
        let sov = calculate_sov(&stats, &SovWeights::default());
        assert!((sov["atomberg"].mention_share - 75.0).abs() < 1e-9);
        assert!((sov["havells"].mention_share - 25.0).abs() < 1e-9);
        assert!(sov["atomberg"].engagement_share.abs() < f64::EPSILON);
        assert!((sov["havells"].engagement_share - 100.0).abs() < 1e-9);
        assert!((sov["atomberg"].composite_share - 37.5).abs() < 1e-9);
        assert!((sov["havells"].composite_share - 62.5).abs() < 1e-9);
    }

    #[test]
    fn zero_views_total_gives_zero_engagement() {
        let stats = stats_of(&[("orient", 2, 0), ("crompton", 2, 0)]);
        let sov = calculate_sov(&stats, &SovWeights::default());
        for share in sov.values() {
            assert!(share.engagement_share.abs() < f64::EPSILON);
            assert!(!share.engagement_share.is_nan());
            assert!((share.composite_share - 25.0).abs() < 1e-9);
        }
    }

    #[test]
    fn view_totals_beyond_u64_are_not_capped() {
        let near_max = u128::from(u64::MAX - 1);
        let stats = stats_of(&[("atomberg", 1, near_max), ("havells", 1, near_max)]);
        let sov = calculate_sov(&stats, &SovWeights::default());
        assert!((sov["atomberg"].engagement_share - 50.0).abs() < 1e-9);
        assert!((sov["havells"].engagement_share - 50.0).abs() < 1e-9);
    }

    #[test]
    fn zero_mentions_total_gives_zero_shares() {
        let stats = stats_of(&[("orient", 0, 0)]);
        let sov = calculate_sov(&stats, &SovWeights::default());
        assert_eq!(sov["orient"], ShareOfVoice::default());
    }

    #[test]
    fn empty_stats_give_empty_shares() {
        assert!(calculate_sov(&BrandStatsMap::new(), &SovWeights::default()).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let stats = stats_of(&[("lg", 5, 123), ("samsung", 7, 456), ("polycab", 1, 0)]);
        let weights = SovWeights::default();
        let first = calculate_sov(&stats, &weights);
        let second = calculate_sov(&stats, &weights);
        assert_eq!(first, second);
    }

    #[test]
    fn mention_weight_shifts_composite() {
        let stats = stats_of(&[("atomberg", 1, 0), ("havells", 1, 100)]);
        let weights = SovWeights {
            mention_weight: 0.8,
            ..SovWeights::default()
        };
        let sov = calculate_sov(&stats, &weights);
        // 0.8 * 50 + 0.2 * 0
        assert!((sov["atomberg"].composite_share - 40.0).abs() < 1e-9);
        // 0.8 * 50 + 0.2 * 100
        assert!((sov["havells"].composite_share - 60.0).abs() < 1e-9);
    }
}

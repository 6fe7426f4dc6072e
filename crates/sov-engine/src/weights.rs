//! Tunable weighting policy for scoring and share blending.

use serde::Serialize;
use sov_core::Source;

pub const DEFAULT_VIDEO_MULTIPLIER: f64 = 1.0;
/// Records without a view metric get a positional boost over video results.
pub const DEFAULT_WEB_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_MENTION_WEIGHT: f64 = 0.5;

/// Weighting constants applied by the scoring pass and share blend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SovWeights {
    /// Weighted-score multiplier for sources that carry a view metric.
    pub video_multiplier: f64,
    /// Weighted-score multiplier for every source without a view metric.
    pub web_multiplier: f64,
    /// Fraction of the composite share taken from mention share; the
    /// remainder comes from engagement share.
    pub mention_weight: f64,
}

impl Default for SovWeights {
    fn default() -> Self {
        Self {
            video_multiplier: DEFAULT_VIDEO_MULTIPLIER,
            web_multiplier: DEFAULT_WEB_MULTIPLIER,
            mention_weight: DEFAULT_MENTION_WEIGHT,
        }
    }
}

impl SovWeights {
    #[must_use]
    pub fn source_multiplier(&self, source: Source) -> f64 {
        if source.carries_view_metric() {
            self.video_multiplier
        } else {
            self.web_multiplier
        }
    }

    #[must_use]
    pub fn engagement_weight(&self) -> f64 {
        1.0 - self.mention_weight
    }

    /// Composite share from a mention share and an engagement share.
    #[must_use]
    pub fn blend(&self, mention_share: f64, engagement_share: f64) -> f64 {
        self.mention_weight * mention_share + self.engagement_weight() * engagement_share
    }
}

impl From<&sov_core::AppConfig> for SovWeights {
    fn from(config: &sov_core::AppConfig) -> Self {
        Self {
            video_multiplier: config.video_multiplier,
            web_multiplier: config.web_multiplier,
            mention_weight: config.mention_weight,
        }
    }
}

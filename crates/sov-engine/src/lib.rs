//! Share-of-voice scoring and aggregation.
//!
//! One pass over an ordered record sequence builds per-brand
//! [`BrandStats`]; [`calculate_sov`] turns those into percentage shares and
//! [`get_insights`] summarises the shares as sentences.

pub mod analyzer;
pub mod error;
pub mod insights;
pub mod share;
pub mod types;
pub mod views;
pub mod weights;

pub use analyzer::{Analysis, SovAnalyzer};
pub use error::EngineError;
pub use insights::{display_name, get_insights, rank_brands, NO_BRANDS_DETECTED};
pub use share::calculate_sov;
pub use types::{BrandStats, BrandStatsMap, ShareMap, ShareOfVoice};
pub use views::parse_views;
pub use weights::SovWeights;

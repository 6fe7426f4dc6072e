//! Sentiment polarity scoring for share-of-voice analysis.
//!
//! The engine depends only on [`SentimentAnalyzer`]; [`LexiconScorer`] is the
//! default implementation. Plain closures `Fn(&str) -> f64` also implement the
//! trait, which keeps tests deterministic.

pub mod analyzer;
pub mod error;
pub mod scorer;

pub use analyzer::SentimentAnalyzer;
pub use error::SentimentError;
pub use scorer::{lexicon_score, LexiconScorer};

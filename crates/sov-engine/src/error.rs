use sov_sentiment::SentimentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The injected sentiment analyzer failed; the engine has no fallback polarity.
    #[error("sentiment scoring failed for record at rank {rank}: {source}")]
    Sentiment {
        rank: usize,
        #[source]
        source: SentimentError,
    },
}

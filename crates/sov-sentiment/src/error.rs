use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    /// The analyzer produced a polarity outside `[-1.0, 1.0]` or a non-finite value.
    #[error("polarity {0} is outside [-1, 1]")]
    OutOfRange(f64),

    /// The backing sentiment model or service failed.
    #[error("sentiment backend error: {0}")]
    Backend(String),
}

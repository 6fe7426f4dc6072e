use crate::error::SentimentError;

/// A source of sentiment polarity for a piece of text.
///
/// Implementors return a polarity in `[-1.0, 1.0]`, negative for unfavourable
/// text. Callers should go through [`SentimentAnalyzer::score`], which rejects
/// values outside that range instead of letting them skew weighted scores.
pub trait SentimentAnalyzer {
    /// Raw polarity for `text`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Backend`] when the underlying model fails.
    fn polarity(&self, text: &str) -> Result<f64, SentimentError>;

    /// Polarity for `text`, checked to be finite and within `[-1.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Propagates backend failures and returns [`SentimentError::OutOfRange`]
    /// for NaN, infinite, or out-of-range polarities.
    fn score(&self, text: &str) -> Result<f64, SentimentError> {
        let polarity = self.polarity(text)?;
        if polarity.is_finite() && (-1.0..=1.0).contains(&polarity) {
            Ok(polarity)
        } else {
            tracing::warn!(polarity, "sentiment analyzer returned out-of-range polarity");
            Err(SentimentError::OutOfRange(polarity))
        }
    }
}

impl<F> SentimentAnalyzer for F
where
    F: Fn(&str) -> f64,
{
    fn polarity(&self, text: &str) -> Result<f64, SentimentError> {
        Ok(self(text))
    }
}

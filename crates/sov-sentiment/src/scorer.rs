//! Lexicon scorer tuned for consumer-appliance reviews and listings.

use crate::analyzer::SentimentAnalyzer;
use crate::error::SentimentError;

/// Domain-specific word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("best", 0.5),
    ("better", 0.3),
    ("good", 0.3),
    ("great", 0.4),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("awesome", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("recommend", 0.4),
    ("recommended", 0.4),
    ("reliable", 0.4),
    ("quiet", 0.3),
    ("silent", 0.3),
    ("efficient", 0.4),
    ("saving", 0.3),
    ("savings", 0.3),
    ("smart", 0.2),
    ("premium", 0.3),
    ("stylish", 0.3),
    ("affordable", 0.3),
    ("worth", 0.3),
    ("top", 0.2),
    ("powerful", 0.3),
    ("durable", 0.4),
    ("easy", 0.2),
    // Negative signals
    ("bad", -0.4),
    ("worst", -0.6),
    ("poor", -0.4),
    ("terrible", -0.6),
    ("noisy", -0.4),
    ("noise", -0.3),
    ("broken", -0.5),
    ("defective", -0.6),
    ("faulty", -0.5),
    ("problem", -0.3),
    ("problems", -0.3),
    ("issue", -0.3),
    ("issues", -0.3),
    ("complaint", -0.4),
    ("failed", -0.4),
    ("failure", -0.4),
    ("expensive", -0.2),
    ("overpriced", -0.4),
    ("slow", -0.2),
    ("waste", -0.5),
    ("avoid", -0.5),
    ("disappointed", -0.5),
    ("disappointing", -0.5),
    ("wobble", -0.3),
];

/// Score a text string using the domain lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f64 {
    let mut score = 0.0_f64;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if let Some(&(_, weight)) = LEXICON.iter().find(|&&(lex_word, _)| lex_word == w) {
            score += weight;
        }
    }
    score.clamp(-1.0, 1.0)
}

/// [`SentimentAnalyzer`] backed by [`lexicon_score`]. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl SentimentAnalyzer for LexiconScorer {
    fn polarity(&self, text: &str) -> Result<f64, SentimentError> {
        Ok(lexicon_score(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert!(lexicon_score("").abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert!(lexicon_score("ceiling fan unboxing").abs() < f64::EPSILON);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let score = lexicon_score("the best bldc fan in india");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let score = lexicon_score("fan started making noise, very disappointed");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn mixed_text_sums_weights() {
        // great (+0.4) + noisy (-0.4)
        let score = lexicon_score("great airflow but noisy");
        assert!(score.abs() < 1e-9, "expected ~0.0, got {score}");
    }

    #[test]
    fn score_clamps_to_positive_one() {
        let score = lexicon_score("best excellent amazing awesome love recommend");
        assert!((score - 1.0).abs() < f64::EPSILON, "got {score}");
    }

    #[test]
    fn score_clamps_to_negative_one() {
        let score = lexicon_score("worst terrible defective broken waste avoid");
        assert!((score + 1.0).abs() < f64::EPSILON, "got {score}");
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        let score = lexicon_score("EXCELLENT!");
        assert!(score > 0.0, "expected positive score for 'EXCELLENT!', got {score}");
    }

    #[test]
    fn lexicon_scorer_never_fails() {
        let scorer = LexiconScorer;
        let score = scorer.score("reliable and quiet").unwrap();
        assert!(score > 0.0);
    }
}

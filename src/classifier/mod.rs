// ==========================================
// Transit Sentiment - classifier
// ==========================================
// Tags a raw post text with {sentiment label, polarity, region, transport
// mode}. Classification never fails: every missing signal resolves to a
// documented default, so downstream aggregation never special-cases an
// absent classification.
// ==========================================

use std::sync::Arc;

use crate::domain::{Classification, Location};
use crate::domain::types::{SentimentLabel, TransportMode};
use crate::lexicon::{Gazetteer, SentimentLexicon, TransportKeywords};

/// Label thresholds: polarity > 0.1 is positive, < -0.1 is negative,
/// otherwise neutral.
pub const LABEL_THRESHOLD: f64 = 0.1;

// ==========================================
// Classifier
// ==========================================

/// Deterministic, lossy keyword/lexicon classifier. Holds its lookup
/// tables by shared read-only reference; construction wires them in
/// explicitly instead of reading process-wide globals.
pub struct Classifier {
    gazetteer: Arc<Gazetteer>,
    lexicon: Arc<SentimentLexicon>,
    transport: Arc<TransportKeywords>,
}

impl Classifier {
    /// Create a classifier over the given lookup tables.
    pub fn new(
        gazetteer: Arc<Gazetteer>,
        lexicon: Arc<SentimentLexicon>,
        transport: Arc<TransportKeywords>,
    ) -> Self {
        Self {
            gazetteer,
            lexicon,
            transport,
        }
    }

    /// Classify one post text. Infallible by design.
    pub fn classify(&self, text: &str) -> Classification {
        let lower = text.to_lowercase();
        let (polarity, sentiment_label) = self.score_sentiment(text);
        let location = self.gazetteer.resolve(&lower);
        let transport_type = self.transport.detect(&lower);

        Classification {
            sentiment_label,
            polarity,
            location,
            transport_type,
        }
    }

    /// Detected location only (region + optional city).
    pub fn detect_location(&self, text: &str) -> Location {
        self.gazetteer.resolve(&text.to_lowercase())
    }

    /// Detected transport mode only.
    pub fn detect_transport(&self, text: &str) -> TransportMode {
        self.transport.detect(&text.to_lowercase())
    }

    // ==========================================
    // Sentiment scoring
    // ==========================================

    /// Base lexical polarity over emoji-stripped text, plus a fixed signed
    /// delta per matched emoji in the original text, clamped to [-1, 1].
    pub fn score_sentiment(&self, text: &str) -> (f64, SentimentLabel) {
        let stripped: String = text
            .chars()
            .filter(|c| !self.lexicon.is_emoji_char(*c))
            .collect();

        let mut polarity = self.base_polarity(&stripped);

        // Each emoji occurrence contributes independently.
        for c in text.chars() {
            if let Some(delta) = self.lexicon.emoji_delta(c) {
                polarity += delta;
            }
        }

        let polarity = polarity.clamp(-1.0, 1.0);
        (polarity, Self::label_for(polarity))
    }

    fn label_for(polarity: f64) -> SentimentLabel {
        if polarity > LABEL_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity < -LABEL_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Word-count-normalized lexical score. Intensifiers multiply the next
    /// sentiment word by 1.5; negators flip its sign. Devanagari sentiment
    /// words are matched as substrings and add one raw point per list.
    fn base_polarity(&self, stripped: &str) -> f64 {
        let lower = stripped.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();
        if words.is_empty() {
            return 0.0;
        }

        let mut positive = 0.0_f64;
        let mut negative = 0.0_f64;

        if self
            .lexicon
            .hindi_positive_words()
            .iter()
            .any(|w| stripped.contains(w))
        {
            positive += 1.0;
        }
        if self
            .lexicon
            .hindi_negative_words()
            .iter()
            .any(|w| stripped.contains(w))
        {
            negative += 1.0;
        }

        for (i, word) in words.iter().enumerate() {
            let prev = if i > 0 { words[i - 1] } else { "" };
            let multiplier = if self.lexicon.is_intensifier(prev) {
                crate::lexicon::sentiment::INTENSIFIER_MULTIPLIER
            } else {
                1.0
            };
            let negated = self.lexicon.is_negator(prev);

            if self.lexicon.is_positive_word(word) {
                positive += if negated { -multiplier } else { multiplier };
            }
            if self.lexicon.is_negative_word(word) {
                negative += if negated { -multiplier } else { multiplier };
            }
        }

        (positive - negative) / words.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(
            Arc::new(Gazetteer::india("Delhi")),
            Arc::new(SentimentLexicon::new()),
            Arc::new(TransportKeywords::new()),
        )
    }

    #[test]
    fn test_positive_metro_in_delhi() {
        let c = classifier().classify("I love the new metro in Delhi");
        assert_eq!(c.transport_type, TransportMode::Metro);
        assert_eq!(c.location.region, "Delhi");
        assert_eq!(c.sentiment_label, SentimentLabel::Positive);
        assert!(c.polarity > LABEL_THRESHOLD);
    }

    #[test]
    fn test_negative_auto_strike_in_mumbai() {
        let c = classifier().classify("auto drivers on strike in Mumbai, angry 😡");
        assert_eq!(c.transport_type, TransportMode::Auto);
        assert_eq!(c.location.region, "Maharashtra");
        assert_eq!(c.location.city.as_deref(), Some("Mumbai"));
        assert_eq!(c.sentiment_label, SentimentLabel::Negative);
    }

    #[test]
    fn test_no_signal_resolves_to_defaults() {
        let c = classifier().classify("commute report for today");
        assert_eq!(c.transport_type, TransportMode::Bus);
        assert_eq!(c.location.region, "Delhi");
        assert_eq!(c.location.city, None);
        assert_eq!(c.sentiment_label, SentimentLabel::Neutral);
        assert_eq!(c.polarity, 0.0);
    }

    #[test]
    fn test_negative_emoji_monotone_and_clamped() {
        let classifier = classifier();
        let mut last = f64::INFINITY;
        for n in 1..=5usize {
            let text: String = std::iter::repeat('😢').take(n).collect();
            let (polarity, label) = classifier.score_sentiment(&text);
            // Base polarity over emoji-only text is 0; each negative emoji
            // pulls the score down until the clamp.
            assert!(polarity < last);
            assert!(polarity >= -1.0);
            if n >= 1 {
                assert_eq!(label, SentimentLabel::Negative);
            }
            last = polarity;
            if n >= 4 {
                assert_eq!(polarity, -1.0);
                break;
            }
        }
    }

    #[test]
    fn test_positive_emoji_clamped_at_one() {
        let (polarity, label) = classifier().score_sentiment("🎉🎉🎉🎉🎉");
        assert_eq!(polarity, 1.0);
        assert_eq!(label, SentimentLabel::Positive);
    }

    #[test]
    fn test_emoji_stripped_before_base_pass() {
        let c = classifier();
        // The emoji must not count as a word and dilute the lexical score.
        let (with_emoji, _) = c.score_sentiment("terrible 👍 service");
        let (plain, _) = c.score_sentiment("terrible service");
        assert!((with_emoji - (plain + 0.3)).abs() < 1e-9);
    }

    #[test]
    fn test_negation_flips_sentiment_word() {
        let c = classifier();
        let (negated, _) = c.score_sentiment("not good at all");
        let (plain, _) = c.score_sentiment("was good at all");
        assert!(negated < 0.0);
        assert!(plain > 0.0);
    }

    #[test]
    fn test_intensifier_scales_word() {
        let c = classifier();
        let (intense, _) = c.score_sentiment("very dirty bus");
        let (plain, _) = c.score_sentiment("quite old dirty bus");
        // 1.5/3 vs 1.0/4
        assert!(intense < plain);
    }

    #[test]
    fn test_devanagari_words_score() {
        let c = classifier();
        let (polarity, label) = c.score_sentiment("बस खराब है");
        assert!(polarity < 0.0);
        assert_eq!(label, SentimentLabel::Negative);
    }

    #[test]
    fn test_alias_region_with_transport_keyword() {
        let c = classifier().classify("dmrc running late again");
        assert_eq!(c.location.region, "Delhi");
        assert_eq!(c.transport_type, TransportMode::Metro);
        assert_eq!(c.sentiment_label, SentimentLabel::Negative);
    }

    #[test]
    fn test_neutral_band_is_inclusive() {
        // Polarity exactly at the threshold stays neutral.
        assert_eq!(Classifier::label_for(0.1), SentimentLabel::Neutral);
        assert_eq!(Classifier::label_for(-0.1), SentimentLabel::Neutral);
        assert_eq!(Classifier::label_for(0.11), SentimentLabel::Positive);
        assert_eq!(Classifier::label_for(-0.11), SentimentLabel::Negative);
    }
}

// ==========================================
// Transit Sentiment - sentiment lexicon
// ==========================================
// Word lists for the lexical polarity function (English + romanized Hindi
// + Devanagari), intensifiers, negators, and the fixed emoji delta sets.
// ==========================================

use std::collections::HashSet;

/// Fixed signed delta contributed by each matched emoji occurrence.
pub const EMOJI_DELTA: f64 = 0.3;

/// Intensifier multiplier applied to the following sentiment word.
pub const INTENSIFIER_MULTIPLIER: f64 = 1.5;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "fantastic", "wonderful", "awesome",
    "fast", "efficient", "clean", "comfortable", "reliable", "convenient", "smooth",
    "quick", "punctual", "helpful", "friendly", "safe", "accessible", "modern",
    "affordable", "value", "satisfied", "happy", "pleased", "impressed", "love",
    // romanized Hindi
    "sahi", "badhiya", "mast", "zabardast", "kamaal", "perfect", "superb",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "disgusting", "worst", "hate",
    "slow", "delayed", "late", "dirty", "crowded", "expensive", "unreliable",
    "broken", "cancelled", "stuck", "frustrated", "annoyed", "disappointed", "angry",
    "pathetic", "useless", "waste", "fraud", "cheat", "scam", "overpriced",
    // romanized Hindi
    "bakwas", "faltu", "bekar", "ghatiya", "nautanki", "dhokha", "looting",
];

const INTENSIFIERS: &[&str] = &[
    "very", "extremely", "really", "quite", "totally", "absolutely", "bahut", "bilkul",
];

const NEGATORS: &[&str] = &[
    "not", "never", "no", "dont", "don't", "cannot", "cant", "can't", "nahi", "nahin",
];

/// Devanagari sentiment words, matched as substrings of the raw text
/// (Devanagari has no whitespace-token guarantee in scraped posts).
const HINDI_POSITIVE: &[&str] = &[
    "अच्छा", "बेहतरीन", "शानदार", "सुविधाजनक", "तेज़", "साफ", "आरामदायक",
];

const HINDI_NEGATIVE: &[&str] = &[
    "बुरा", "खराब", "देर", "गंदा", "भीड़", "महंगा", "परेशानी", "समस्या",
];

const POSITIVE_EMOJI: &[char] = &['😊', '😁', '😄', '😍', '👍', '✅', '💚', '🎉', '👌', '😀'];

const NEGATIVE_EMOJI: &[char] = &['😠', '😡', '🤬', '💢', '👎', '❌', '💔', '😞', '😢', '😤'];

// ==========================================
// SentimentLexicon
// ==========================================

/// Immutable sentiment word tables, built once and shared via `Arc`.
pub struct SentimentLexicon {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    intensifiers: HashSet<&'static str>,
    negators: HashSet<&'static str>,
}

impl SentimentLexicon {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
        }
    }

    pub fn is_positive_word(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative_word(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_intensifier(&self, word: &str) -> bool {
        self.intensifiers.contains(word)
    }

    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word)
    }

    pub fn hindi_positive_words(&self) -> &'static [&'static str] {
        HINDI_POSITIVE
    }

    pub fn hindi_negative_words(&self) -> &'static [&'static str] {
        HINDI_NEGATIVE
    }

    /// Signed delta for one emoji character, if it belongs to either fixed set.
    pub fn emoji_delta(&self, c: char) -> Option<f64> {
        if POSITIVE_EMOJI.contains(&c) {
            Some(EMOJI_DELTA)
        } else if NEGATIVE_EMOJI.contains(&c) {
            Some(-EMOJI_DELTA)
        } else {
            None
        }
    }

    /// Whether a character is an emoji for stripping purposes. Covers the
    /// pictograph planes plus the variation selector, a superset of the two
    /// delta sets.
    pub fn is_emoji_char(&self, c: char) -> bool {
        matches!(u32::from(c),
            0x1F300..=0x1FAFF | 0x2600..=0x27BF | 0x2B00..=0x2BFF | 0xFE0F)
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_membership() {
        let lex = SentimentLexicon::new();
        assert!(lex.is_positive_word("love"));
        assert!(lex.is_negative_word("angry"));
        assert!(lex.is_intensifier("very"));
        assert!(lex.is_negator("not"));
        assert!(!lex.is_positive_word("bus"));
    }

    #[test]
    fn test_emoji_deltas() {
        let lex = SentimentLexicon::new();
        assert_eq!(lex.emoji_delta('😊'), Some(EMOJI_DELTA));
        assert_eq!(lex.emoji_delta('😡'), Some(-EMOJI_DELTA));
        assert_eq!(lex.emoji_delta('a'), None);
    }

    #[test]
    fn test_delta_sets_are_strippable() {
        // Every emoji carrying a delta must also be stripped before the
        // base lexical pass.
        let lex = SentimentLexicon::new();
        for &c in POSITIVE_EMOJI.iter().chain(NEGATIVE_EMOJI) {
            assert!(lex.is_emoji_char(c), "not strippable: {c}");
        }
    }
}

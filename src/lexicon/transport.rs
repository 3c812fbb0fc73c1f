// ==========================================
// Transit Sentiment - transport keyword table
// ==========================================
// Keyword sets tested in fixed priority order: metro, train, auto, taxi.
// First matching set wins; no match defaults to bus. Sets carry Devanagari
// variants and operator abbreviations alongside English terms.
// ==========================================

use crate::domain::types::TransportMode;

/// Priority-ordered keyword sets. Bus is the fallback, not a scanned set.
const KEYWORD_SETS: &[(TransportMode, &[&str])] = &[
    (
        TransportMode::Metro,
        &["metro", "मेट्रो", "subway", "underground", "rapid transit", "dmrc", "namma metro"],
    ),
    (
        TransportMode::Train,
        &["train", "ट्रेन", "railway", "irctc", "indian railways", "local train", "express", "emu"],
    ),
    (
        TransportMode::Auto,
        &["auto", "ऑटो", "rickshaw", "three wheeler", "tuk tuk"],
    ),
    (
        TransportMode::Taxi,
        &["taxi", "टैक्सी", "cab", "ola", "uber"],
    ),
];

// ==========================================
// TransportKeywords
// ==========================================

/// Immutable transport keyword table, built once and shared via `Arc`.
pub struct TransportKeywords {
    sets: Vec<(TransportMode, Vec<&'static str>)>,
}

impl TransportKeywords {
    pub fn new() -> Self {
        Self {
            sets: KEYWORD_SETS
                .iter()
                .map(|(mode, words)| (*mode, words.to_vec()))
                .collect(),
        }
    }

    /// Detect the transport mode from already-lowercased text.
    ///
    /// Never fails: defaults to `Bus` when no keyword set matches.
    pub fn detect(&self, lower_text: &str) -> TransportMode {
        for (mode, keywords) in &self.sets {
            if keywords.iter().any(|kw| lower_text.contains(kw)) {
                return *mode;
            }
        }
        TransportMode::Bus
    }
}

impl Default for TransportKeywords {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let kw = TransportKeywords::new();
        // "metro" outranks "train" when both appear.
        assert_eq!(kw.detect("metro beats the local train"), TransportMode::Metro);
        assert_eq!(kw.detect("irctc booking failed"), TransportMode::Train);
        assert_eq!(kw.detect("auto fare hike"), TransportMode::Auto);
        assert_eq!(kw.detect("booked an uber"), TransportMode::Taxi);
    }

    #[test]
    fn test_devanagari_variants() {
        let kw = TransportKeywords::new();
        assert_eq!(kw.detect("मेट्रो बहुत अच्छा"), TransportMode::Metro);
        assert_eq!(kw.detect("ऑटो वाले"), TransportMode::Auto);
    }

    #[test]
    fn test_default_is_bus() {
        let kw = TransportKeywords::new();
        assert_eq!(kw.detect("commute was fine today"), TransportMode::Bus);
        assert_eq!(kw.detect("city bus was crowded"), TransportMode::Bus);
    }
}

// ==========================================
// Transit Sentiment - domain type definitions
// ==========================================
// Closed enumerations with fixed wire names (lowercase strings).
// Unknown stored values degrade to the documented default instead of
// failing the read: neutral for sentiment, bus for transport mode.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Sentiment label
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Stored/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }

    /// Parse a stored value, degrading to `Neutral` on anything unknown.
    pub fn from_stored(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "positive" => SentimentLabel::Positive,
            "negative" => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Transport mode
// ==========================================
// Fixed closed set; bus is the fallback default (never null/absent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Bus,
    Metro,
    Train,
    Auto,
    Taxi,
}

impl TransportMode {
    /// All modes, in breakdown-reporting order.
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Bus,
        TransportMode::Metro,
        TransportMode::Train,
        TransportMode::Auto,
        TransportMode::Taxi,
    ];

    /// Stored/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Bus => "bus",
            TransportMode::Metro => "metro",
            TransportMode::Train => "train",
            TransportMode::Auto => "auto",
            TransportMode::Taxi => "taxi",
        }
    }

    /// Parse a stored value, degrading to `Bus` on anything unknown.
    pub fn from_stored(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "metro" => TransportMode::Metro,
            "train" => TransportMode::Train,
            "auto" => TransportMode::Auto,
            "taxi" => TransportMode::Taxi,
            _ => TransportMode::Bus,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Insert outcome
// ==========================================
// Explicit per-item result of an insert-or-ignore write, so callers can
// observe skip counts without relying on error control flow. A duplicate
// id is an expected outcome, distinct from a storage failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertOutcome {
    Inserted,
    Skipped,
}

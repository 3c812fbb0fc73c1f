// ==========================================
// Transit Sentiment - aggregate read models
// ==========================================
// Derived, read-only shapes computed on demand from stored records.
// Never persisted, never cached.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{SentimentLabel, TransportMode};

// ==========================================
// Sentiment breakdown
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

impl SentimentBreakdown {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }
}

// ==========================================
// Transport breakdown
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportBreakdown {
    pub bus: u64,
    pub metro: u64,
    pub train: u64,
    pub auto: u64,
    pub taxi: u64,
}

impl TransportBreakdown {
    pub fn record(&mut self, mode: TransportMode) {
        match mode {
            TransportMode::Bus => self.bus += 1,
            TransportMode::Metro => self.metro += 1,
            TransportMode::Train => self.train += 1,
            TransportMode::Auto => self.auto += 1,
            TransportMode::Taxi => self.taxi += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.bus + self.metro + self.train + self.auto + self.taxi
    }

    pub fn count(&self, mode: TransportMode) -> u64 {
        match mode {
            TransportMode::Bus => self.bus,
            TransportMode::Metro => self.metro,
            TransportMode::Train => self.train,
            TransportMode::Auto => self.auto,
            TransportMode::Taxi => self.taxi,
        }
    }
}

// ==========================================
// StateAggregate - per-region rollup
// ==========================================

/// Per-region rollup recomputed from stored records on every query.
///
/// `sentiment_score` convention (applied uniformly across all aggregation
/// endpoints): normalized net count, `(positive - negative) / total_messages`,
/// in [-1, 1]. Zero for an empty region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateAggregate {
    pub region: String,
    pub total_messages: u64,
    pub sentiment_score: f64,
    pub sentiment_breakdown: SentimentBreakdown,
    pub transport_breakdown: TransportBreakdown,
}

impl StateAggregate {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            total_messages: 0,
            sentiment_score: 0.0,
            sentiment_breakdown: SentimentBreakdown::default(),
            transport_breakdown: TransportBreakdown::default(),
        }
    }
}

// ==========================================
// TrendBucket - time-bucketed rollup
// ==========================================

/// One (date, hour, region, transport mode) bucket of the trailing-window
/// trend rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBucket {
    pub date: NaiveDate,
    pub hour: u32,
    pub region: String,
    pub transport_type: TransportMode,
    pub total_messages: u64,
    pub sentiment_breakdown: SentimentBreakdown,
}

// ==========================================
// Transit Sentiment - engine layer
// ==========================================
// Read-only aggregation rules over stored records.
// ==========================================

pub mod aggregator;

pub use aggregator::SentimentAggregator;

// ==========================================
// Transit Sentiment - core library
// ==========================================
// Pipeline: scraped posts -> classifier -> dedup writer -> SQLite store
//           -> state-level aggregation -> read API
// Stack: Rust + SQLite
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Lexicon layer - gazetteer, sentiment words, transport keywords
pub mod lexicon;

// Classifier - sentiment / region / transport tagging
pub mod classifier;

// Engine layer - aggregation rules
pub mod engine;

// Repository layer - data access
pub mod repository;

// Ingestion layer - batch loading and dedup writes
pub mod ingest;

// Configuration layer
pub mod config;

// Database infrastructure (connection init / unified PRAGMA / schema)
pub mod db;

// Logging
pub mod logging;

// API layer - read interfaces for the dashboard
pub mod api;

// Application layer - wiring
pub mod app;

// ==========================================
// Re-exports of core types
// ==========================================

// Domain types
pub use domain::types::{InsertOutcome, SentimentLabel, TransportMode};

// Domain entities
pub use domain::{
    Classification, Location, RawPost, SentimentBreakdown, StateAggregate, TaggedPost,
    TransportBreakdown, TrendBucket,
};

// Lexicon
pub use lexicon::{Gazetteer, SentimentLexicon, TransportKeywords};

// Classifier
pub use classifier::Classifier;

// Engine
pub use engine::SentimentAggregator;

// Ingestion
pub use ingest::{IngestReport, IngestWriter};

// API
pub use api::{DashboardApi, FeedApi};

// Configuration
pub use config::AppConfig;

// ==========================================
// Constants
// ==========================================

// System version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Transit Sentiment";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

// ==========================================
// Transit Sentiment - domain layer
// ==========================================
// Entities and closed type sets shared by every layer.
// The stored-record shape here is the external contract of the pipeline:
// field names are what the dashboard frontend consumes.
// ==========================================

pub mod aggregate;
pub mod post;
pub mod types;

pub use aggregate::{SentimentBreakdown, StateAggregate, TransportBreakdown, TrendBucket};
pub use post::{Classification, Location, RawPost, TaggedPost};
pub use types::{InsertOutcome, SentimentLabel, TransportMode};

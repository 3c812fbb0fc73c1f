// ==========================================
// Transit Sentiment - ingestion layer
// ==========================================
// Batch loading of scraper output and dedup writes into the store.
// ==========================================

pub mod error;
pub mod writer;

pub use error::{IngestError, IngestResult};
pub use writer::{IngestReport, IngestWriter};

// ==========================================
// Transit Sentiment - ingestion error types
// ==========================================
// A duplicate id is NOT an error (see InsertOutcome); the variants here
// are the genuinely fatal conditions: unreadable input, malformed input,
// storage failure.
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

use crate::repository::error::RepositoryError;

/// Ingestion-layer error type.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("could not read input file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Storage failure mid-batch. Records inserted before the failure stay
    /// inserted; re-running the same batch is safe because ingestion is
    /// idempotent by id.
    #[error("storage failure during ingest: {0}")]
    Storage(#[from] RepositoryError),
}

/// Result type alias.
pub type IngestResult<T> = Result<T, IngestError>;

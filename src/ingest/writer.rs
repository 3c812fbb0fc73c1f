// ==========================================
// IngestWriter - classify-and-persist batches
// ==========================================
// Sequential inserts keyed by post id. Duplicates are skipped silently
// and counted; a storage failure aborts the batch after logging how far
// it got. Safe to re-run against the same input file (idempotent by id).
// ==========================================

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::classifier::Classifier;
use crate::domain::types::InsertOutcome;
use crate::domain::{RawPost, TaggedPost};
use crate::ingest::error::{IngestError, IngestResult};
use crate::repository::post_repo::PostRepository;

// ==========================================
// IngestReport
// ==========================================

/// Per-batch outcome counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    pub received: usize,
    pub inserted: usize,
    pub skipped: usize,
}

// ==========================================
// IngestWriter
// ==========================================

pub struct IngestWriter {
    classifier: Arc<Classifier>,
    repo: Arc<PostRepository>,
}

impl IngestWriter {
    pub fn new(classifier: Arc<Classifier>, repo: Arc<PostRepository>) -> Self {
        Self { classifier, repo }
    }

    /// Classify and persist a batch of raw posts.
    ///
    /// # Returns
    /// - `Ok(IngestReport)`: counts of inserted and skipped records
    /// - `Err(IngestError::Storage)`: a write failed for a reason other
    ///   than a duplicate id; records inserted before the failure remain
    pub fn ingest(&self, posts: &[RawPost]) -> IngestResult<IngestReport> {
        let mut report = IngestReport {
            received: posts.len(),
            ..Default::default()
        };

        for post in posts {
            let classification = self.classifier.classify(&post.text);
            let record = TaggedPost::from_parts(post, &classification);

            match self.repo.insert_or_ignore(&record) {
                Ok(InsertOutcome::Inserted) => report.inserted += 1,
                Ok(InsertOutcome::Skipped) => {
                    tracing::debug!(id = %post.id, "duplicate post id, skipping");
                    report.skipped += 1;
                }
                Err(e) => {
                    tracing::error!(
                        id = %post.id,
                        inserted = report.inserted,
                        skipped = report.skipped,
                        "storage failure, aborting batch: {e}"
                    );
                    return Err(IngestError::Storage(e));
                }
            }
        }

        tracing::info!(
            received = report.received,
            inserted = report.inserted,
            skipped = report.skipped,
            "batch ingested"
        );
        Ok(report)
    }

    /// Load a scraper output file (JSON array of posts) and ingest it.
    pub fn ingest_file(&self, path: &Path) -> IngestResult<IngestReport> {
        let raw = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let posts: Vec<RawPost> = serde_json::from_str(&raw)?;
        self.ingest(&posts)
    }
}

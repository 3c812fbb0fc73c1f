// ==========================================
// PostRepository - stored-record access
// ==========================================
// Repository does no business logic, only SQL and row mapping.
// Dedup semantics live in INSERT OR IGNORE on the id primary key; the
// per-row change count distinguishes Inserted from Skipped.
// ==========================================

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

use crate::domain::types::{InsertOutcome, SentimentLabel, TransportMode};
use crate::domain::TaggedPost;
use crate::repository::error::{RepositoryError, RepositoryResult};

pub struct PostRepository {
    conn: Arc<Mutex<Connection>>,
    /// Region substituted for blank/missing region values on read.
    default_region: String,
}

impl PostRepository {
    /// Create a new post repository over a shared connection.
    ///
    /// # Parameters
    /// - conn: shared SQLite connection
    /// - default_region: documented fallback for degraded region fields
    pub fn new(conn: Arc<Mutex<Connection>>, default_region: impl Into<String>) -> Self {
        Self {
            conn,
            default_region: default_region.into(),
        }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // Writes
    // ==========================================

    /// Insert a tagged post, skipping silently when the id already exists.
    ///
    /// # Returns
    /// - `Ok(InsertOutcome::Inserted)`: new record persisted
    /// - `Ok(InsertOutcome::Skipped)`: id already present, nothing written
    /// - `Err(...)`: storage failure
    pub fn insert_or_ignore(&self, post: &TaggedPost) -> RepositoryResult<InsertOutcome> {
        let conn = self.get_conn()?;

        let changed = conn.execute(
            r#"
            INSERT OR IGNORE INTO post_sentiment (
                id, text, created_at, author_id,
                sentiment_label, polarity, region, city, transport_type
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                post.id,
                post.text,
                post.created_at,
                post.author_id,
                post.sentiment_label.as_str(),
                post.polarity,
                post.region,
                post.city,
                post.transport_type.as_str(),
            ],
        )?;

        if changed == 1 {
            Ok(InsertOutcome::Inserted)
        } else {
            Ok(InsertOutcome::Skipped)
        }
    }

    // ==========================================
    // Reads
    // ==========================================

    /// Most recent posts first, capped at `limit`.
    pub fn find_recent(&self, limit: u32) -> RepositoryResult<Vec<TaggedPost>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, text, created_at, author_id,
                   sentiment_label, polarity, region, city, transport_type
            FROM post_sentiment
            ORDER BY created_at DESC
            LIMIT ?1
            "#,
        )?;

        let rows = stmt.query_map(params![limit], |row| self.map_row(row))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// All stored records, unordered (aggregation input).
    pub fn find_all(&self) -> RepositoryResult<Vec<TaggedPost>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, text, created_at, author_id,
                   sentiment_label, polarity, region, city, transport_type
            FROM post_sentiment
            "#,
        )?;

        let rows = stmt.query_map([], |row| self.map_row(row))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Records created at or after `cutoff` (trend-rollup input).
    pub fn find_since(&self, cutoff: DateTime<Utc>) -> RepositoryResult<Vec<TaggedPost>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, text, created_at, author_id,
                   sentiment_label, polarity, region, city, transport_type
            FROM post_sentiment
            WHERE created_at >= ?1
            "#,
        )?;

        let rows = stmt.query_map(params![cutoff], |row| self.map_row(row))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Total number of stored records.
    pub fn count(&self) -> RepositoryResult<u64> {
        let conn = self.get_conn()?;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM post_sentiment", [], |row| row.get(0))?;
        Ok(n as u64)
    }

    /// Trivial probe used by the health check.
    pub fn ping(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }

    // ==========================================
    // Row mapping
    // ==========================================

    /// Map a row to the stored-record shape. Malformed fields degrade to
    /// the documented defaults instead of failing the read: unknown
    /// sentiment -> neutral, unknown mode -> bus, blank region -> the
    /// configured default, missing polarity -> 0.0.
    fn map_row(&self, row: &Row<'_>) -> rusqlite::Result<TaggedPost> {
        let sentiment: Option<String> = row.get(4)?;
        let polarity: Option<f64> = row.get(5)?;
        let region: Option<String> = row.get(6)?;
        let transport: Option<String> = row.get(8)?;

        Ok(TaggedPost {
            id: row.get(0)?,
            text: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            created_at: row.get(2)?,
            author_id: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            sentiment_label: SentimentLabel::from_stored(sentiment.as_deref().unwrap_or("")),
            polarity: polarity.unwrap_or(0.0),
            region: region
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| self.default_region.clone()),
            city: row.get(7)?,
            transport_type: TransportMode::from_stored(transport.as_deref().unwrap_or("")),
        })
    }
}

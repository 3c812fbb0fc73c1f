// ==========================================
// Transit Sentiment - SQLite connection init
// ==========================================
// Goals:
// - a single place for Connection::open PRAGMA behavior, so every module
//   gets the same foreign_keys / busy_timeout settings
// - schema bootstrap for the one stored-record table
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds).
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the unified PRAGMAs to a connection.
///
/// foreign_keys and busy_timeout are per-connection settings and must be
/// applied to every connection that is opened.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the unified configuration applied.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create the stored-record table if it does not exist yet.
///
/// `id` is the only uniqueness constraint; dedup on ingest relies on it.
/// Idempotent, safe to run at every startup.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS post_sentiment (
            id              TEXT PRIMARY KEY,
            text            TEXT NOT NULL,
            created_at      TEXT NOT NULL,
            author_id       TEXT NOT NULL DEFAULT '',
            sentiment_label TEXT NOT NULL,
            polarity        REAL NOT NULL DEFAULT 0.0,
            region          TEXT NOT NULL,
            city            TEXT,
            transport_type  TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_post_sentiment_created_at
            ON post_sentiment (created_at);
        CREATE INDEX IF NOT EXISTS idx_post_sentiment_region
            ON post_sentiment (region);
        "#,
    )
}

// ==========================================
// API integration test helpers
// ==========================================
// Full pipeline over a temp SQLite file: classifier, writer, feed and
// dashboard APIs wired exactly as in production.
// ==========================================

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use tempfile::NamedTempFile;

use transit_sentiment::app::AppState;
use transit_sentiment::config::AppConfig;
use transit_sentiment::domain::RawPost;

/// Test environment wrapping a fully wired AppState.
pub struct ApiTestEnv {
    pub state: AppState,

    // keeps the temp database alive for the test's duration
    _temp_file: NamedTempFile,
}

impl ApiTestEnv {
    pub fn new() -> anyhow::Result<Self> {
        transit_sentiment::logging::init_test();

        let temp_file = NamedTempFile::new()?;
        let db_path = temp_file.path().to_string_lossy().into_owned();
        let state = AppState::new(AppConfig::with_db_path(db_path))?;

        Ok(Self {
            state,
            _temp_file: temp_file,
        })
    }

    pub fn db_path(&self) -> &str {
        &self.state.config.db_path
    }
}

/// Build a raw post with the given id, text and timestamp.
pub fn post(id: &str, text: &str, created_at: DateTime<Utc>) -> RawPost {
    RawPost {
        id: id.to_string(),
        text: text.to_string(),
        created_at,
        author_id: format!("author-{id}"),
    }
}

/// Fixed-date timestamp helper (August 2026).
pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap()
}

// ==========================================
// Transit Sentiment - configuration
// ==========================================
// One explicit configuration value, built once and passed into components
// at construction time. No process-wide mutable globals: the db path,
// page sizes and the default region all travel through AppConfig.
// ==========================================

use std::env;
use std::path::PathBuf;

/// Feed page cap (spec'd fixed page size of the read API).
pub const DEFAULT_FEED_PAGE_SIZE: u32 = 100;

/// Trailing trend window, in days.
pub const DEFAULT_TREND_WINDOW_DAYS: i64 = 7;

/// Region used when no gazetteer pass matches.
pub const DEFAULT_REGION: &str = "Delhi";

// ==========================================
// AppConfig
// ==========================================

/// Application configuration, injected into `AppState::new`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database file path.
    pub db_path: String,
    /// Maximum number of posts returned by the feed endpoint.
    pub feed_page_size: u32,
    /// Trailing window for trend rollups, in days.
    pub trend_window_days: i64,
    /// Fallback region for posts with no location signal.
    pub default_region: String,
}

impl AppConfig {
    /// Build a config for an explicit database path, with the documented
    /// defaults for everything else.
    pub fn with_db_path(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            feed_page_size: DEFAULT_FEED_PAGE_SIZE,
            trend_window_days: DEFAULT_TREND_WINDOW_DAYS,
            default_region: DEFAULT_REGION.to_string(),
        }
    }

    /// Build a config from environment variables, falling back to the
    /// platform data directory for the database file.
    ///
    /// # Environment
    /// - TRANSIT_SENTIMENT_DB: database file path
    /// - TRANSIT_SENTIMENT_DEFAULT_REGION: fallback region
    pub fn from_env() -> Self {
        let db_path = env::var("TRANSIT_SENTIMENT_DB").unwrap_or_else(|_| default_db_path());
        let default_region = env::var("TRANSIT_SENTIMENT_DEFAULT_REGION")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Self {
            db_path,
            feed_page_size: DEFAULT_FEED_PAGE_SIZE,
            trend_window_days: DEFAULT_TREND_WINDOW_DAYS,
            default_region,
        }
    }
}

/// Default database location: `<data dir>/transit-sentiment/transit_sentiment.db`,
/// falling back to the working directory when no data dir is available.
pub fn default_db_path() -> String {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    let dir = base.join("transit-sentiment");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!("could not create data dir {}: {}", dir.display(), e);
        return "transit_sentiment.db".to_string();
    }
    dir.join("transit_sentiment.db").to_string_lossy().into_owned()
}

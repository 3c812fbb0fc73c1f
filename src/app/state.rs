// ==========================================
// Transit Sentiment - application state
// ==========================================
// Builds the whole pipeline from one AppConfig value: shared connection,
// lookup tables, classifier, writer and read APIs. Configuration is
// injected here instead of read from process-wide globals.
// ==========================================

use std::sync::{Arc, Mutex};

use anyhow::Context;

use crate::api::{ApiResult, DashboardApi, FeedApi};
use crate::classifier::Classifier;
use crate::config::AppConfig;
use crate::db;
use crate::ingest::IngestWriter;
use crate::lexicon::{Gazetteer, SentimentLexicon, TransportKeywords};
use crate::repository::post_repo::PostRepository;

/// Application state: all API instances and shared resources.
pub struct AppState {
    pub config: AppConfig,
    pub classifier: Arc<Classifier>,
    pub writer: Arc<IngestWriter>,
    pub feed_api: Arc<FeedApi>,
    pub dashboard_api: Arc<DashboardApi>,
    pub post_repo: Arc<PostRepository>,
}

impl AppState {
    /// Build the pipeline.
    ///
    /// # Parameters
    /// - config: application configuration (db path, page sizes, defaults)
    ///
    /// # Returns
    /// - `Ok(AppState)`: ready-to-use instance
    /// - `Err`: database could not be opened or initialized
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        tracing::info!(db_path = %config.db_path, "initializing AppState");

        let conn = db::open_sqlite_connection(&config.db_path)
            .with_context(|| format!("could not open database {}", config.db_path))?;
        db::init_schema(&conn).context("could not initialize schema")?;
        let conn = Arc::new(Mutex::new(conn));

        // Lookup tables: built once, shared read-only.
        let gazetteer = Arc::new(Gazetteer::india(config.default_region.clone()));
        let lexicon = Arc::new(SentimentLexicon::new());
        let transport = Arc::new(TransportKeywords::new());

        let classifier = Arc::new(Classifier::new(gazetteer, lexicon, transport));
        let post_repo = Arc::new(PostRepository::new(
            Arc::clone(&conn),
            config.default_region.clone(),
        ));

        let writer = Arc::new(IngestWriter::new(
            Arc::clone(&classifier),
            Arc::clone(&post_repo),
        ));
        let feed_api = Arc::new(FeedApi::new(Arc::clone(&post_repo), config.feed_page_size));
        let dashboard_api = Arc::new(DashboardApi::new(
            Arc::clone(&post_repo),
            config.trend_window_days,
        ));

        Ok(Self {
            config,
            classifier,
            writer,
            feed_api,
            dashboard_api,
            post_repo,
        })
    }

    /// Verify the store answers a trivial query (status endpoint probe).
    pub fn health_check(&self) -> ApiResult<()> {
        self.post_repo.ping().map_err(Into::into)
    }
}

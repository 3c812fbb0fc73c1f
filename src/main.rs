// ==========================================
// Transit Sentiment - batch entry point
// ==========================================
// Loads a scraper output file (JSON array of posts), classifies and
// ingests it, then prints the per-region summary. Re-running against the
// same file is safe: ingestion is idempotent by post id.
// ==========================================

use std::path::PathBuf;

use transit_sentiment::app::AppState;
use transit_sentiment::config::AppConfig;
use transit_sentiment::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("Transit Sentiment - classification pipeline");
    tracing::info!("version: {}", transit_sentiment::VERSION);
    tracing::info!("==================================================");

    // Usage: transit-sentiment [input.json]
    let input: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data.json".to_string())
        .into();

    let config = AppConfig::from_env();
    tracing::info!(db_path = %config.db_path, input = %input.display(), "starting ingest");

    let state = AppState::new(config)?;
    state.health_check()?;

    let report = state.writer.ingest_file(&input)?;
    tracing::info!(
        received = report.received,
        inserted = report.inserted,
        skipped = report.skipped,
        "ingest complete"
    );

    // Per-region summary, highest volume first.
    let summaries = state.dashboard_api.list_region_summaries()?;
    for agg in summaries.iter().take(10) {
        tracing::info!(
            region = %agg.region,
            total = agg.total_messages,
            score = %format!("{:+.2}", agg.sentiment_score),
            positive = agg.sentiment_breakdown.positive,
            negative = agg.sentiment_breakdown.negative,
            neutral = agg.sentiment_breakdown.neutral,
            "region summary"
        );
    }

    Ok(())
}

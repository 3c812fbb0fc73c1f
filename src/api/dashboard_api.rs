// ==========================================
// DashboardApi - aggregate queries
// ==========================================
// Per-region rollups, region drill-down and trend rollups for the
// dashboard frontend. Delegates the math to SentimentAggregator; every
// call recomputes from stored records (no caching).
// ==========================================

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{StateAggregate, TrendBucket};
use crate::engine::SentimentAggregator;
use crate::repository::post_repo::PostRepository;

pub struct DashboardApi {
    repo: Arc<PostRepository>,
    /// Trailing trend window in days (7 in the standard configuration).
    trend_window_days: i64,
}

impl DashboardApi {
    pub fn new(repo: Arc<PostRepository>, trend_window_days: i64) -> Self {
        Self {
            repo,
            trend_window_days,
        }
    }

    /// Per-region aggregate list, sorted by message volume descending.
    ///
    /// # Returns
    /// - `Ok(Vec<StateAggregate>)`: empty when the store is empty
    /// - `Err(ApiError)`: storage failure
    pub fn list_region_summaries(&self) -> ApiResult<Vec<StateAggregate>> {
        let records = self.repo.find_all()?;
        Ok(SentimentAggregator::aggregate_by_region(&records))
    }

    /// Region drill-down by partial, case-insensitive region-name match.
    /// When several regions match, the highest-volume one is returned.
    ///
    /// # Returns
    /// - `Ok(StateAggregate)`: rollup for the matched region
    /// - `Err(ApiError::NotFound)`: no region matches the query
    pub fn get_region_detail(&self, query: &str) -> ApiResult<StateAggregate> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(ApiError::InvalidInput("region query must not be empty".to_string()));
        }

        let records = self.repo.find_all()?;
        SentimentAggregator::aggregate_by_region(&records)
            .into_iter()
            .find(|agg| agg.region.to_lowercase().contains(&needle))
            .ok_or_else(|| ApiError::NotFound(format!("no region matching '{query}'")))
    }

    /// Trailing-window trend rollup grouped by date, hour, region and
    /// transport mode.
    ///
    /// # Parameters
    /// - now: end of the trailing window (query time)
    pub fn list_trend_buckets(&self, now: DateTime<Utc>) -> ApiResult<Vec<TrendBucket>> {
        let cutoff = now - Duration::days(self.trend_window_days);
        let records = self.repo.find_since(cutoff)?;
        Ok(SentimentAggregator::aggregate_trend(
            &records,
            now,
            self.trend_window_days,
        ))
    }
}

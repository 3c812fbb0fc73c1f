// ==========================================
// Transit Sentiment - aggregation engine
// ==========================================
// Pure fold over stored records: per-region rollups and time-bucketed
// trend rollups. Counts are recomputed fresh on every call; nothing here
// is cached or sampled.
// ==========================================

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};

use crate::domain::{StateAggregate, TaggedPost, TrendBucket};
use crate::domain::types::TransportMode;

// ==========================================
// SentimentAggregator
// ==========================================

/// Stateless aggregation over stored records.
///
/// `sentiment_score` is the normalized net count
/// `(positive - negative) / total_messages`. The same convention is applied
/// by every aggregation endpoint.
pub struct SentimentAggregator;

impl SentimentAggregator {
    /// Group records by region and produce per-region rollups, sorted by
    /// `total_messages` descending (region name ascending as tie-break so
    /// the order is deterministic).
    pub fn aggregate_by_region(records: &[TaggedPost]) -> Vec<StateAggregate> {
        let mut by_region: HashMap<&str, StateAggregate> = HashMap::new();

        for record in records {
            let entry = by_region
                .entry(record.region.as_str())
                .or_insert_with(|| StateAggregate::new(record.region.clone()));
            entry.total_messages += 1;
            entry.sentiment_breakdown.record(record.sentiment_label);
            entry.transport_breakdown.record(record.transport_type);
        }

        let mut aggregates: Vec<StateAggregate> = by_region
            .into_values()
            .map(|mut agg| {
                agg.sentiment_score = Self::sentiment_score(
                    agg.sentiment_breakdown.positive,
                    agg.sentiment_breakdown.negative,
                    agg.total_messages,
                );
                agg
            })
            .collect();

        aggregates.sort_by(|a, b| {
            b.total_messages
                .cmp(&a.total_messages)
                .then_with(|| a.region.cmp(&b.region))
        });
        aggregates
    }

    /// Normalized net sentiment: `(positive - negative) / total`, zero when
    /// there are no messages.
    pub fn sentiment_score(positive: u64, negative: u64, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (positive as f64 - negative as f64) / total as f64
    }

    /// Time-bucketed trend rollup over the trailing window ending at `now`:
    /// records are filtered to `[now - window_days, now]`, then grouped by
    /// (date, hour, region, transport mode).
    ///
    /// Output is sorted by (date, hour, region, mode) so buckets are stable
    /// across calls.
    pub fn aggregate_trend(
        records: &[TaggedPost],
        now: DateTime<Utc>,
        window_days: i64,
    ) -> Vec<TrendBucket> {
        let cutoff = now - Duration::days(window_days);

        type Key = (NaiveDate, u32, String, TransportMode);
        let mut buckets: HashMap<Key, TrendBucket> = HashMap::new();

        for record in records {
            if record.created_at < cutoff || record.created_at > now {
                continue;
            }
            let date = record.created_at.date_naive();
            let hour = record.created_at.hour();
            let key = (date, hour, record.region.clone(), record.transport_type);

            let bucket = buckets.entry(key).or_insert_with(|| TrendBucket {
                date,
                hour,
                region: record.region.clone(),
                transport_type: record.transport_type,
                total_messages: 0,
                sentiment_breakdown: Default::default(),
            });
            bucket.total_messages += 1;
            bucket.sentiment_breakdown.record(record.sentiment_label);
        }

        let mut out: Vec<TrendBucket> = buckets.into_values().collect();
        out.sort_by(|a, b| {
            (a.date, a.hour, a.region.as_str(), a.transport_type.as_str())
                .cmp(&(b.date, b.hour, b.region.as_str(), b.transport_type.as_str()))
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::SentimentLabel;
    use chrono::TimeZone;

    fn record(
        id: &str,
        region: &str,
        label: SentimentLabel,
        mode: TransportMode,
        at: DateTime<Utc>,
    ) -> TaggedPost {
        TaggedPost {
            id: id.to_string(),
            text: String::new(),
            created_at: at,
            author_id: String::new(),
            sentiment_label: label,
            polarity: 0.0,
            region: region.to_string(),
            city: None,
            transport_type: mode,
        }
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_counts_sum_to_input_size() {
        let records = vec![
            record("1", "Delhi", SentimentLabel::Positive, TransportMode::Metro, at(20, 9)),
            record("2", "Delhi", SentimentLabel::Negative, TransportMode::Bus, at(20, 10)),
            record("3", "Kerala", SentimentLabel::Neutral, TransportMode::Auto, at(21, 8)),
            record("4", "Kerala", SentimentLabel::Positive, TransportMode::Auto, at(21, 8)),
            record("5", "Kerala", SentimentLabel::Positive, TransportMode::Taxi, at(22, 7)),
        ];

        let aggregates = SentimentAggregator::aggregate_by_region(&records);
        let total: u64 = aggregates.iter().map(|a| a.total_messages).sum();
        assert_eq!(total, records.len() as u64);

        for agg in &aggregates {
            assert_eq!(agg.sentiment_breakdown.total(), agg.total_messages);
            assert_eq!(agg.transport_breakdown.total(), agg.total_messages);
        }
    }

    #[test]
    fn test_sorted_by_volume_descending() {
        let records = vec![
            record("1", "Delhi", SentimentLabel::Neutral, TransportMode::Bus, at(20, 9)),
            record("2", "Kerala", SentimentLabel::Neutral, TransportMode::Bus, at(20, 9)),
            record("3", "Kerala", SentimentLabel::Neutral, TransportMode::Bus, at(20, 9)),
        ];
        let aggregates = SentimentAggregator::aggregate_by_region(&records);
        assert_eq!(aggregates[0].region, "Kerala");
        assert_eq!(aggregates[1].region, "Delhi");
    }

    #[test]
    fn test_sentiment_score_convention() {
        // 2 positive, 1 negative, 1 neutral -> (2 - 1) / 4 = 0.25
        let records = vec![
            record("1", "Delhi", SentimentLabel::Positive, TransportMode::Bus, at(20, 9)),
            record("2", "Delhi", SentimentLabel::Positive, TransportMode::Bus, at(20, 9)),
            record("3", "Delhi", SentimentLabel::Negative, TransportMode::Bus, at(20, 9)),
            record("4", "Delhi", SentimentLabel::Neutral, TransportMode::Bus, at(20, 9)),
        ];
        let aggregates = SentimentAggregator::aggregate_by_region(&records);
        assert!((aggregates[0].sentiment_score - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input() {
        assert!(SentimentAggregator::aggregate_by_region(&[]).is_empty());
        assert_eq!(SentimentAggregator::sentiment_score(0, 0, 0), 0.0);
    }

    #[test]
    fn test_trend_window_filters_old_records() {
        let now = at(27, 12);
        let records = vec![
            record("1", "Delhi", SentimentLabel::Positive, TransportMode::Metro, at(26, 9)),
            record("2", "Delhi", SentimentLabel::Negative, TransportMode::Metro, at(26, 9)),
            // 9 days old: outside the 7-day window
            record("3", "Delhi", SentimentLabel::Positive, TransportMode::Metro, at(18, 9)),
        ];

        let buckets = SentimentAggregator::aggregate_trend(&records, now, 7);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].total_messages, 2);
        assert_eq!(buckets[0].hour, 9);
        assert_eq!(buckets[0].sentiment_breakdown.positive, 1);
        assert_eq!(buckets[0].sentiment_breakdown.negative, 1);
    }

    #[test]
    fn test_trend_groups_by_hour_region_and_mode() {
        let now = at(27, 12);
        let records = vec![
            record("1", "Delhi", SentimentLabel::Neutral, TransportMode::Metro, at(26, 9)),
            record("2", "Delhi", SentimentLabel::Neutral, TransportMode::Bus, at(26, 9)),
            record("3", "Delhi", SentimentLabel::Neutral, TransportMode::Metro, at(26, 10)),
            record("4", "Kerala", SentimentLabel::Neutral, TransportMode::Metro, at(26, 9)),
        ];

        let buckets = SentimentAggregator::aggregate_trend(&records, now, 7);
        assert_eq!(buckets.len(), 4);
        let total: u64 = buckets.iter().map(|b| b.total_messages).sum();
        assert_eq!(total, 4);
    }
}

// ==========================================
// Transit Sentiment - post entities
// ==========================================
// RawPost is the scraper's output (external contract: non-empty unique id).
// TaggedPost is the stored record: one per post id, immutable once written.
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{SentimentLabel, TransportMode};

// ==========================================
// RawPost - scraper output
// ==========================================

/// A scraped social-media post, as emitted by the (external) scraper.
///
/// The scraper guarantees a non-empty unique `id`. `author_id` may be
/// absent in older capture files and defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPost {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub author_id: String,
}

// ==========================================
// Location - structured region/city value
// ==========================================

/// Detected location. Region is always present (default region when no
/// signal was found); city is only set when a city name matched.
///
/// A single structured value, never a "city, state" composite string that
/// would have to be re-split downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub region: String,
    pub city: Option<String>,
}

impl Location {
    pub fn region_only(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            city: None,
        }
    }

    pub fn with_city(region: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            city: Some(city.into()),
        }
    }
}

// ==========================================
// Classification - classifier output
// ==========================================

/// Per-post classifier output. Classification never fails: absence of
/// signal resolves to documented defaults (neutral / default region / bus).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub sentiment_label: SentimentLabel,
    /// Signed intensity in [-1, 1], clamped after emoji adjustment.
    pub polarity: f64,
    pub location: Location,
    pub transport_type: TransportMode,
}

// ==========================================
// TaggedPost - the stored record
// ==========================================

/// A classified post as persisted, keyed by `id`. Field names are the
/// external read-API contract and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedPost {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub author_id: String,
    pub sentiment_label: SentimentLabel,
    pub polarity: f64,
    pub region: String,
    pub city: Option<String>,
    pub transport_type: TransportMode,
}

impl TaggedPost {
    /// Combine a raw post with its classification into the stored shape.
    pub fn from_parts(post: &RawPost, classification: &Classification) -> Self {
        Self {
            id: post.id.clone(),
            text: post.text.clone(),
            created_at: post.created_at,
            author_id: post.author_id.clone(),
            sentiment_label: classification.sentiment_label,
            polarity: classification.polarity,
            region: classification.location.region.clone(),
            city: classification.location.city.clone(),
            transport_type: classification.transport_type,
        }
    }
}

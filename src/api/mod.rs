// ==========================================
// Transit Sentiment - API layer
// ==========================================
// Read interfaces consumed by the dashboard frontend. Input validation
// happens here; storage failures surface as structured ApiError values,
// never as panics.
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod feed_api;

pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
pub use feed_api::FeedApi;

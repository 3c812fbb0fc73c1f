// ==========================================
// FeedApi - tagged-post feed
// ==========================================
// Individual tagged posts, most-recent-first, capped at a fixed page
// size. The stored-record shape IS the response shape; no re-mapping.
// ==========================================

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::TaggedPost;
use crate::repository::post_repo::PostRepository;

pub struct FeedApi {
    repo: Arc<PostRepository>,
    /// Hard page cap; requested limits above this are clamped.
    page_size: u32,
}

impl FeedApi {
    /// # Parameters
    /// - repo: stored-record repository
    /// - page_size: fixed page cap (100 in the standard configuration)
    pub fn new(repo: Arc<PostRepository>, page_size: u32) -> Self {
        Self { repo, page_size }
    }

    /// List tagged posts, most recent first.
    ///
    /// # Parameters
    /// - limit: optional caller limit; clamped to the page cap. None means
    ///   a full page.
    ///
    /// # Returns
    /// - `Ok(Vec<TaggedPost>)`: may be empty (no data is not an error)
    /// - `Err(ApiError)`: storage failure
    pub fn list_recent(&self, limit: Option<u32>) -> ApiResult<Vec<TaggedPost>> {
        let limit = match limit {
            Some(0) => return Err(ApiError::InvalidInput("limit must be at least 1".to_string())),
            Some(n) => n.min(self.page_size),
            None => self.page_size,
        };

        self.repo.find_recent(limit).map_err(Into::into)
    }
}

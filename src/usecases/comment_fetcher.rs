//! Comment fetcher: every top-level comment of a video, page by page.
//!
//! - `CommentPages` is a lazy, restartable page sequence over one video
//! - `CommentFetcher` drains it (optionally capped) into one ordered Vec
//! - A failed page leaves the cursor in place; the error goes to the caller

use crate::domain::{DomainError, VideoId};
use crate::ports::VideoPlatform;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
enum Cursor {
    Start,
    Next(String),
    Done,
}

/// Lazy sequence of comment pages for one video.
pub struct CommentPages {
    platform: Arc<dyn VideoPlatform>,
    video_id: VideoId,
    page_size: u32,
    cursor: Cursor,
    pages_fetched: usize,
}

impl CommentPages {
    /// Sequence starting at the first page.
    pub fn new(platform: Arc<dyn VideoPlatform>, video_id: VideoId, page_size: u32) -> Self {
        Self {
            platform,
            video_id,
            page_size,
            cursor: Cursor::Start,
            pages_fetched: 0,
        }
    }

    /// Sequence starting at a previously saved checkpoint token.
    pub fn resume(
        platform: Arc<dyn VideoPlatform>,
        video_id: VideoId,
        page_size: u32,
        token: String,
    ) -> Self {
        let mut pages = Self::new(platform, video_id, page_size);
        pages.cursor = Cursor::Next(token);
        pages
    }

    /// Token of the next page to fetch, if the walk is mid-way.
    pub fn checkpoint(&self) -> Option<&str> {
        match &self.cursor {
            Cursor::Next(token) => Some(token),
            _ => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == Cursor::Done
    }

    /// Pages successfully fetched since construction or the last restart.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Rewind to the first page.
    pub fn restart(&mut self) {
        self.cursor = Cursor::Start;
        self.pages_fetched = 0;
    }

    /// Fetch the next page. `None` once the last page has been yielded.
    pub async fn next_page(&mut self) -> Option<Result<Vec<String>, DomainError>> {
        let token = match &self.cursor {
            Cursor::Done => return None,
            Cursor::Start => None,
            Cursor::Next(token) => Some(token.as_str()),
        };

        let page = match self
            .platform
            .list_comment_threads(&self.video_id, self.page_size, token)
            .await
        {
            Ok(page) => page,
            Err(e) => return Some(Err(e)),
        };

        self.pages_fetched += 1;
        self.cursor = match page.next_page_token {
            Some(next) => Cursor::Next(next),
            None => Cursor::Done,
        };
        debug!(
            video_id = %self.video_id,
            page = self.pages_fetched,
            count = page.items.len(),
            "comment page"
        );
        Some(Ok(page.items))
    }
}

/// Fetches all top-level comments of a video.
pub struct CommentFetcher {
    platform: Arc<dyn VideoPlatform>,
    page_size: u32,
    max_pages: Option<usize>,
}

impl CommentFetcher {
    /// # Arguments
    /// * `platform` - client handle shared for the run
    /// * `page_size` - comments per request (API allows 1..=100)
    pub fn new(platform: Arc<dyn VideoPlatform>, page_size: u32) -> Self {
        Self {
            platform,
            page_size,
            max_pages: None,
        }
    }

    /// Stop after `max_pages` pages per video. `None` = follow pagination to exhaustion.
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Page sequence for `video_id`, for callers that drive pagination themselves.
    pub fn pages(&self, video_id: &VideoId) -> CommentPages {
        CommentPages::new(Arc::clone(&self.platform), video_id.clone(), self.page_size)
    }

    /// All comment texts of `video_id`, in page order.
    pub async fn fetch_all(&self, video_id: &VideoId) -> Result<Vec<String>, DomainError> {
        if self.page_size == 0 {
            return Err(DomainError::InvalidInput("page size must be positive".into()));
        }

        let mut pages = self.pages(video_id);
        let mut comments = Vec::new();
        while let Some(page) = pages.next_page().await {
            comments.extend(page?);
            if self
                .max_pages
                .is_some_and(|cap| pages.pages_fetched() >= cap)
            {
                if !pages.is_exhausted() {
                    info!(
                        video_id = %video_id,
                        pages = pages.pages_fetched(),
                        "page cap reached, stopping early"
                    );
                }
                break;
            }
        }

        info!(
            video_id = %video_id,
            count = comments.len(),
            pages = pages.pages_fetched(),
            "fetched comments"
        );
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::youtube::{MockFailure, MockPlatform};
    use chrono::Utc;

    fn pages(texts: &[&[&str]]) -> Vec<Vec<String>> {
        texts.iter()
            .map(|p| p.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[tokio::test]
    async fn test_k_pages_k_requests_in_order() {
        let mock = Arc::new(MockPlatform::new("UC1").with_video(
            "v1",
            Utc::now(),
            pages(&[&["a", "b"], &["c"], &["d", "e"], &["f"]]),
        ));
        let fetcher = CommentFetcher::new(mock.clone(), 100);
        let id = VideoId::new("v1");

        let comments = fetcher.fetch_all(&id).await.unwrap();

        assert_eq!(comments, ["a", "b", "c", "d", "e", "f"]);
        assert_eq!(mock.comment_calls(&id), 4);
    }

    #[tokio::test]
    async fn test_single_page() {
        let mock = Arc::new(MockPlatform::new("UC1").with_video(
            "v1",
            Utc::now(),
            pages(&[&["only"]]),
        ));
        let fetcher = CommentFetcher::new(mock.clone(), 100);
        let id = VideoId::new("v1");

        assert_eq!(fetcher.fetch_all(&id).await.unwrap(), ["only"]);
        assert_eq!(mock.comment_calls(&id), 1);
    }

    #[tokio::test]
    async fn test_zero_comments_is_empty() {
        let mock = Arc::new(MockPlatform::new("UC1").with_video("v1", Utc::now(), vec![]));
        let fetcher = CommentFetcher::new(mock, 100);

        let comments = fetcher.fetch_all(&VideoId::new("v1")).await.unwrap();

        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn test_comments_disabled_is_empty() {
        let mock = Arc::new(MockPlatform::new("UC1").with_comments_disabled("v1", Utc::now()));
        let fetcher = CommentFetcher::new(mock, 100);

        let comments = fetcher.fetch_all(&VideoId::new("v1")).await.unwrap();

        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn test_error_propagates() {
        let mock = Arc::new(
            MockPlatform::new("UC1")
                .with_video("v1", Utc::now(), pages(&[&["a"]]))
                .with_video_failure("v1", MockFailure::NotFound),
        );
        let fetcher = CommentFetcher::new(mock, 100);

        let err = fetcher.fetch_all(&VideoId::new("v1")).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_page_cap() {
        let mock = Arc::new(MockPlatform::new("UC1").with_video(
            "v1",
            Utc::now(),
            pages(&[&["a"], &["b"], &["c"]]),
        ));
        let fetcher = CommentFetcher::new(mock.clone(), 100).with_max_pages(Some(2));
        let id = VideoId::new("v1");

        assert_eq!(fetcher.fetch_all(&id).await.unwrap(), ["a", "b"]);
        assert_eq!(mock.comment_calls(&id), 2);
    }

    #[tokio::test]
    async fn test_pages_checkpoint_resume_restart() {
        let mock = Arc::new(MockPlatform::new("UC1").with_video(
            "v1",
            Utc::now(),
            pages(&[&["a"], &["b"], &["c"]]),
        ));
        let id = VideoId::new("v1");
        let mut seq = CommentPages::new(mock.clone(), id.clone(), 100);

        assert_eq!(seq.next_page().await.unwrap().unwrap(), ["a"]);
        let token = seq.checkpoint().unwrap().to_string();

        let mut resumed = CommentPages::resume(mock.clone(), id.clone(), 100, token);
        assert_eq!(resumed.next_page().await.unwrap().unwrap(), ["b"]);
        assert_eq!(resumed.next_page().await.unwrap().unwrap(), ["c"]);
        assert!(resumed.next_page().await.is_none());
        assert!(resumed.is_exhausted());
        assert_eq!(resumed.checkpoint(), None);

        seq.restart();
        assert_eq!(seq.pages_fetched(), 0);
        assert_eq!(seq.next_page().await.unwrap().unwrap(), ["a"]);
    }

    #[tokio::test]
    async fn test_failed_page_keeps_cursor() {
        let mock = Arc::new(
            MockPlatform::new("UC1").with_video_failure("v1", MockFailure::Network),
        );
        let mut seq = CommentPages::new(mock, VideoId::new("v1"), 100);

        assert!(matches!(
            seq.next_page().await,
            Some(Err(DomainError::TransientNetwork(_)))
        ));
        assert!(!seq.is_exhausted());
        assert_eq!(seq.pages_fetched(), 0);
    }

    #[tokio::test]
    async fn test_zero_page_size_rejected() {
        let mock = Arc::new(MockPlatform::new("UC1").with_video("v1", Utc::now(), vec![]));
        let fetcher = CommentFetcher::new(mock, 0);
        assert!(matches!(
            fetcher.fetch_all(&VideoId::new("v1")).await,
            Err(DomainError::InvalidInput(_))
        ));
    }
}

//! Channel video lister: N most recent videos of a channel.
//!
//! The search endpoint caps a page at 50 ids. Counts up to that cap take
//! exactly one search call; larger counts follow the continuation token
//! until enough ids are collected or a page comes back empty.

use crate::domain::{DomainError, VideoId};
use crate::ports::VideoPlatform;
use std::sync::Arc;
use tracing::{debug, info};

/// Max ids per search page accepted by the API.
pub const SEARCH_PAGE_LIMIT: u32 = 50;

pub struct VideoLister {
    platform: Arc<dyn VideoPlatform>,
}

impl VideoLister {
    pub fn new(platform: Arc<dyn VideoPlatform>) -> Self {
        Self { platform }
    }

    /// Up to `max_results` video ids of `channel_id`, most recent first.
    pub async fn list_recent(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<VideoId>, DomainError> {
        let channel_id = channel_id.trim();
        if channel_id.is_empty() {
            return Err(DomainError::InvalidInput("channel id is empty".into()));
        }
        if max_results == 0 {
            return Err(DomainError::InvalidInput(
                "max_results must be positive".into(),
            ));
        }

        let wanted = max_results as usize;
        let mut ids: Vec<VideoId> = Vec::with_capacity(wanted);
        let mut token: Option<String> = None;

        loop {
            let remaining = (wanted - ids.len()) as u32;
            let page_size = remaining.min(SEARCH_PAGE_LIMIT);
            let page = self
                .platform
                .search_channel_videos(channel_id, page_size, token.as_deref())
                .await?;
            debug!(channel_id, count = page.items.len(), "search page");
            let page_empty = page.items.is_empty();
            ids.extend(page.items);

            // Below the page cap one call is final, even when a token came back.
            if ids.len() >= wanted || max_results <= SEARCH_PAGE_LIMIT || page_empty {
                break;
            }
            match page.next_page_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }

        ids.truncate(wanted);
        info!(channel_id, count = ids.len(), max_results, "listed channel videos");
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::youtube::{MockFailure, MockPlatform};
    use crate::domain::{CommentPage, VideoPage};
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Search that returns `first` ids on page one, then empty pages, always with a token.
    struct ShortPages {
        first: usize,
        calls: AtomicUsize,
    }

    impl ShortPages {
        fn new(first: usize) -> Self {
            Self {
                first,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl VideoPlatform for ShortPages {
        async fn search_channel_videos(
            &self,
            _channel_id: &str,
            _page_size: u32,
            _page_token: Option<&str>,
        ) -> Result<VideoPage, DomainError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call > 100 {
                return Err(DomainError::InvalidInput("search called too often".into()));
            }
            let items = if call == 0 {
                (0..self.first).map(|i| VideoId::new(format!("v{}", i))).collect()
            } else {
                Vec::new()
            };
            Ok(VideoPage::new(items, Some(format!("page-{}", call + 1))))
        }

        async fn list_comment_threads(
            &self,
            _video_id: &VideoId,
            _page_size: u32,
            _page_token: Option<&str>,
        ) -> Result<CommentPage, DomainError> {
            Ok(CommentPage::empty())
        }
    }

    fn channel_with(n: usize) -> MockPlatform {
        let base = Utc::now();
        (0..n).fold(MockPlatform::new("UC1"), |mock, i| {
            mock.with_video(&format!("v{}", i), base - Duration::hours(i as i64), vec![])
        })
    }

    #[tokio::test]
    async fn test_caps_at_max_results_most_recent_first() {
        let mock = Arc::new(channel_with(10));
        let lister = VideoLister::new(mock.clone());

        let ids = lister.list_recent("UC1", 3).await.unwrap();

        let ids: Vec<_> = ids.iter().map(VideoId::as_str).collect();
        assert_eq!(ids, ["v0", "v1", "v2"]);
        assert_eq!(mock.search_calls(), 1);
    }

    #[tokio::test]
    async fn test_fewer_videos_than_requested() {
        let mock = Arc::new(channel_with(2));
        let lister = VideoLister::new(mock.clone());

        let ids = lister.list_recent("UC1", 5).await.unwrap();

        assert_eq!(ids.len(), 2);
        assert_eq!(mock.search_calls(), 1);
    }

    #[tokio::test]
    async fn test_large_counts_follow_search_pages() {
        let mock = Arc::new(channel_with(120));
        let lister = VideoLister::new(mock.clone());

        let ids = lister.list_recent("UC1", 75).await.unwrap();

        assert_eq!(ids.len(), 75);
        assert_eq!(ids[74].as_str(), "v74");
        assert_eq!(mock.search_calls(), 2);
    }

    #[tokio::test]
    async fn test_short_page_with_token_is_single_call() {
        let platform = Arc::new(ShortPages::new(2));
        let lister = VideoLister::new(platform.clone());

        let ids = lister.list_recent("UC1", 5).await.unwrap();

        assert_eq!(ids.len(), 2);
        assert_eq!(platform.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_large_counts_stop_on_empty_page() {
        let platform = Arc::new(ShortPages::new(30));
        let lister = VideoLister::new(platform.clone());

        let ids = lister.list_recent("UC1", 120).await.unwrap();

        assert_eq!(ids.len(), 30);
        assert_eq!(platform.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalid_input() {
        let lister = VideoLister::new(Arc::new(channel_with(1)));
        assert!(matches!(
            lister.list_recent("  ", 5).await,
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            lister.list_recent("UC1", 0).await,
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let lister = VideoLister::new(Arc::new(
            channel_with(3).with_search_failure(MockFailure::Authorization),
        ));
        assert!(matches!(
            lister.list_recent("UC1", 5).await,
            Err(DomainError::Authorization(_))
        ));

        let lister = VideoLister::new(Arc::new(channel_with(3)));
        assert!(matches!(
            lister.list_recent("UC-missing", 5).await,
            Err(DomainError::NotFound(_))
        ));
    }
}

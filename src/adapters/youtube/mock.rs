//! In-memory VideoPlatform for demo runs and tests.
//!
//! Serves scripted videos and comment pages without network calls. Counts
//! requests and can inject failures per video or for the channel search.

use crate::domain::{CommentPage, DomainError, VideoId, VideoPage};
use crate::ports::VideoPlatform;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Failure kinds the mock can inject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    Authorization,
    NotFound,
    Network,
}

impl MockFailure {
    fn to_error(self, what: &str) -> DomainError {
        match self {
            MockFailure::Authorization => DomainError::Authorization(format!("[MOCK] {}", what)),
            MockFailure::NotFound => DomainError::NotFound(format!("[MOCK] {}", what)),
            MockFailure::Network => DomainError::TransientNetwork(format!("[MOCK] {}", what)),
        }
    }
}

struct MockVideo {
    id: VideoId,
    published_at: DateTime<Utc>,
    /// `None` = comments disabled.
    comment_pages: Option<Vec<Vec<String>>>,
}

/// Scripted video platform.
#[derive(Default)]
pub struct MockPlatform {
    channel_id: String,
    videos: Vec<MockVideo>,
    video_failures: HashMap<VideoId, MockFailure>,
    search_failure: Option<MockFailure>,
    search_calls: AtomicUsize,
    comment_calls: Mutex<HashMap<VideoId, usize>>,
}

impl MockPlatform {
    /// Empty platform serving `channel_id`. Searches for other channels fail with NotFound.
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            ..Default::default()
        }
    }

    /// Add a video whose comments are served as the given pages, in order.
    pub fn with_video(
        mut self,
        id: &str,
        published_at: DateTime<Utc>,
        comment_pages: Vec<Vec<String>>,
    ) -> Self {
        self.videos.push(MockVideo {
            id: VideoId::new(id),
            published_at,
            comment_pages: Some(comment_pages),
        });
        self
    }

    /// Add a video with comments disabled.
    pub fn with_comments_disabled(mut self, id: &str, published_at: DateTime<Utc>) -> Self {
        self.videos.push(MockVideo {
            id: VideoId::new(id),
            published_at,
            comment_pages: None,
        });
        self
    }

    /// Fail every comment request for `id`.
    pub fn with_video_failure(mut self, id: &str, failure: MockFailure) -> Self {
        self.video_failures.insert(VideoId::new(id), failure);
        self
    }

    /// Fail every channel search.
    pub fn with_search_failure(mut self, failure: MockFailure) -> Self {
        self.search_failure = Some(failure);
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Comment page requests issued for `id`.
    pub fn comment_calls(&self, id: &VideoId) -> usize {
        self.comment_calls
            .lock()
            .map(|calls| calls.get(id).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Comment page requests issued across all videos.
    pub fn total_comment_calls(&self) -> usize {
        self.comment_calls
            .lock()
            .map(|calls| calls.values().sum())
            .unwrap_or(0)
    }

    /// Small canned channel used when demo mode is enabled.
    pub fn demo(channel_id: &str) -> Self {
        let base = Utc
            .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        let page = |texts: &[&str]| texts.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        Self::new(channel_id)
            .with_video(
                "demo-video-3",
                base + Duration::days(2),
                vec![
                    page(&[
                        "I love this!",
                        "Great video, really helpful explanation.",
                        "It was okay.",
                    ]),
                    page(&["Terrible audio, I hated it.", "Not bad at all"]),
                ],
            )
            .with_video(
                "demo-video-2",
                base + Duration::days(1),
                vec![page(&[
                    "Amazing work as always",
                    "This is boring and too long",
                    "First!",
                    "Very good points, thanks",
                ])],
            )
            .with_comments_disabled("demo-video-1", base)
    }

    fn sorted_videos(&self) -> Vec<&MockVideo> {
        let mut videos: Vec<&MockVideo> = self.videos.iter().collect();
        videos.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        videos
    }
}

fn parse_token(token: Option<&str>) -> Result<usize, DomainError> {
    match token {
        None => Ok(0),
        Some(t) => t
            .strip_prefix("page-")
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| DomainError::InvalidInput(format!("[MOCK] bad page token {}", t))),
    }
}

fn token_for(index: usize) -> String {
    format!("page-{}", index)
}

#[async_trait::async_trait]
impl VideoPlatform for MockPlatform {
    async fn search_channel_videos(
        &self,
        channel_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<VideoPage, DomainError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        info!(channel_id, page_size, "[MOCK] search channel videos");

        if let Some(failure) = self.search_failure {
            return Err(failure.to_error("search failed"));
        }
        if channel_id != self.channel_id {
            return Err(DomainError::NotFound(format!(
                "[MOCK] channel {} not found",
                channel_id
            )));
        }

        let offset = parse_token(page_token)?;
        let videos = self.sorted_videos();
        let end = (offset + page_size as usize).min(videos.len());
        let items = videos
            .get(offset..end)
            .unwrap_or_default()
            .iter()
            .map(|v| v.id.clone())
            .collect();
        let next = (end < videos.len()).then(|| token_for(end));
        Ok(VideoPage::new(items, next))
    }

    async fn list_comment_threads(
        &self,
        video_id: &VideoId,
        _page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentPage, DomainError> {
        if let Ok(mut calls) = self.comment_calls.lock() {
            *calls.entry(video_id.clone()).or_insert(0) += 1;
        }

        if let Some(failure) = self.video_failures.get(video_id) {
            return Err(failure.to_error(&format!("comments for {}", video_id)));
        }
        let video = self
            .videos
            .iter()
            .find(|v| &v.id == video_id)
            .ok_or_else(|| DomainError::NotFound(format!("[MOCK] video {} not found", video_id)))?;
        let Some(pages) = &video.comment_pages else {
            return Ok(CommentPage::empty());
        };

        let index = parse_token(page_token)?;
        let items = pages.get(index).cloned().unwrap_or_default();
        let next = (index + 1 < pages.len()).then(|| token_for(index + 1));
        Ok(CommentPage::new(items, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_search_orders_by_date() {
        let base = Utc::now();
        let mock = MockPlatform::new("UC1")
            .with_video("old", base - Duration::days(3), vec![])
            .with_video("new", base, vec![])
            .with_video("mid", base - Duration::days(1), vec![]);

        let page = mock.search_channel_videos("UC1", 50, None).await.unwrap();
        let ids: Vec<_> = page.items.iter().map(VideoId::as_str).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
        assert_eq!(page.next_page_token, None);
        assert_eq!(mock.search_calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_unknown_channel() {
        let mock = MockPlatform::new("UC1");
        let err = mock.search_channel_videos("UC2", 5, None).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_mock_demo_has_videos() {
        let mock = MockPlatform::demo("demo");
        let page = mock.search_channel_videos("demo", 5, None).await.unwrap();
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0].as_str(), "demo-video-3");
    }
}

//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{BarChart, CommentPage, DomainError, Histogram, VideoId, VideoPage};

/// Video-hosting platform read API. Holds the credential; one handle is
/// created by the caller and shared for the whole run.
#[async_trait::async_trait]
pub trait VideoPlatform: Send + Sync {
    /// One page of a channel's videos, most recent first, type "video" only.
    ///
    /// - `page_size`: max ids in this page
    /// - `page_token`: `None` for the first page, else the previous page's token
    async fn search_channel_videos(
        &self,
        channel_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<VideoPage, DomainError>;

    /// One page of a video's top-level comment texts.
    ///
    /// A video with comments disabled yields an empty last page, not an error.
    async fn list_comment_threads(
        &self,
        video_id: &VideoId,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentPage, DomainError>;
}

/// Pluggable polarity scoring. Must be deterministic for a given text.
pub trait PolarityScorer: Send + Sync {
    /// Polarity in [-1.0, 1.0].
    fn score(&self, text: &str) -> f64;
}

/// Draws the two result charts.
pub trait ChartRenderer: Send + Sync {
    fn render(&self, bar: &BarChart, histogram: &Histogram) -> Result<(), DomainError>;
}

/// Console progress for the fetch stage.
pub trait ProgressPort: Send + Sync {
    /// Called before a video's comment walk begins. `index` is zero-based.
    fn video_started(&self, index: usize, total: usize, video_id: &VideoId);

    /// Called after a video's comments are fully fetched.
    fn video_finished(&self, video_id: &VideoId, comments: usize);
}

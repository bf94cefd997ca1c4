//! Analysis service. Orchestrates the comment sentiment pipeline.
//!
//! Lister -> Fetcher (one video at a time) -> Classifier -> Renderer.
//! Any error aborts the run; partial results are dropped.

use crate::domain::{BarChart, DomainError, HISTOGRAM_BINS, Histogram, SentimentReport};
use crate::ports::{ChartRenderer, ProgressPort};
use crate::usecases::{CommentFetcher, SentimentClassifier, VideoLister};
use std::sync::Arc;
use tracing::info;

/// Service for channel comment sentiment analysis.
///
/// Orchestrates the flow:
/// 1. List the channel's most recent videos
/// 2. Fetch every top-level comment of each video, sequentially
/// 3. Score and bucket all comments at once
/// 4. Render the bar chart and the polarity histogram
pub struct AnalysisService {
    lister: VideoLister,
    fetcher: CommentFetcher,
    classifier: SentimentClassifier,
    renderer: Arc<dyn ChartRenderer>,
    progress: Arc<dyn ProgressPort>,
}

impl AnalysisService {
    pub fn new(
        lister: VideoLister,
        fetcher: CommentFetcher,
        classifier: SentimentClassifier,
        renderer: Arc<dyn ChartRenderer>,
        progress: Arc<dyn ProgressPort>,
    ) -> Self {
        Self {
            lister,
            fetcher,
            classifier,
            renderer,
            progress,
        }
    }

    /// Run the full pipeline for `channel_id` over its `max_results` most recent videos.
    ///
    /// Returns the report that was rendered.
    pub async fn analyze_channel(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<SentimentReport, DomainError> {
        let video_ids = self.lister.list_recent(channel_id, max_results).await?;
        if video_ids.is_empty() {
            info!(channel_id, "channel has no videos");
        }

        let mut all_comments = Vec::new();
        let total = video_ids.len();
        for (index, video_id) in video_ids.iter().enumerate() {
            self.progress.video_started(index, total, video_id);
            let comments = self.fetcher.fetch_all(video_id).await?;
            self.progress.video_finished(video_id, comments.len());
            all_comments.extend(comments);
        }

        info!(
            channel_id,
            videos = total,
            comments = all_comments.len(),
            "comment fetch complete"
        );

        let report = self.classifier.classify(&all_comments);
        drop(all_comments);

        let bar = BarChart::from_counts(&report.counts);
        let histogram = Histogram::from_scores(&report.scores, HISTOGRAM_BINS);
        self.renderer.render(&bar, &histogram)?;

        Ok(report)
    }
}

//! Sentiment classifier. Scores each comment and buckets by sign.

use crate::domain::{Sentiment, SentimentCounts, SentimentReport};
use crate::ports::PolarityScorer;
use std::sync::Arc;
use tracing::info;

pub struct SentimentClassifier {
    scorer: Arc<dyn PolarityScorer>,
}

impl SentimentClassifier {
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    /// Counts per bucket plus one score per comment, in input order.
    pub fn classify<S: AsRef<str>>(&self, comments: &[S]) -> SentimentReport {
        let mut counts = SentimentCounts::default();
        let scores: Vec<f64> = comments
            .iter()
            .map(|c| {
                let polarity = self.scorer.score(c.as_ref());
                counts.record(Sentiment::from_polarity(polarity));
                polarity
            })
            .collect();

        info!(
            total = scores.len(),
            positive = counts.positive,
            neutral = counts.neutral,
            negative = counts.negative,
            "classified comments"
        );
        SentimentReport { counts, scores }
    }
}

//! Domain entities. Pure data structures for the core business.
//!
//! No YouTube/IO types here; adapters map into these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One page of a paged API listing.
///
/// `next_page_token` is `None` on the last page. Adapters normalize an
/// empty-string token to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_page_token: Option<String>) -> Self {
        Self {
            items,
            next_page_token: next_page_token.filter(|t| !t.is_empty()),
        }
    }

    /// Last page with no items.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_page_token: None,
        }
    }
}

/// Page of top-level comment texts.
pub type CommentPage = Page<String>;

/// Page of video ids from a channel search.
pub type VideoPage = Page<VideoId>;

/// Sentiment bucket, decided by the sign of the polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Fixed display order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Exact sign test: `> 0` positive, `== 0` neutral, anything else negative.
    /// There is no tolerance band around zero.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity == 0.0 {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comment counts per sentiment bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Classifier output: bucket counts plus one score per input comment, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentReport {
    pub counts: SentimentCounts,
    pub scores: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_polarity_sign() {
        assert_eq!(Sentiment::from_polarity(0.25), Sentiment::Positive);
        assert_eq!(Sentiment::from_polarity(0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(-0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(-0.4), Sentiment::Negative);
    }

    #[test]
    fn test_from_polarity_no_epsilon_band() {
        assert_eq!(Sentiment::from_polarity(1e-12), Sentiment::Positive);
        assert_eq!(Sentiment::from_polarity(-1e-12), Sentiment::Negative);
    }

    #[test]
    fn test_nan_counts_as_negative() {
        assert_eq!(Sentiment::from_polarity(f64::NAN), Sentiment::Negative);
    }

    #[test]
    fn test_page_empty_token_is_last_page() {
        let page = CommentPage::new(vec!["hi".to_string()], Some(String::new()));
        assert_eq!(page.next_page_token, None);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_counts_record_and_total() {
        let mut counts = SentimentCounts::default();
        counts.record(Sentiment::Positive);
        counts.record(Sentiment::Positive);
        counts.record(Sentiment::Negative);
        assert_eq!(counts.get(Sentiment::Positive), 2);
        assert_eq!(counts.get(Sentiment::Neutral), 0);
        assert_eq!(counts.total(), 3);
    }
}

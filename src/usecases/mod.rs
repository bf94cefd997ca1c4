//! Application use cases. Orchestrate domain logic via ports.

pub mod analysis_service;
pub mod comment_fetcher;
pub mod sentiment_classifier;
pub mod video_lister;

pub use analysis_service::AnalysisService;
pub use comment_fetcher::{CommentFetcher, CommentPages};
pub use sentiment_classifier::SentimentClassifier;
pub use video_lister::VideoLister;

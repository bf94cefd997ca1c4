//! Core domain layer. No external I/O dependencies.
//!
//! Entities, chart models and errors live here. Dependencies flow inward.

pub mod charts;
pub mod entities;
pub mod errors;

pub use charts::{BarChart, GaussianKde, HISTOGRAM_BINS, Histogram};
pub use entities::{
    CommentPage, Page, Sentiment, SentimentCounts, SentimentReport, VideoId, VideoPage,
};
pub use errors::DomainError;

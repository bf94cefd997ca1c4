//! Sentiment adapter module. Implements PolarityScorer.

pub mod lexicon;

pub use lexicon::{LexiconFile, LexiconScorer};

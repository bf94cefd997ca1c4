//! Port traits. API boundaries for the hexagon.
//!
//! All ports are outbound: the application calls into infrastructure
//! (YouTube, scoring lexicon, terminal).

pub mod outbound;

pub use outbound::{ChartRenderer, PolarityScorer, ProgressPort, VideoPlatform};

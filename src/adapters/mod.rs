//! Infrastructure adapters. Implement outbound ports.
//!
//! YouTube API, sentiment lexicon, terminal UI. Map errors to DomainError.

pub mod sentiment;
pub mod ui;
pub mod youtube;

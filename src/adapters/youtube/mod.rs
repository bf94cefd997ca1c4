//! YouTube adapter module. Implements VideoPlatform.
//!
//! Provides the reqwest-backed API client and an in-memory mock for demo runs and tests.

pub mod client;
pub mod mapper;
pub mod mock;

pub use client::YouTubeApiClient;
pub use mock::{MockFailure, MockPlatform};

//! Application configuration. API credential, channel, fetch limits, chart size.

use serde::Deserialize;
use tracing::warn;

/// Default number of most recent videos to analyze.
pub const DEFAULT_MAX_RESULTS: u32 = 5;

/// Default (and API maximum) page size for comment thread listing.
pub const DEFAULT_MAX_COMMENTS: u32 = 100;

/// YouTube Data API v3 base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

pub const DEFAULT_CHART_WIDTH: usize = 60;
pub const DEFAULT_CHART_HEIGHT: usize = 12;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// YouTube Data API key. Read from YT_SENTIMENT_API_KEY or YOUTUBE_API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Channel to analyze. Read from YT_SENTIMENT_CHANNEL_ID; prompted for when unset.
    #[serde(default)]
    pub channel_id: Option<String>,

    /// Number of most recent videos to fetch (default 5). Read from YT_SENTIMENT_MAX_RESULTS.
    #[serde(default)]
    pub max_results: Option<u32>,

    /// Comments per page request (default 100, API range 1..=100). Read from YT_SENTIMENT_MAX_COMMENTS.
    #[serde(default)]
    pub max_comments: Option<u32>,

    /// Optional cap on comment pages per video. Unset = follow pagination to exhaustion.
    #[serde(default)]
    pub max_pages: Option<usize>,

    /// API base URL override (e.g. a local mock server). Read from YT_SENTIMENT_API_BASE_URL.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// JSON lexicon merged over the built-in one. Read from YT_SENTIMENT_LEXICON_PATH.
    #[serde(default)]
    pub lexicon_path: Option<String>,

    /// Use the in-memory demo platform instead of the real API. Read from YT_SENTIMENT_DEMO.
    #[serde(default)]
    pub demo: Option<bool>,

    // ─────────────────────────────────────────────────────────────────────────
    // Chart Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Bar chart width in terminal columns. Read from YT_SENTIMENT_CHART_WIDTH.
    #[serde(default)]
    pub chart_width: Option<usize>,

    /// Histogram height in terminal rows. Read from YT_SENTIMENT_CHART_HEIGHT.
    #[serde(default)]
    pub chart_height: Option<usize>,
}

impl AppConfig {
    /// Load from YT_SENTIMENT_* env vars and the optional YT_SENTIMENT_CONFIG file.
    ///
    /// Any invalid value fails the whole load.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        Self::load_from(
            Self::environment(),
            std::env::var("YT_SENTIMENT_CONFIG").ok().as_deref(),
        )
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("YT_SENTIMENT").try_parsing(true)
    }

    fn load_from(
        env: config::Environment,
        file: Option<&str>,
    ) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder().add_source(env);
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the API key from config or the unprefixed YOUTUBE_API_KEY env.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("YOUTUBE_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    /// Returns the channel id if configured and non-blank.
    pub fn channel_id(&self) -> Option<String> {
        self.channel_id
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
    }

    /// Returns max videos to analyze. Defaults to 5.
    pub fn max_results_or_default(&self) -> u32 {
        self.max_results.unwrap_or(DEFAULT_MAX_RESULTS)
    }

    /// Returns comments per page, clamped to the API range 1..=100. Defaults to 100.
    pub fn max_comments_or_default(&self) -> u32 {
        let requested = self.max_comments.unwrap_or(DEFAULT_MAX_COMMENTS);
        let clamped = requested.clamp(1, DEFAULT_MAX_COMMENTS);
        if clamped != requested {
            warn!(requested, clamped, "max_comments outside API range, clamped");
        }
        clamped
    }

    /// Returns the API base URL without a trailing slash.
    pub fn api_base_url_or_default(&self) -> String {
        self.api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn is_demo(&self) -> bool {
        self.demo.unwrap_or(false)
    }

    pub fn chart_width_or_default(&self) -> usize {
        self.chart_width.unwrap_or(DEFAULT_CHART_WIDTH).max(10)
    }

    pub fn chart_height_or_default(&self) -> usize {
        self.chart_height.unwrap_or(DEFAULT_CHART_HEIGHT).max(4)
    }
}

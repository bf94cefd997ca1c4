//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run the pipeline.
//! No business logic here; the pipeline lives in AnalysisService.

use anyhow::Context;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use yt_sentiment::adapters::sentiment::LexiconScorer;
use yt_sentiment::adapters::ui::{FetchProgress, TerminalChartRenderer, prompt};
use yt_sentiment::adapters::youtube::{MockPlatform, YouTubeApiClient};
use yt_sentiment::ports::{ChartRenderer, PolarityScorer, ProgressPort, VideoPlatform};
use yt_sentiment::shared::config::AppConfig;
use yt_sentiment::usecases::{AnalysisService, CommentFetcher, SentimentClassifier, VideoLister};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    yt_sentiment::adapters::ui::init_ui();

    let cfg = AppConfig::load().context("invalid configuration (check YT_SENTIMENT_* variables)")?;

    // --- Platform client: one handle for the whole run ---
    let (platform, channel_id): (Arc<dyn VideoPlatform>, String) = if cfg.is_demo() {
        warn!("YT_SENTIMENT_DEMO is set, using in-memory demo channel");
        let channel_id = cfg.channel_id().unwrap_or_else(|| "demo-channel".to_string());
        let platform: Arc<dyn VideoPlatform> = Arc::new(MockPlatform::demo(&channel_id));
        (platform, channel_id)
    } else {
        let Some(api_key) = cfg.api_key() else {
            anyhow::bail!(
                "Set YT_SENTIMENT_API_KEY or YOUTUBE_API_KEY (env or .env). Get one from https://console.cloud.google.com/apis/credentials"
            );
        };
        let channel_id = match cfg.channel_id() {
            Some(id) => id,
            None => prompt::prompt_channel_id()?,
        };
        info!(url = %cfg.api_base_url_or_default(), "using YouTube Data API");
        let platform: Arc<dyn VideoPlatform> =
            Arc::new(YouTubeApiClient::new(cfg.api_base_url_or_default(), api_key));
        (platform, channel_id)
    };

    // --- Scorer: built-in lexicon, optionally extended from file ---
    let scorer: Arc<dyn PolarityScorer> = match cfg.lexicon_path.as_deref() {
        Some(path) => Arc::new(LexiconScorer::load(path).await?),
        None => Arc::new(LexiconScorer::new()),
    };

    let max_results = cfg.max_results_or_default();
    let max_comments = cfg.max_comments_or_default();
    info!(
        channel_id = %channel_id,
        max_results,
        max_comments,
        max_pages = ?cfg.max_pages,
        "starting analysis"
    );

    // --- Services ---
    let renderer: Arc<dyn ChartRenderer> = Arc::new(TerminalChartRenderer::new(
        cfg.chart_width_or_default(),
        cfg.chart_height_or_default(),
    ));
    let progress: Arc<dyn ProgressPort> = Arc::new(FetchProgress::new());
    let analysis_service = AnalysisService::new(
        VideoLister::new(Arc::clone(&platform)),
        CommentFetcher::new(Arc::clone(&platform), max_comments).with_max_pages(cfg.max_pages),
        SentimentClassifier::new(scorer),
        renderer,
        progress,
    );

    // --- Run (list -> fetch -> classify -> render) ---
    let report = analysis_service
        .analyze_channel(&channel_id, max_results)
        .await?;

    info!(
        comments = report.scores.len(),
        positive = report.counts.positive,
        neutral = report.counts.neutral,
        negative = report.counts.negative,
        "analysis complete"
    );

    Ok(())
}

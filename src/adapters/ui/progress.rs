//! Implements ProgressPort. Console progress for the comment fetch stage.

use crate::domain::VideoId;
use crate::ports::ProgressPort;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::{info, warn};

/// indicatif progress bar over the video list, with one progress line per video.
///
/// Progress lines go to `out` (stdout by default), also when the bar is
/// hidden because stderr is not a terminal.
pub struct FetchProgress<W = io::Stdout> {
    bar: Mutex<Option<ProgressBar>>,
    out: Mutex<W>,
}

impl FetchProgress {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for FetchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> FetchProgress<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            bar: Mutex::new(None),
            out: Mutex::new(out),
        }
    }

    fn bar_for(&self, total: usize) -> Option<ProgressBar> {
        let mut guard = self.bar.lock().ok()?;
        let bar = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new(total as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} videos")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb
        });
        Some(bar.clone())
    }

    fn print_line(&self, line: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            warn!(error = %e, "failed to write progress line");
        }
    }
}

impl<W: Write + Send> ProgressPort for FetchProgress<W> {
    fn video_started(&self, index: usize, total: usize, video_id: &VideoId) {
        info!(video_id = %video_id, index = index + 1, total, "fetching comments");
        let line = format!("Fetching comments for video ID: {}", video_id);
        match self.bar_for(total) {
            Some(pb) => pb.suspend(|| self.print_line(&line)),
            None => self.print_line(&line),
        }
    }

    fn video_finished(&self, video_id: &VideoId, comments: usize) {
        info!(video_id = %video_id, comments, "video comments fetched");
        let Ok(guard) = self.bar.lock() else {
            return;
        };
        if let Some(pb) = guard.as_ref() {
            pb.inc(1);
            if pb.length().is_some_and(|len| pb.position() >= len) {
                pb.finish_and_clear();
            }
        }
    }
}

/// Progress that only logs through tracing. Used for non-interactive runs and tests.
#[derive(Debug, Default)]
pub struct LogProgress;

impl ProgressPort for LogProgress {
    fn video_started(&self, index: usize, total: usize, video_id: &VideoId) {
        info!(video_id = %video_id, index = index + 1, total, "Fetching comments for video ID: {}", video_id);
    }

    fn video_finished(&self, video_id: &VideoId, comments: usize) {
        info!(video_id = %video_id, comments, "video comments fetched");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(progress: &FetchProgress<Vec<u8>>) -> String {
        String::from_utf8(progress.out.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_progress_line_emitted_without_terminal() {
        let progress = FetchProgress::with_writer(Vec::new());

        progress.video_started(0, 2, &VideoId::new("abc123"));
        progress.video_finished(&VideoId::new("abc123"), 4);
        progress.video_started(1, 2, &VideoId::new("def456"));

        assert_eq!(
            written(&progress),
            "Fetching comments for video ID: abc123\nFetching comments for video ID: def456\n"
        );
    }

    #[test]
    fn test_bar_finishes_after_last_video() {
        let progress = FetchProgress::with_writer(io::sink());

        progress.video_started(0, 1, &VideoId::new("only"));
        progress.video_finished(&VideoId::new("only"), 0);

        let guard = progress.bar.lock().unwrap();
        assert!(guard.as_ref().unwrap().is_finished());
    }
}

//! Terminal UI adapters: banner, prompts, fetch progress and chart rendering.

pub mod banner;
pub mod charts;
pub mod progress;
pub mod prompt;

pub use charts::TerminalChartRenderer;
pub use progress::{FetchProgress, LogProgress};

/// Prints the welcome banner. Call once at startup (e.g. in main after tracing init).
pub fn init_ui() {
    banner::print_welcome();
}

//! Command-line interface definitions for AI News Daily.
//!
//! The search endpoint, query, and result count are fixed; only where the
//! page is written, which base path it is served under, and whether to keep
//! listening for refresh presses are configurable.

use clap::Parser;

/// Command-line arguments for the AI News Daily page generator.
///
/// # Examples
///
/// ```sh
/// # Fetch once and write the static export
/// ai_news_daily -o ./out
///
/// # Serve under a different prefix and keep refreshing on Enter
/// ai_news_daily -o ./out --base-path /news -i
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the static export
    #[arg(short, long)]
    pub output_dir: String,

    /// Base path the export is served under
    #[arg(short, long, default_value = "/-News")]
    pub base_path: String,

    /// Keep running; each line on stdin presses refresh, `q` quits
    #[arg(short, long)]
    pub interactive: bool,
}

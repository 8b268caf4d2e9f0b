//! # AI News Daily
//!
//! Builds a single static page with a feed of AI news. Items come from a
//! search API; when the API fails or returns nothing usable, a fixed fallback
//! feed is shown instead, so the page always has cards.
//!
//! ## Usage
//!
//! ```sh
//! ai_news_daily -o ./out
//! ai_news_daily -o ./out -i   # press Enter to refresh, `q` to quit
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetch**: one GET to the search endpoint ([`api`])
//! 2. **Normalize**: detect the payload shape, map it to cards ([`normalize`])
//! 3. **Fallback**: substitute the fixed feed for an empty or failed fetch ([`fallback`])
//! 4. **Render**: every state transition is written out as a static export ([`outputs`])

use clap::Parser;
use futures::future::join_all;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod error;
mod fallback;
mod feed;
mod models;
mod normalize;
mod outputs;
mod utils;

use api::TavilyClient;
use cli::Cli;
use feed::{FeedState, NewsFeedView};
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("ai_news_daily starting up");

    let args = Cli::parse();
    debug!(?args.output_dir, ?args.base_path, interactive = args.interactive, "Parsed CLI arguments");

    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let view = Arc::new(NewsFeedView::new(TavilyClient::new()));
    let renderer = spawn_renderer(
        view.subscribe(),
        PathBuf::from(&args.output_dir),
        args.base_path.clone(),
    );

    // Initial load
    view.refresh().await;

    if args.interactive {
        run_refresh_loop(&view).await?;
    }

    let final_state = view.state();
    // Dropping the last sender lets the renderer flush the final state and exit.
    drop(view);
    renderer.await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        items = final_state.items.len(),
        updated = %final_state.last_updated_label,
        "Execution complete"
    );
    Ok(())
}

/// Render every state the view publishes, one snapshot at a time.
///
/// Intermediate states may be skipped if several transitions land while a
/// render is in progress; the latest one is always written.
fn spawn_renderer(
    mut rx: watch::Receiver<FeedState>,
    output_dir: PathBuf,
    base_path: String,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let snapshot = rx.borrow_and_update().clone();
            if let Err(e) = outputs::write_site(&snapshot, &output_dir, &base_path).await {
                error!(error = %e, "Failed to render feed page");
            }
            if rx.changed().await.is_err() {
                debug!("Feed view dropped; renderer exiting");
                break;
            }
        }
    })
}

/// Treat each stdin line as a press of the refresh control.
///
/// Presses are spawned so a new line can arrive while a cycle is running; the
/// view ignores presses made while it is loading.
async fn run_refresh_loop(view: &Arc<NewsFeedView<TavilyClient>>) -> Result<(), Box<dyn Error>> {
    info!("Interactive mode: press Enter to refresh, `q` to quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = Vec::new();

    while let Some(line) = lines.next_line().await? {
        if matches!(line.trim(), "q" | "quit") {
            break;
        }
        let view = Arc::clone(view);
        pending.push(tokio::spawn(async move {
            if !view.request_refresh().await {
                info!("Refresh already in progress; press ignored");
            }
        }));
    }

    for result in join_all(pending).await {
        if let Err(e) = result {
            warn!(error = %e, "Refresh task did not finish cleanly");
        }
    }
    Ok(())
}

//! JSON snapshot of the rendered feed.
//!
//! Written next to `index.html` so the same data the page shows can be
//! consumed by other clients.

use crate::feed::FeedState;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

pub const FEED_JSON_FILENAME: &str = "feed.json";

/// Write a [`FeedState`] to `{output_dir}/feed.json`.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display()))]
pub async fn write_feed(state: &FeedState, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(state)?;
    let path = output_dir.join(FEED_JSON_FILENAME);
    fs::write(&path, json).await?;
    info!(path = %path.display(), items = state.items.len(), "Wrote feed JSON");
    Ok(())
}

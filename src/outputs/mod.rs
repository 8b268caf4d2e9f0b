//! Static export of the feed page.
//!
//! # Submodules
//!
//! - [`html`]: Renders a [`FeedState`] to the page document
//! - [`json`]: Writes the same state as `feed.json`
//!
//! # Output Structure
//!
//! The export uses a trailing-slash layout, so the page served at
//! `{base_path}/` lives in `index.html`:
//!
//! ```text
//! output_dir/
//! ├── index.html
//! ├── styles.css
//! └── feed.json
//! ```

pub mod html;
pub mod json;

use crate::feed::FeedState;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

pub const INDEX_FILENAME: &str = "index.html";
pub const STYLES_FILENAME: &str = "styles.css";

const STYLES: &str = r#"* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, sans-serif; background: #0f172a; color: #e2e8f0; line-height: 1.5; }
.container { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem; }
header { margin-bottom: 2rem; text-align: center; }
h1 { font-size: 2.25rem; }
.subtitle { color: #94a3b8; margin-top: .25rem; }
.meta { display: flex; gap: 1rem; justify-content: center; align-items: center; margin-top: 1rem; color: #94a3b8; }
.refresh-btn { background: #6366f1; color: #fff; border: 0; border-radius: 6px; padding: .5rem 1rem; cursor: pointer; }
.refresh-btn:disabled { opacity: .6; cursor: default; }
.error { background: #7f1d1d; color: #fecaca; padding: 1rem; border-radius: 6px; margin-bottom: 1.5rem; }
.news-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.25rem; }
.news-card { background: #1e293b; border-radius: 10px; padding: 1.25rem; display: flex; flex-direction: column; gap: .75rem; }
.news-card h2 { font-size: 1.1rem; }
.news-card p { color: #cbd5e1; flex: 1; }
.card-footer { display: flex; justify-content: space-between; align-items: center; font-size: .9rem; }
.source { color: #a5b4fc; }
.card-footer a { color: #38bdf8; text-decoration: none; }
footer { margin-top: 3rem; text-align: center; color: #64748b; font-size: .9rem; }
"#;

/// Write the page, its stylesheet, and the JSON snapshot for one state.
///
/// # Arguments
///
/// * `state` - The feed snapshot to export
/// * `output_dir` - Directory receiving the export (must exist)
/// * `base_path` - Path prefix the export is served under
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display(), loading = state.loading))]
pub async fn write_site(
    state: &FeedState,
    output_dir: &Path,
    base_path: &str,
) -> Result<(), Box<dyn Error>> {
    let page = html::render_page(state, base_path)?;
    let index_path = output_dir.join(INDEX_FILENAME);
    fs::write(&index_path, page).await?;
    fs::write(output_dir.join(STYLES_FILENAME), STYLES).await?;
    json::write_feed(state, output_dir).await?;

    info!(path = %index_path.display(), items = state.items.len(), "Rendered feed page");
    Ok(())
}

//! Mapping from a detected [`SearchPayload`] to renderable [`NewsItem`]s.
//!
//! Normalization never fails: missing fields get display defaults and an
//! unrecognized payload yields an empty list. Substituting the fallback feed
//! for an empty list is the caller's job (see [`crate::feed`]).

use crate::models::{NewsItem, RawResult, SearchPayload};
use tracing::debug;
use url::Url;

/// Title used when a result has none.
pub const UNTITLED: &str = "Без названия";
/// Link used when a result has none.
pub const MISSING_URL: &str = "#";
/// URL whose host stands in for a missing or unparseable result URL.
pub const DEFAULT_SOURCE_URL: &str = "https://example.com";

pub const SUMMARY_TITLE: &str = "AI News Summary";
pub const SUMMARY_URL: &str = "https://techcrunch.com/tag/artificial-intelligence/";
pub const SUMMARY_SOURCE: &str = "Tavily";

/// Normalize a payload into news items, preserving result order.
pub fn normalize(payload: SearchPayload) -> Vec<NewsItem> {
    match payload {
        SearchPayload::Results(results) => results.into_iter().map(result_to_item).collect(),
        SearchPayload::Answer(answer) => vec![NewsItem::new(
            SUMMARY_TITLE,
            answer,
            SUMMARY_URL,
            SUMMARY_SOURCE,
        )],
        SearchPayload::Unrecognized => Vec::new(),
    }
}

fn result_to_item(raw: RawResult) -> NewsItem {
    let source = source_from_url(raw.url.as_deref());
    NewsItem {
        title: raw.title.unwrap_or_else(|| UNTITLED.to_string()),
        description: raw.content.or(raw.description).unwrap_or_default(),
        url: raw.url.unwrap_or_else(|| MISSING_URL.to_string()),
        source,
    }
}

/// Derive the display source from a result URL.
///
/// Returns the host with a leading `www.` removed. A missing URL, an
/// unparseable one, or one without a host falls back to `example.com`.
///
/// ```ignore
/// assert_eq!(source_from_url(Some("https://www.nbcnews.com/x")), "nbcnews.com");
/// assert_eq!(source_from_url(None), "example.com");
/// ```
pub fn source_from_url(url: Option<&str>) -> String {
    let host = url
        .and_then(|u| match Url::parse(u) {
            Ok(parsed) => parsed.host_str().map(str::to_string),
            Err(e) => {
                debug!(url = %u, error = %e, "Unparseable result URL; using default source");
                None
            }
        })
        .or_else(|| {
            Url::parse(DEFAULT_SOURCE_URL)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
        })
        .unwrap_or_default();

    match host.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => host,
    }
}

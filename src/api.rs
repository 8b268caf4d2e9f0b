//! Search API access.
//!
//! The feed talks to its news source through the [`NewsSearch`] trait, so the
//! view can be driven by the real HTTP client in production and by in-memory
//! sources in tests.
//!
//! # Request
//!
//! A single fixed GET request, no retries and no timeout beyond reqwest's
//! defaults:
//!
//! ```text
//! GET https://api.tavily.com/search?q=AI%20artificial%20intelligence%20news&max_results=8&api_key=demo
//! ```

use crate::error::FetchError;
use crate::utils::truncate_for_log;
use serde_json::Value;
use std::future::Future;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Base URL of the search endpoint.
pub const SEARCH_ENDPOINT: &str = "https://api.tavily.com/search";
/// Fixed search phrase.
pub const SEARCH_QUERY: &str = "AI artificial intelligence news";
/// Fixed maximum number of results requested.
pub const MAX_RESULTS: u32 = 8;
/// Public demo key accepted by the endpoint.
pub const DEMO_API_KEY: &str = "demo";

const LOG_PREVIEW_BYTES: usize = 300;

/// A source of raw search results.
///
/// Implementors perform exactly one request per call and return the parsed
/// JSON body. Shape detection happens later, in [`crate::models::SearchPayload`].
pub trait NewsSearch {
    /// Issue the search request and parse the body as JSON.
    fn search(&self) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// HTTP client for the Tavily search endpoint.
#[derive(Debug, Clone)]
pub struct TavilyClient {
    http: reqwest::Client,
    endpoint: String,
}

impl TavilyClient {
    /// Create a client for the production endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(SEARCH_ENDPOINT)
    }

    /// Create a client for another base URL (a local stub, for example).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The full request URL with the fixed query string.
    pub fn request_url(&self) -> String {
        format!(
            "{}?q={}&max_results={}&api_key={}",
            self.endpoint,
            urlencoding::encode(SEARCH_QUERY),
            MAX_RESULTS,
            urlencoding::encode(DEMO_API_KEY),
        )
    }
}

impl Default for TavilyClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsSearch for TavilyClient {
    #[instrument(level = "info", skip_all, fields(endpoint = %self.endpoint))]
    async fn search(&self) -> Result<Value, FetchError> {
        let t0 = Instant::now();
        let response = self.http.get(self.request_url()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let elapsed_ms = t0.elapsed().as_millis();

        if !status.is_success() {
            warn!(%status, elapsed_ms, "Search API returned a non-success status");
            return Err(FetchError::Status {
                status,
                body_preview: truncate_for_log(&body, LOG_PREVIEW_BYTES),
            });
        }

        debug!(bytes = body.len(), "Received search response body");
        let value = serde_json::from_str::<Value>(&body).map_err(|source| FetchError::Decode {
            source,
            body_preview: truncate_for_log(&body, LOG_PREVIEW_BYTES),
        })?;

        info!(%status, elapsed_ms, "Search request succeeded");
        Ok(value)
    }
}

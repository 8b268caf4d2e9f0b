//! Data models for the news feed and the raw search API payload.
//!
//! This module defines the data structures used throughout the application:
//! - [`NewsItem`]: A normalized card, ready to render
//! - [`RawResult`]: One entry of the search API's `results` array
//! - [`SearchPayload`]: The detected shape of a search API response body
//!
//! The search API is loosely typed, so the body is first parsed into a
//! [`serde_json::Value`] and then classified with [`SearchPayload::from_value`]
//! instead of being deserialized straight into a struct.

use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalized news card.
///
/// Every item rendered on the page has this shape, whether it came from the
/// search API, from a summary answer, or from the fallback list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsItem {
    /// The headline. Never empty once normalized.
    pub title: String,
    /// The summary text. May be empty.
    pub description: String,
    /// The outbound link, or `"#"` when the API gave none.
    pub url: String,
    /// The display name of the outlet (host name or a fixed label).
    pub source: String,
}

impl NewsItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            source: source.into(),
        }
    }
}

/// One search result as the API returned it.
///
/// Fields that are missing, not strings, or empty strings are all `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResult {
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl RawResult {
    /// Read a result entry field by field. Non-object entries yield an empty result.
    pub fn from_value(value: &Value) -> Self {
        Self {
            title: non_empty_str(value, "title"),
            content: non_empty_str(value, "content"),
            description: non_empty_str(value, "description"),
            url: non_empty_str(value, "url"),
        }
    }
}

/// The shape of a search API response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPayload {
    /// The body carried a `results` array (possibly empty).
    Results(Vec<RawResult>),
    /// No `results` array, but a non-empty `answer` string.
    Answer(String),
    /// Neither shape was found.
    Unrecognized,
}

impl SearchPayload {
    /// Classify a parsed JSON body.
    ///
    /// A `results` array takes precedence over `answer`, even when the array
    /// is empty. A `null` entry inside `results` makes the whole body
    /// malformed; other non-object entries read as results with no fields.
    pub fn from_value(body: &Value) -> Result<Self, FetchError> {
        if let Some(results) = body.get("results").and_then(Value::as_array) {
            if let Some(index) = results.iter().position(Value::is_null) {
                return Err(FetchError::NullResult { index });
            }
            return Ok(SearchPayload::Results(
                results.iter().map(RawResult::from_value).collect(),
            ));
        }
        Ok(match non_empty_str(body, "answer") {
            Some(answer) => SearchPayload::Answer(answer),
            None => SearchPayload::Unrecognized,
        })
    }

    /// Short name of the detected shape, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchPayload::Results(_) => "results",
            SearchPayload::Answer(_) => "answer",
            SearchPayload::Unrecognized => "unrecognized",
        }
    }
}

fn non_empty_str(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

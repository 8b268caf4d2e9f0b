//! The news feed view: state, transitions, and the refresh cycle.
//!
//! State lives in a single immutable [`FeedState`] record. Every change is
//! computed by [`reduce`] from the previous record and a [`FeedEvent`], and the
//! result replaces the old record wholesale in a `tokio::sync::watch`
//! channel. Renderers subscribe to that channel and see every transition.
//!
//! # Refresh cycle
//!
//! 1. `RefreshStarted`: loading on, error cleared
//! 2. one search request through [`NewsSearch`]
//! 3. on failure only, `RefreshFailed` publishes the generic error
//! 4. `RefreshCompleted`: items replaced (fallback if nothing usable),
//!    loading off, error cleared, label stamped
//!
//! Overlapping cycles are not fenced. Each one overwrites the state when it
//! completes, so the last to finish wins.

use crate::api::NewsSearch;
use crate::fallback::fallback_news;
use crate::models::{NewsItem, SearchPayload};
use crate::normalize::normalize;
use crate::utils::updated_label;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

/// Banner text published while a failed cycle falls back.
pub const SEARCH_ERROR_MESSAGE: &str = "Ошибка поиска";

/// Everything the page needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedState {
    pub items: Vec<NewsItem>,
    pub loading: bool,
    /// Empty when there is no error to show.
    pub error_message: String,
    /// Empty until the first cycle completes.
    pub last_updated_label: String,
}

impl Default for FeedState {
    /// The page mounts in the loading state with nothing to show yet.
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error_message: String::new(),
            last_updated_label: String::new(),
        }
    }
}

/// A state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    RefreshStarted,
    RefreshFailed { message: String },
    RefreshCompleted {
        items: Vec<NewsItem>,
        updated_label: String,
    },
}

/// Compute the next state. Never mutates `state`.
pub fn reduce(state: &FeedState, event: FeedEvent) -> FeedState {
    match event {
        FeedEvent::RefreshStarted => FeedState {
            loading: true,
            error_message: String::new(),
            ..state.clone()
        },
        FeedEvent::RefreshFailed { message } => FeedState {
            error_message: message,
            ..state.clone()
        },
        FeedEvent::RefreshCompleted {
            items,
            updated_label,
        } => FeedState {
            items: if items.is_empty() { fallback_news() } else { items },
            loading: false,
            error_message: String::new(),
            last_updated_label: updated_label,
        },
    }
}

/// The feed component: owns the news source and the published state.
#[derive(Debug)]
pub struct NewsFeedView<S> {
    source: S,
    state: watch::Sender<FeedState>,
}

impl<S: NewsSearch> NewsFeedView<S> {
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(FeedState::default());
        Self { source, state }
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// Receive every state the view publishes from now on.
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    /// Run one full fetch cycle unconditionally.
    ///
    /// Always ends with `loading == false`, a non-empty item list, and a fresh
    /// "last updated" label.
    #[instrument(level = "info", skip_all)]
    pub async fn refresh(&self) {
        self.dispatch(FeedEvent::RefreshStarted);
        self.complete_cycle().await;
    }

    /// Press the refresh control.
    ///
    /// The control is disabled while a cycle is in flight: if `loading` is
    /// already set the press is ignored and `false` is returned. The check and
    /// the start of the cycle happen atomically.
    pub async fn request_refresh(&self) -> bool {
        let started = self.state.send_if_modified(|state| {
            if state.loading {
                return false;
            }
            *state = reduce(state, FeedEvent::RefreshStarted);
            true
        });
        if !started {
            debug!("Refresh control disabled while loading; ignoring press");
            return false;
        }
        self.complete_cycle().await;
        true
    }

    async fn complete_cycle(&self) {
        let outcome = self
            .source
            .search()
            .await
            .and_then(|body| SearchPayload::from_value(&body));
        let items = match outcome {
            Ok(payload) => {
                let kind = payload.kind();
                let items = normalize(payload);
                if items.is_empty() {
                    warn!(payload = kind, "Search returned no usable items; using fallback feed");
                    fallback_news()
                } else {
                    info!(payload = kind, count = items.len(), "Normalized search results");
                    items
                }
            }
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Fetch error; using fallback feed");
                self.dispatch(FeedEvent::RefreshFailed {
                    message: SEARCH_ERROR_MESSAGE.to_string(),
                });
                // Let subscribers see the error state before the fallback replaces it.
                tokio::task::yield_now().await;
                fallback_news()
            }
        };

        self.dispatch(FeedEvent::RefreshCompleted {
            items,
            updated_label: updated_label(Utc::now()),
        });
    }

    fn dispatch(&self, event: FeedEvent) {
        self.state.send_modify(|state| *state = reduce(state, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use reqwest::StatusCode;
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Returns the same canned outcome on every call.
    struct FixedSearch(Result<Value, ()>);

    impl NewsSearch for FixedSearch {
        async fn search(&self) -> Result<Value, FetchError> {
            match &self.0 {
                Ok(v) => Ok(v.clone()),
                Err(()) => Err(FetchError::Status {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    body_preview: String::new(),
                }),
            }
        }
    }

    /// The first call is slow, later calls are fast; each returns its call index.
    struct StaggeredSearch {
        calls: AtomicUsize,
    }

    impl NewsSearch for StaggeredSearch {
        async fn search(&self) -> Result<Value, FetchError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n == 0 {
                tokio::time::sleep(Duration::from_millis(80)).await;
            }
            Ok(json!({ "results": [{ "title": format!("call {}", n) }] }))
        }
    }

    fn item(title: &str) -> NewsItem {
        NewsItem::new(title, "", "#", "example.com")
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = FeedState::default();
        assert!(state.loading);
        assert!(state.items.is_empty());
        assert!(state.last_updated_label.is_empty());
    }

    #[test]
    fn test_reduce_started_keeps_items_and_clears_error() {
        let state = FeedState {
            items: vec![item("old")],
            loading: false,
            error_message: "boom".to_string(),
            last_updated_label: "1 янв., 00:00".to_string(),
        };
        let next = reduce(&state, FeedEvent::RefreshStarted);

        assert!(next.loading);
        assert!(next.error_message.is_empty());
        assert_eq!(next.items, state.items);
        assert_eq!(next.last_updated_label, state.last_updated_label);
        // the previous record is untouched
        assert_eq!(state.error_message, "boom");
    }

    #[test]
    fn test_reduce_completed_replaces_items() {
        let state = FeedState {
            items: vec![item("old")],
            ..FeedState::default()
        };
        let next = reduce(
            &state,
            FeedEvent::RefreshCompleted {
                items: vec![item("new")],
                updated_label: "2 мар., 10:00".to_string(),
            },
        );

        assert_eq!(next.items, vec![item("new")]);
        assert!(!next.loading);
        assert_eq!(next.last_updated_label, "2 мар., 10:00");
    }

    #[test]
    fn test_reduce_completed_never_leaves_items_empty() {
        let next = reduce(
            &FeedState::default(),
            FeedEvent::RefreshCompleted {
                items: vec![],
                updated_label: "x".to_string(),
            },
        );
        assert_eq!(next.items, fallback_news());
    }

    #[test]
    fn test_reduce_failed_then_completed_clears_error() {
        let failed = reduce(
            &reduce(&FeedState::default(), FeedEvent::RefreshStarted),
            FeedEvent::RefreshFailed {
                message: SEARCH_ERROR_MESSAGE.to_string(),
            },
        );
        assert_eq!(failed.error_message, SEARCH_ERROR_MESSAGE);
        assert!(failed.loading);

        let done = reduce(
            &failed,
            FeedEvent::RefreshCompleted {
                items: fallback_news(),
                updated_label: "x".to_string(),
            },
        );
        assert!(done.error_message.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_with_results() {
        let view = NewsFeedView::new(FixedSearch(Ok(json!({
            "results": [{ "title": "X", "url": "https://foo.example.com/a" }]
        }))));
        view.refresh().await;

        let state = view.state();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].source, "foo.example.com");
        assert_eq!(state.items[0].description, "");
        assert!(!state.loading);
        assert!(!state.last_updated_label.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_with_answer() {
        let view = NewsFeedView::new(FixedSearch(Ok(json!({ "answer": "Big week for AI." }))));
        view.refresh().await;

        let state = view.state();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].title, "AI News Summary");
        assert_eq!(state.items[0].description, "Big week for AI.");
    }

    #[tokio::test]
    async fn test_refresh_falls_back_for_unusable_shapes() {
        for body in [
            json!({}),
            json!({ "results": [] }),
            json!({ "results": null }),
            json!({ "answer": "" }),
            json!([]),
        ] {
            let view = NewsFeedView::new(FixedSearch(Ok(body.clone())));
            view.refresh().await;

            let state = view.state();
            assert_eq!(state.items, fallback_news(), "body: {}", body);
            assert!(!state.loading);
            assert!(!state.last_updated_label.is_empty());
        }
    }

    #[tokio::test]
    async fn test_refresh_failure_uses_fallback_without_error_text() {
        let view = NewsFeedView::new(FixedSearch(Err(())));
        let mut rx = view.subscribe();
        view.refresh().await;

        let state = view.state();
        assert_eq!(state.items, fallback_news());
        assert!(state.error_message.is_empty());
        assert!(!state.loading);
        assert!(!state.last_updated_label.is_empty());
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), state);
    }

    #[tokio::test]
    async fn test_refresh_failure_publishes_error_before_fallback() {
        let view = NewsFeedView::new(FixedSearch(Err(())));
        let mut rx = view.subscribe();
        let recorder = tokio::spawn(async move {
            let mut seen = Vec::new();
            while rx.changed().await.is_ok() {
                seen.push(rx.borrow_and_update().clone());
            }
            seen
        });

        view.refresh().await;
        drop(view);
        let seen = recorder.await.unwrap();

        let error_at = seen
            .iter()
            .position(|s| s.error_message == SEARCH_ERROR_MESSAGE)
            .expect("error state was never published");
        let last = seen.last().unwrap();
        assert!(error_at < seen.len() - 1);
        assert!(seen[error_at].loading);
        assert!(last.error_message.is_empty());
        assert!(!last.loading);
        assert_eq!(last.items, fallback_news());
    }

    #[tokio::test]
    async fn test_refresh_with_null_result_entry_falls_back() {
        let view = NewsFeedView::new(FixedSearch(Ok(json!({ "results": [null] }))));
        view.refresh().await;

        let state = view.state();
        assert_eq!(state.items, fallback_news());
        assert!(state.error_message.is_empty());
        assert!(!state.loading);
        assert!(!state.last_updated_label.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_with_null_among_valid_results_falls_back() {
        let view = NewsFeedView::new(FixedSearch(Ok(json!({
            "results": [{ "title": "X", "url": "https://foo.example.com/a" }, null]
        }))));
        view.refresh().await;

        assert_eq!(view.state().items, fallback_news());
    }

    #[tokio::test]
    async fn test_request_refresh_ignored_while_loading() {
        let view = NewsFeedView::new(FixedSearch(Ok(json!({ "answer": "a" }))));
        // mounted view is still loading
        assert!(!view.request_refresh().await);

        view.refresh().await;
        assert!(view.request_refresh().await);
        assert!(!view.state().loading);
    }

    #[tokio::test]
    async fn test_request_refresh_only_one_press_while_in_flight() {
        let view = NewsFeedView::new(StaggeredSearch {
            calls: AtomicUsize::new(0),
        });
        view.state.send_modify(|s| s.loading = false);

        let (first, second) = tokio::join!(view.request_refresh(), view.request_refresh());
        assert!(first);
        assert!(!second);
        assert_eq!(view.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_overlapping_refresh_last_completion_wins() {
        let view = NewsFeedView::new(StaggeredSearch {
            calls: AtomicUsize::new(0),
        });

        // call 0 starts first but finishes last
        tokio::join!(view.refresh(), view.refresh());

        let state = view.state();
        assert_eq!(view.source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].title, "call 0");
        assert!(!state.loading);
    }
}

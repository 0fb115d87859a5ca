//! # Keyed Fetcher
//!
//! Runs one remote request per key and publishes the outcome on a watch
//! channel. When the key changes, the request for the old key is aborted and
//! any result it still delivers is dropped: the latest key wins.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KeyedFetcher States                                │
//! │                                                                         │
//! │   ┌──────┐  request(k)  ┌─────────────┐   Ok(v)    ┌──────────────┐    │
//! │   │ Idle │ ───────────► │ Loading(k)  │ ─────────► │ Ready(k, v)  │    │
//! │   └──────┘              └──────┬──────┘            └──────────────┘    │
//! │      ▲                         │ Err(e)                                 │
//! │      │ clear()                 ▼                                        │
//! │      │                  ┌─────────────┐                                 │
//! │      └───────────────── │ Failed(k)   │  (logged, never retried)        │
//! │                         └─────────────┘                                 │
//! │                                                                         │
//! │  request(k2) from any state with k2 != k:                              │
//! │    generation += 1, abort old task, Loading(k2)                         │
//! │    a late result tagged with the old generation is discarded            │
//! │                                                                         │
//! │  request(k) with the current key: no-op (one fetch per key)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Debug;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::RemoteResult;

// =============================================================================
// Fetch State
// =============================================================================

/// Outcome of the latest request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<K, T> {
    /// Nothing requested.
    Idle,
    /// Request for `key` in flight.
    Loading { key: K },
    /// Request for `key` resolved.
    Ready { key: K, value: T },
    /// Request for `key` failed; the reason was logged.
    Failed { key: K, reason: String },
}

impl<K, T> FetchState<K, T> {
    /// Key of the latest request.
    pub fn key(&self) -> Option<&K> {
        match self {
            FetchState::Idle => None,
            FetchState::Loading { key }
            | FetchState::Ready { key, .. }
            | FetchState::Failed { key, .. } => Some(key),
        }
    }

    /// Resolved value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Ready { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    /// True once the latest request resolved, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchState::Ready { .. } | FetchState::Failed { .. })
    }
}

impl<K, T: Clone + Default> FetchState<K, T> {
    /// Resolved value or the default while loading, idle or failed.
    pub fn value_or_default(&self) -> T {
        self.value().cloned().unwrap_or_default()
    }
}

// =============================================================================
// Keyed Fetcher
// =============================================================================

/// Single-flight fetcher keyed by request parameters.
///
/// Must be used inside a Tokio runtime: each request is spawned as a task.
pub struct KeyedFetcher<K, T> {
    /// Name used in log lines ("categories", "toggles").
    name: &'static str,
    /// Bumped by every new request; a task only publishes if it still owns
    /// the current generation.
    generation: Arc<AtomicU64>,
    /// Task of the latest request.
    task: Option<JoinHandle<()>>,
    state_tx: watch::Sender<FetchState<K, T>>,
}

impl<K, T> KeyedFetcher<K, T>
where
    K: Clone + PartialEq + Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str) -> Self {
        let (state_tx, _) = watch::channel(FetchState::Idle);
        KeyedFetcher {
            name,
            generation: Arc::new(AtomicU64::new(0)),
            task: None,
            state_tx,
        }
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<K, T>> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<K, T> {
        self.state_tx.borrow().clone()
    }

    /// Key of the latest request.
    pub fn key(&self) -> Option<K> {
        self.state_tx.borrow().key().cloned()
    }

    /// Starts a request for `key` unless it is already the current key.
    ///
    /// Returns `true` if a request was started. A failed key is not retried
    /// until a different key has been requested in between.
    pub fn request<F, Fut>(&mut self, key: K, fetch: F) -> bool
    where
        F: FnOnce(K) -> Fut,
        Fut: Future<Output = RemoteResult<T>> + Send + 'static,
    {
        if self.state_tx.borrow().key() == Some(&key) {
            debug!(fetch = self.name, ?key, "Key unchanged, not refetching");
            return false;
        }

        let generation = self.supersede();
        self.state_tx.send_replace(FetchState::Loading { key: key.clone() });

        let fut = fetch(key.clone());
        let current = self.generation.clone();
        let state_tx = self.state_tx.clone();
        let name = self.name;

        debug!(fetch = name, ?key, generation, "Fetch started");
        self.task = Some(tokio::spawn(async move {
            let result = fut.await;

            // Checked under the channel's write lock so a concurrent
            // request() cannot interleave between the check and the write.
            state_tx.send_if_modified(|state| {
                if current.load(Ordering::SeqCst) != generation {
                    debug!(fetch = name, ?key, "Discarding result for superseded key");
                    return false;
                }
                *state = match result {
                    Ok(value) => {
                        debug!(fetch = name, ?key, "Fetch resolved");
                        FetchState::Ready { key, value }
                    }
                    Err(e) => {
                        warn!(fetch = name, ?key, error = %e, "Fetch failed, keeping defaults");
                        FetchState::Failed {
                            key,
                            reason: e.to_string(),
                        }
                    }
                };
                true
            });
        }));

        true
    }

    /// Drops the current key and any request in flight.
    pub fn clear(&mut self) {
        self.supersede();
        self.state_tx.send_if_modified(|state| {
            if matches!(state, FetchState::Idle) {
                return false;
            }
            *state = FetchState::Idle;
            true
        });
    }

    /// Waits until the latest request has resolved or the fetcher is idle.
    pub async fn settled(&self) -> FetchState<K, T> {
        let mut rx = self.subscribe();
        // The sender lives in self, so the channel cannot close here
        let settled = match rx.wait_for(|s| !s.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }

    /// Invalidates the running request and returns the new generation.
    fn supersede(&mut self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(task) = self.task.take() {
            task.abort();
        }
        generation
    }
}

impl<K, T> Drop for KeyedFetcher<K, T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! The store: one writer task, many readers.

use crate::{reduce, Action, AppState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// Handle to the application state.
///
/// Cloning is cheap; every clone dispatches into the same writer task and
/// observes the same snapshots. Dropping all handles shuts the writer down.
#[derive(Clone)]
pub struct Store {
    actions: mpsc::UnboundedSender<Action>,
    snapshot: watch::Receiver<AppState>,
    generation: Arc<AtomicU64>,
}

impl Store {
    /// Spawn the writer task and return a handle.
    pub fn spawn() -> Self {
        let (actions, mut rx) = mpsc::unbounded_channel::<Action>();
        let (tx, snapshot) = watch::channel(AppState::default());

        tokio::spawn(async move {
            let mut state = AppState::default();
            while let Some(action) = rx.recv().await {
                reduce(&mut state, action);
                if tx.send(state.clone()).is_err() {
                    break;
                }
            }
            tracing::debug!("store writer shutting down");
        });

        Self {
            actions,
            snapshot,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Queue an action for the writer.
    ///
    /// Returns immediately; the snapshot updates once the writer has applied
    /// it. Dispatching after shutdown is a no-op.
    pub fn dispatch(&self, action: Action) {
        if self.actions.send(action).is_err() {
            tracing::warn!("dispatch after store shutdown");
        }
    }

    /// The latest state snapshot.
    pub fn state(&self) -> AppState {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.snapshot.clone()
    }

    /// Allocate the next search generation.
    pub fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dispatch_order_is_preserved() {
        let store = Store::spawn();
        let mut watcher = store.subscribe();

        store.dispatch(Action::SearchStarted { generation: 1 });
        store.dispatch(Action::SearchLoaded {
            generation: 1,
            products: Vec::new(),
            pagination: None,
        });

        // Wait for the second action to land.
        loop {
            watcher.changed().await.unwrap();
            if !watcher.borrow().products.loading {
                break;
            }
        }
        let state = store.state();
        assert_eq!(state.products.generation, 1);
        assert!(!state.products.loading);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = Store::spawn();
        let clone = store.clone();
        let mut watcher = clone.subscribe();

        store.dispatch(Action::LoggedIn {
            email: "ana@example.com".to_string(),
        });
        watcher.changed().await.unwrap();
        assert!(clone.state().auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_generations_are_monotonic() {
        let store = Store::spawn();
        let a = store.next_generation();
        let b = store.next_generation();
        assert!(b > a);
    }
}

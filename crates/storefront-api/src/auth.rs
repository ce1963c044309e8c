//! Bearer token storage.
//!
//! The token is the client's only persisted state. This store holds it in
//! memory and hands it to every outgoing request; where it lives between
//! runs (a file for the CLI) is the caller's concern.

use std::sync::{Arc, RwLock};

/// Shared bearer-token store.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }

    /// Store a token, replacing any existing one.
    pub fn set(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(token.into());
        }
    }

    /// Get the current token, if any.
    pub fn get(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }

    /// Clear the token (logout).
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }

    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lifecycle() {
        let store = TokenStore::new();
        assert!(!store.is_authenticated());
        assert_eq!(store.get(), None);

        store.set("tok-123");
        assert!(store.is_authenticated());
        assert_eq!(store.get().as_deref(), Some("tok-123"));

        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_clones_share_state() {
        let store = TokenStore::new();
        let clone = store.clone();
        store.set("tok-456");
        assert_eq!(clone.get().as_deref(), Some("tok-456"));
    }
}

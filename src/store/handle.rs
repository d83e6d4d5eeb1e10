//! Shared handle to the installed store

use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{KeyValueStore, UnavailableStore};

/// Cloneable handle to the store currently serving requests.
///
/// The installed store can be swapped at runtime, e.g. once a delayed
/// connection succeeds. Readers take a cheap `Arc` clone and release the
/// lock before issuing commands.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<RwLock<Arc<dyn KeyValueStore>>>,
}

impl StoreHandle {
    /// Creates a handle around an existing store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a handle owning `store`
    pub fn from_store<S: KeyValueStore + 'static>(store: S) -> Self {
        Self::new(Arc::new(store))
    }

    /// Creates a handle with no live connection
    pub fn unavailable() -> Self {
        Self::from_store(UnavailableStore)
    }

    /// The store currently installed
    pub async fn current(&self) -> Arc<dyn KeyValueStore> {
        self.inner.read().await.clone()
    }

    /// Installs `store`, returning the one it replaced
    pub async fn replace(&self, store: Arc<dyn KeyValueStore>) -> Arc<dyn KeyValueStore> {
        let mut guard = self.inner.write().await;
        std::mem::replace(&mut *guard, store)
    }

    /// Whether the installed store can serve commands
    pub async fn is_available(&self) -> bool {
        self.inner.read().await.is_available()
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_unavailable_handle() {
        let handle = StoreHandle::unavailable();
        assert!(!handle.is_available().await);
        assert_eq!(handle.current().await.name(), "unavailable");
    }

    #[tokio::test]
    async fn test_replace_is_seen_by_clones() {
        let handle = StoreHandle::unavailable();
        let clone = handle.clone();

        let previous = handle
            .replace(Arc::new(MemoryStore::with_entries([("k", "v")])))
            .await;
        assert_eq!(previous.name(), "unavailable");

        assert!(clone.is_available().await);
        let value = clone.current().await.get("k").await.unwrap();
        assert_eq!(value.as_deref(), Some("v"));
    }
}

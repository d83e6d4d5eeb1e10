//! API Handlers
//!
//! HTTP request handlers for the greeter service.

use std::time::Duration;

use axum::extract::State;
use tracing::warn;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::Greeting;
use crate::seed::DEMO_KEY;
use crate::store::StoreHandle;

/// Application state shared across all handlers.
///
/// The store is injected here rather than held in a global, so tests and
/// the reconnect task can swap it.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Handle to the installed key-value store
    pub store: StoreHandle,
    /// Upper bound on a single cache read
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState with the given store handle.
    pub fn new(store: StoreHandle, request_timeout: Duration) -> Self {
        Self {
            store,
            request_timeout,
        }
    }

    /// Creates a new AppState using the timeouts from the Config.
    pub fn from_config(config: &Config, store: StoreHandle) -> Self {
        Self::new(store, config.request_timeout)
    }
}

/// Handler for GET /
///
/// Reads the demo key and greets with its value. An absent key renders
/// as `null`; store failures and timeouts become error responses.
pub async fn root_handler(State(state): State<AppState>) -> Result<Greeting> {
    let store = state.store.current().await;

    let value = match tokio::time::timeout(state.request_timeout, store.get(DEMO_KEY)).await {
        Ok(Ok(value)) => value,
        Ok(Err(err)) => {
            warn!("Reading '{}' from {} store failed: {}", DEMO_KEY, store.name(), err);
            return Err(err);
        }
        Err(_) => {
            warn!(
                "Reading '{}' from {} store timed out",
                DEMO_KEY,
                store.name()
            );
            return Err(AppError::Timeout(state.request_timeout));
        }
    };

    Ok(Greeting::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{seed_demo_key, DEMO_VALUE};
    use crate::store::{KeyValueStore, MemoryStore};
    use async_trait::async_trait;

    fn state_with(store: StoreHandle) -> AppState {
        AppState::new(store, Duration::from_millis(200))
    }

    /// Store whose reads never finish in time
    struct StalledStore;

    #[async_trait]
    impl KeyValueStore for StalledStore {
        fn name(&self) -> &'static str {
            "stalled"
        }

        async fn get(&self, _key: &str) -> Result<Option<String>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_root_after_seed() {
        let store = MemoryStore::new();
        seed_demo_key(&store).await.unwrap();
        let state = state_with(StoreHandle::from_store(store));

        let greeting = root_handler(State(state)).await.unwrap();
        assert_eq!(greeting.value(), Some(DEMO_VALUE));
        assert_eq!(greeting.to_string(), "✅ Redis says: Redis working!");
    }

    #[tokio::test]
    async fn test_root_without_seed() {
        let state = state_with(StoreHandle::from_store(MemoryStore::new()));

        let greeting = root_handler(State(state)).await.unwrap();
        assert_eq!(greeting.to_string(), "✅ Redis says: null");
    }

    #[tokio::test]
    async fn test_root_store_unavailable() {
        let state = state_with(StoreHandle::unavailable());

        let result = root_handler(State(state)).await;
        assert!(matches!(result, Err(AppError::Unavailable)));
    }

    #[tokio::test]
    async fn test_root_read_timeout() {
        let state = AppState::new(
            StoreHandle::from_store(StalledStore),
            Duration::from_millis(20),
        );

        let result = root_handler(State(state)).await;
        assert!(matches!(result, Err(AppError::Timeout(d)) if d == Duration::from_millis(20)));
    }
}

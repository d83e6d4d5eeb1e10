//! Startup Sequence
//!
//! Connects the cache client and optionally seeds the demo key before the
//! listener starts accepting traffic.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::seed::seed_demo_key;
use crate::store::{KeyValueStore, RedisStore, StoreHandle};

/// Connects to the Redis server named in `config`.
pub async fn connect_redis(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    let store = RedisStore::connect(&config.redis_url(), config.connect_timeout).await?;
    Ok(Arc::new(store))
}

/// Turns the outcome of the startup connection into the handle handlers use.
///
/// A connection failure is logged and yields an unavailable handle; the
/// process keeps running. On success the demo key is seeded when `seed`
/// is set, and a failed seed is logged without discarding the connection.
pub async fn prepare_store(connected: Result<Arc<dyn KeyValueStore>>, seed: bool) -> StoreHandle {
    let store = match connected {
        Ok(store) => store,
        Err(err) => {
            error!("Redis Client Error: {}", err);
            return StoreHandle::unavailable();
        }
    };
    info!("Connected to {} store", store.name());

    if seed {
        if let Err(err) = seed_demo_key(store.as_ref()).await {
            warn!("Seeding demo key failed: {}", err);
        }
    }

    StoreHandle::new(store)
}

/// Runs the full startup sequence against the configured Redis server.
pub async fn initialize_store(config: &Config) -> StoreHandle {
    info!("Connecting to {}", config.redis_url());
    prepare_store(connect_redis(config).await, config.seed_on_startup).await
}

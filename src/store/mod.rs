//! Store Module
//!
//! The seam between HTTP handlers and the key-value cache they read from.
//!
//! Handlers never talk to Redis directly. They go through a [`StoreHandle`],
//! which holds whichever [`KeyValueStore`] is currently installed:
//! - [`RedisStore`] - remote Redis over a multiplexed connection
//! - [`MemoryStore`] - in-process map, used by tests
//! - [`UnavailableStore`] - installed when the startup connection failed

mod handle;
mod memory;
mod remote;
mod unavailable;

use async_trait::async_trait;

use crate::error::Result;

pub use handle::StoreHandle;
pub use memory::MemoryStore;
pub use remote::RedisStore;
pub use unavailable::UnavailableStore;

/// A string-to-string key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Short backend name used in log lines
    fn name(&self) -> &'static str;

    /// Whether this store can serve commands at all
    fn is_available(&self) -> bool {
        true
    }

    /// Reads a key; `Ok(None)` when the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a key, overwriting any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

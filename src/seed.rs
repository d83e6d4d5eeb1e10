//! Demonstration key seeding
//!
//! The read path and the write path share these constants, so the key the
//! root handler reads is always the key the seed step writes.

use tracing::info;

use crate::error::Result;
use crate::store::KeyValueStore;

/// Key read by GET / and written by [`seed_demo_key`]
pub const DEMO_KEY: &str = "demo_key";

/// Value written by [`seed_demo_key`]
pub const DEMO_VALUE: &str = "Redis working!";

/// Text placed before the cached value in the root response
pub const GREETING_PREFIX: &str = "✅ Redis says: ";

/// Writes [`DEMO_VALUE`] under [`DEMO_KEY`].
///
/// Overwrites any existing value. Errors from the store are returned as-is.
pub async fn seed_demo_key(store: &dyn KeyValueStore) -> Result<()> {
    store.set(DEMO_KEY, DEMO_VALUE).await?;
    info!("Seeded '{}' in {} store", DEMO_KEY, store.name());
    Ok(())
}

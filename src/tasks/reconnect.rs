//! Reconnect Task
//!
//! Background task that retries a failed startup connection.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::seed::seed_demo_key;
use crate::store::{KeyValueStore, StoreHandle};

/// Spawns a task that keeps calling `connect` until the handle holds a live store.
///
/// Every `interval` the task checks the handle; once it is available
/// (because a connection was installed, here or elsewhere) the task exits.
/// A freshly connected store is seeded before it is installed when `seed`
/// is set, so the first request served by it already sees the demo value.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_reconnect_task<F, Fut>(
    handle: StoreHandle,
    interval: Duration,
    seed: bool,
    connect: F,
) -> JoinHandle<()>
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Result<Arc<dyn KeyValueStore>>> + Send + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting reconnect task with interval of {}ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            if handle.is_available().await {
                debug!("Store already available, stopping reconnect task");
                break;
            }

            let store = match connect().await {
                Ok(store) => store,
                Err(err) => {
                    warn!("Reconnect attempt failed: {}", err);
                    continue;
                }
            };

            if seed {
                if let Err(err) = seed_demo_key(store.as_ref()).await {
                    warn!("Seeding after reconnect failed: {}", err);
                }
            }

            handle.replace(store).await;
            info!("Reconnected, {} store installed", handle.current().await.name());
            break;
        }
    })
}

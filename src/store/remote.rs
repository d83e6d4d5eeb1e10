//! Redis-backed store

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tracing::debug;

use super::KeyValueStore;
use crate::error::{AppError, Result};

/// Store backed by a remote Redis server.
///
/// Wraps a [`ConnectionManager`], a single multiplexed connection that is
/// shared by every request and re-established by the client on failure.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
    url: String,
}

impl RedisStore {
    /// Opens a connection to `url`, giving up after `connect_timeout`.
    pub async fn connect(url: &str, connect_timeout: Duration) -> Result<Self> {
        let client = Client::open(url).map_err(|e| AppError::Connection(e.to_string()))?;

        let manager = tokio::time::timeout(connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| {
                AppError::Connection(format!(
                    "no answer from {} within {}ms",
                    url,
                    connect_timeout.as_millis()
                ))
            })?
            .map_err(|e| AppError::Connection(e.to_string()))?;

        debug!("Connected to {}", url);
        Ok(Self {
            manager,
            url: url.to_string(),
        })
    }
}

impl fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisStore").field("url", &self.url).finish()
    }
}

// Once connected, any failure of a single command is a command error,
// including I/O errors on the shared connection.
#[async_trait]
impl KeyValueStore for RedisStore {
    fn name(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        // ConnectionManager clones share the underlying connection
        let mut conn = self.manager.clone();
        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|e| AppError::Command(e.to_string()))?;
        Ok(value.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.manager.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| AppError::Command(e.to_string()))?;
        Ok(())
    }
}

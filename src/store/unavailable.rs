//! Placeholder store for a failed connection

use async_trait::async_trait;

use super::KeyValueStore;
use crate::error::{AppError, Result};

/// Store that rejects every command with [`AppError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

#[async_trait]
impl KeyValueStore for UnavailableStore {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(AppError::Unavailable)
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(AppError::Unavailable)
    }
}

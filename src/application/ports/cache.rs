// src/application/ports/cache.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use std::time::Duration;

/// Outcome of a key removal. Removing an absent key is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheRemoval {
    Removed,
    AlreadyAbsent,
}

/// Key-value cache. Backend outages surface as
/// `ApplicationError::DependencyUnavailable`.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>>;
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> ApplicationResult<()>;
    async fn remove(&self, key: &str) -> ApplicationResult<CacheRemoval>;
}

// src/application/queries/cached.rs
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};

use crate::application::ports::cache::CacheStore;

/// Cache read that never fails the query. Misses, outages and undecodable
/// entries all fall through to the repository.
pub(super) async fn read<T: DeserializeOwned>(cache: &dyn CacheStore, key: &str) -> Option<T> {
    match cache.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => {
                tracing::debug!(cache_key = key, "cache hit");
                Some(value)
            }
            Err(err) => {
                tracing::warn!(cache_key = key, error = %err, "discarding undecodable cache entry");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(cache_key = key, error = %err, "cache read failed");
            None
        }
    }
}

pub(super) async fn write<T: Serialize>(
    cache: &dyn CacheStore,
    key: &str,
    value: &T,
    ttl: Duration,
) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(cache_key = key, error = %err, "cache entry not serializable");
            return;
        }
    };
    if let Err(err) = cache.set(key, &raw, ttl).await {
        tracing::warn!(cache_key = key, error = %err, "cache write failed");
    }
}

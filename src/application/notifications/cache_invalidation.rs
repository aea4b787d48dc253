// src/application/notifications/cache_invalidation.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::{NotificationHandler, NotificationPublisher};
use crate::application::ports::cache::{CacheRemoval, CacheStore};

/// Cache keys made stale by a mutation, in producer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheInvalidated {
    keys: Vec<String>,
}

impl CacheInvalidated {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl NotificationPublisher<CacheInvalidated> {
    /// Queue `event` for the cache invalidation handler. An event without keys
    /// is dropped here and never reaches the queue.
    pub async fn invalidate(&self, event: CacheInvalidated) {
        if event.is_empty() {
            tracing::trace!("skipping cache invalidation without keys");
            return;
        }
        self.publish(event).await;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFailure {
    pub key: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidationReport {
    pub removed: usize,
    pub already_absent: usize,
    pub failures: Vec<KeyFailure>,
}

impl InvalidationReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Removes every key of a [`CacheInvalidated`] event. Best effort: a failing
/// key is logged and recorded, the remaining keys are still processed.
pub struct CacheInvalidationHandler {
    cache: Arc<dyn CacheStore>,
}

impl CacheInvalidationHandler {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }

    pub async fn invalidate(&self, event: &CacheInvalidated) -> InvalidationReport {
        let mut report = InvalidationReport::default();

        for key in event.keys() {
            match self.cache.remove(key).await {
                Ok(outcome) => {
                    let existed = outcome == CacheRemoval::Removed;
                    if existed {
                        report.removed += 1;
                    } else {
                        report.already_absent += 1;
                    }
                    tracing::info!(cache_key = %key, existed, "removed cache entry");
                }
                Err(err) => {
                    tracing::warn!(cache_key = %key, error = %err, "failed to remove cache entry");
                    report.failures.push(KeyFailure {
                        key: key.clone(),
                        error: err.to_string(),
                    });
                }
            }
        }

        report
    }
}

#[async_trait]
impl NotificationHandler<CacheInvalidated> for CacheInvalidationHandler {
    async fn handle(&self, notification: &CacheInvalidated) {
        let report = self.invalidate(notification).await;
        if !report.is_clean() {
            tracing::warn!(
                failed = report.failures.len(),
                total = notification.keys().len(),
                "cache invalidation finished with failures"
            );
        }
    }
}

// src/application/notifications/mod.rs
pub mod cache_invalidation;
pub mod dispatcher;

pub use cache_invalidation::{
    CacheInvalidated, CacheInvalidationHandler, InvalidationReport, KeyFailure,
};
pub use dispatcher::{NotificationDispatcher, NotificationPublisher, channel};

use async_trait::async_trait;

/// Listener registered with a [`NotificationDispatcher`].
#[async_trait]
pub trait NotificationHandler<N>: Send + Sync
where
    N: Send + Sync,
{
    async fn handle(&self, notification: &N);
}

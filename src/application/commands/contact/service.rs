use std::sync::Arc;

use crate::{
    application::{
        cache_keys,
        notifications::{CacheInvalidated, NotificationPublisher},
        ports::time::Clock,
    },
    domain::contact::ContactMessageRepository,
};

pub struct ContactCommandService {
    pub(super) repo: Arc<dyn ContactMessageRepository>,
    pub(super) clock: Arc<dyn Clock>,
    invalidations: NotificationPublisher<CacheInvalidated>,
}

impl ContactCommandService {
    pub fn new(
        repo: Arc<dyn ContactMessageRepository>,
        clock: Arc<dyn Clock>,
        invalidations: NotificationPublisher<CacheInvalidated>,
    ) -> Self {
        Self {
            repo,
            clock,
            invalidations,
        }
    }

    /// Inbox counters live in the dashboard summary.
    pub(super) async fn refresh_dashboard(&self) {
        self.invalidations
            .invalidate(CacheInvalidated::new([cache_keys::DASHBOARD_SUMMARY]))
            .await;
    }
}

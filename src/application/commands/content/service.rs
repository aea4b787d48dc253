// src/application/commands/content/service.rs
use std::sync::Arc;

use crate::{
    application::{
        cache_keys,
        notifications::{CacheInvalidated, NotificationPublisher},
        ports::time::Clock,
    },
    domain::content::{
        ContentEvent, ContentReadRepository, ContentWriteRepository,
        services::ContentSlugService,
    },
};

pub struct ContentCommandService {
    pub(super) write_repo: Arc<dyn ContentWriteRepository>,
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) slug_service: Arc<ContentSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    invalidations: NotificationPublisher<CacheInvalidated>,
}

impl ContentCommandService {
    pub fn new(
        write_repo: Arc<dyn ContentWriteRepository>,
        read_repo: Arc<dyn ContentReadRepository>,
        slug_service: Arc<ContentSlugService>,
        clock: Arc<dyn Clock>,
        invalidations: NotificationPublisher<CacheInvalidated>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            invalidations,
        }
    }

    pub(super) async fn announce(&self, event: &ContentEvent) {
        tracing::debug!(?event, "content changed");
        self.invalidations
            .invalidate(CacheInvalidated::new(cache_keys::for_content_event(event)))
            .await;
    }
}

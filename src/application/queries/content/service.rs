use std::{sync::Arc, time::Duration};

use crate::{application::ports::cache::CacheStore, domain::content::ContentReadRepository};

pub struct ContentQueryService {
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) cache: Arc<dyn CacheStore>,
    pub(super) cache_ttl: Duration,
}

impl ContentQueryService {
    pub fn new(
        read_repo: Arc<dyn ContentReadRepository>,
        cache: Arc<dyn CacheStore>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            read_repo,
            cache,
            cache_ttl,
        }
    }
}

// src/domain/content/services.rs
use std::sync::Arc;

use crate::application::cancellation::CancellationSignal;
use crate::application::ports::util::SlugGenerator;
use crate::domain::content::repository::ContentReadRepository;
use crate::domain::content::value_objects::{ContentId, ContentKind, ContentSlug};
use crate::domain::errors::{DomainError, DomainResult};

/// Base used when a title sanitizes to nothing.
pub const FALLBACK_SLUG: &str = "item";
pub const DEFAULT_MAX_SLUG_ATTEMPTS: u32 = 1000;

/// Domain service responsible for producing unique slugs for content items.
pub struct ContentSlugService {
    read_repo: Arc<dyn ContentReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    max_attempts: u32,
}

impl ContentSlugService {
    pub fn new(
        read_repo: Arc<dyn ContentReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        max_attempts: u32,
    ) -> Self {
        Self {
            read_repo,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn base_slug(&self, title: &str) -> String {
        let raw = self.generator.generate_slug(title);
        let clean = self.generator.sanitize_slug(&raw);
        if clean.is_empty() {
            FALLBACK_SLUG.to_string()
        } else {
            clean
        }
    }

    /// Probe `base`, `base-2`, `base-3`, ... until a candidate is free for
    /// `kind`. The answer is only as fresh as the last existence check; the
    /// unique index on `(kind, slug)` decides races.
    pub async fn generate_unique_slug(
        &self,
        kind: ContentKind,
        title: &str,
        exclude: Option<ContentId>,
        cancel: &CancellationSignal,
    ) -> DomainResult<ContentSlug> {
        let base = self.base_slug(title);

        for attempt in 0..self.max_attempts {
            if cancel.is_cancelled() {
                return Err(DomainError::Cancelled);
            }

            let candidate = if attempt == 0 {
                base.clone()
            } else {
                format!("{base}-{}", attempt + 1)
            };

            let exists = tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(DomainError::Cancelled),
                result = self.read_repo.slug_exists(kind, &candidate, exclude) => result?,
            };

            if !exists {
                tracing::debug!(%kind, slug = %candidate, attempt, "slug candidate accepted");
                return ContentSlug::new(candidate);
            }
        }

        tracing::warn!(%kind, base = %base, attempts = self.max_attempts, "slug candidates exhausted");
        Err(DomainError::SlugExhausted {
            base,
            attempts: self.max_attempts,
        })
    }
}

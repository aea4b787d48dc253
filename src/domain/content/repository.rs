// src/domain/content/repository.rs
use crate::domain::content::entity::{ContentFilter, ContentItem, ContentUpdate, NewContentItem};
use crate::domain::content::value_objects::{ContentId, ContentKind, ContentSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ContentWriteRepository: Send + Sync {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem>;
    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem>;
    async fn delete(&self, id: ContentId) -> DomainResult<()>;
}

#[async_trait]
pub trait ContentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>>;
    async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &ContentSlug,
    ) -> DomainResult<Option<ContentItem>>;

    /// Whether `slug` is taken by another item of the same kind. `exclude`
    /// skips the item being renamed.
    async fn slug_exists(
        &self,
        kind: ContentKind,
        slug: &str,
        exclude: Option<ContentId>,
    ) -> DomainResult<bool>;

    async fn count(&self, filter: &ContentFilter) -> DomainResult<u64>;
    async fn list_page(
        &self,
        filter: &ContentFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<ContentItem>>;
}

// src/domain/contact/repository.rs
use crate::domain::contact::entity::{ContactMessage, NewContactMessage};
use crate::domain::contact::value_objects::ContactMessageId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage>;
    async fn find_by_id(&self, id: ContactMessageId) -> DomainResult<Option<ContactMessage>>;
    async fn set_read(&self, id: ContactMessageId, read: bool) -> DomainResult<ContactMessage>;
    async fn delete(&self, id: ContactMessageId) -> DomainResult<()>;
    async fn count(&self, unread_only: bool) -> DomainResult<u64>;
    /// Newest first.
    async fn list_page(
        &self,
        unread_only: bool,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<ContactMessage>>;
}

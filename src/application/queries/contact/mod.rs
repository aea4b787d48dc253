use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    application::{
        authorization::{Principal, ensure_permission},
        dto::ContactMessageDto,
        error::{ApplicationError, ApplicationResult},
        pagination::{PageRequest, PagedSource, PaginatedList, paginate},
    },
    domain::{
        contact::{ContactMessage, ContactMessageId, ContactMessageRepository},
        user::permissions,
    },
};

pub struct ListContactMessagesQuery {
    pub unread_only: bool,
    pub page: PageRequest,
}

struct InboxSource<'a> {
    repo: &'a dyn ContactMessageRepository,
    unread_only: bool,
}

#[async_trait]
impl PagedSource for InboxSource<'_> {
    type Item = ContactMessage;

    async fn count(&self) -> ApplicationResult<u64> {
        Ok(self.repo.count(self.unread_only).await?)
    }

    async fn fetch(&self, offset: u64, limit: u64) -> ApplicationResult<Vec<ContactMessage>> {
        Ok(self.repo.list_page(self.unread_only, offset, limit).await?)
    }
}

pub struct ContactQueryService {
    repo: Arc<dyn ContactMessageRepository>,
}

impl ContactQueryService {
    pub fn new(repo: Arc<dyn ContactMessageRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_contact_messages(
        &self,
        actor: &Principal,
        query: ListContactMessagesQuery,
    ) -> ApplicationResult<PaginatedList<ContactMessageDto>> {
        ensure_permission(actor, permissions::CONTACTS_VIEW)?;

        let source = InboxSource {
            repo: self.repo.as_ref(),
            unread_only: query.unread_only,
        };
        paginate(&source, query.page, ContactMessageDto::from).await
    }

    pub async fn get_contact_message(
        &self,
        actor: &Principal,
        id: i64,
    ) -> ApplicationResult<ContactMessageDto> {
        ensure_permission(actor, permissions::CONTACTS_VIEW)?;

        let id = ContactMessageId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("contact message not found"))
    }
}

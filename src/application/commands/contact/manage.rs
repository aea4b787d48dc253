use super::ContactCommandService;
use crate::{
    application::{
        authorization::{Principal, ensure_permission},
        dto::ContactMessageDto,
        error::ApplicationResult,
    },
    domain::{contact::ContactMessageId, user::permissions},
};

pub struct MarkContactMessageReadCommand {
    pub id: i64,
    pub read: bool,
}

impl ContactCommandService {
    pub async fn mark_contact_message_read(
        &self,
        actor: &Principal,
        command: MarkContactMessageReadCommand,
    ) -> ApplicationResult<ContactMessageDto> {
        ensure_permission(actor, permissions::CONTACTS_MANAGE)?;

        let id = ContactMessageId::new(command.id)?;
        let message = self.repo.set_read(id, command.read).await?;
        self.refresh_dashboard().await;

        Ok(message.into())
    }

    pub async fn delete_contact_message(&self, actor: &Principal, id: i64) -> ApplicationResult<()> {
        ensure_permission(actor, permissions::CONTACTS_MANAGE)?;

        let id = ContactMessageId::new(id)?;
        self.repo.delete(id).await?;
        tracing::info!(id = i64::from(id), "contact message deleted");
        self.refresh_dashboard().await;

        Ok(())
    }
}

use super::ContactCommandService;
use crate::{
    application::{dto::ContactReceiptDto, error::ApplicationResult},
    domain::contact::{ContactEmail, MessageBody, MessageSubject, NewContactMessage, SenderName},
};
use uuid::Uuid;

pub struct SubmitContactMessageCommand {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub body: String,
}

impl ContactCommandService {
    pub async fn submit_contact_message(
        &self,
        command: SubmitContactMessageCommand,
    ) -> ApplicationResult<ContactReceiptDto> {
        let message = NewContactMessage {
            reference: Uuid::new_v4().to_string(),
            name: SenderName::new(command.name)?,
            email: ContactEmail::new(command.email)?,
            subject: MessageSubject::new(command.subject)?,
            body: MessageBody::new(command.body)?,
            created_at: self.clock.now(),
        };

        let stored = self.repo.insert(message).await?;
        tracing::info!(reference = %stored.reference, "contact message received");
        self.refresh_dashboard().await;

        Ok(ContactReceiptDto {
            reference: stored.reference,
            received_at: stored.created_at,
        })
    }
}

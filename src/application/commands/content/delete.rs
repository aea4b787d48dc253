use super::ContentCommandService;
use crate::{
    application::{
        authorization::{Principal, ensure_permission},
        error::ApplicationResult,
    },
    domain::{
        content::{ContentEvent, ContentId},
        user::permissions,
    },
};

pub struct DeleteContentCommand {
    pub id: i64,
}

impl ContentCommandService {
    pub async fn delete_content(
        &self,
        actor: &Principal,
        command: DeleteContentCommand,
    ) -> ApplicationResult<()> {
        ensure_permission(actor, permissions::CONTENT_DELETE)?;

        let id = ContentId::new(command.id)?;
        let existing = self.load_existing(id).await?;
        self.write_repo.delete(id).await?;

        tracing::info!(%id, slug = %existing.slug, "content deleted");
        self.announce(&ContentEvent::Deleted {
            id,
            kind: existing.kind,
            slug: existing.slug,
        })
        .await;

        Ok(())
    }
}

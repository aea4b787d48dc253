use super::ContentCommandService;
use crate::{
    application::{
        authorization::{Principal, ensure_permission},
        dto::ContentDto,
        error::ApplicationResult,
    },
    domain::{
        content::{ContentEvent, ContentId, ContentUpdate},
        user::permissions,
    },
};

pub struct SetPublishStateCommand {
    pub id: i64,
    pub publish: bool,
}

impl ContentCommandService {
    pub async fn set_publish_state(
        &self,
        actor: &Principal,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<ContentDto> {
        ensure_permission(actor, permissions::CONTENT_PUBLISH)?;

        let id = ContentId::new(command.id)?;
        let existing = self.load_existing(id).await?;
        if existing.published == command.publish {
            return Ok(existing.into());
        }

        let now = self.clock.now();
        let update = ContentUpdate::new(id, existing.updated_at)
            .with_publish_state(command.publish, command.publish.then_some(now))
            .touched_at(now);
        let updated = self.write_repo.update(update).await?;

        tracing::info!(%id, published = updated.published, "publish state changed");
        self.announce(&ContentEvent::Updated {
            id,
            kind: updated.kind,
            previous_slug: existing.slug,
            slug: updated.slug.clone(),
        })
        .await;

        Ok(updated.into())
    }
}

// src/application/commands/content/update.rs
use super::ContentCommandService;
use crate::{
    application::{
        authorization::{Principal, ensure_permission},
        cancellation::CancellationSignal,
        dto::ContentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{ContentEvent, ContentId, ContentItem, ContentSummary, ContentTitle, ContentUpdate},
        user::permissions,
    },
};

pub struct UpdateContentCommand {
    pub id: i64,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub sort_order: Option<i32>,
}

impl ContentCommandService {
    pub async fn update_content(
        &self,
        actor: &Principal,
        command: UpdateContentCommand,
        cancel: &CancellationSignal,
    ) -> ApplicationResult<ContentDto> {
        ensure_permission(actor, permissions::CONTENT_EDIT)?;

        let id = ContentId::new(command.id)?;
        let existing = self.load_existing(id).await?;
        let mut update = ContentUpdate::new(id, existing.updated_at);

        if let Some(title) = command.title {
            let title = ContentTitle::new(title)?;
            if title != existing.title {
                // Exclude our own id so an unchanged slug does not collide with itself.
                let slug = self
                    .slug_service
                    .generate_unique_slug(existing.kind, title.as_str(), Some(id), cancel)
                    .await?;
                update = update.with_title(title, slug);
            }
        }
        if let Some(summary) = command.summary {
            update = update.with_summary(ContentSummary::new(summary)?);
        }
        if let Some(body) = command.body {
            update = update.with_body(body);
        }
        if let Some(sort_order) = command.sort_order {
            update = update.with_sort_order(sort_order);
        }

        if update.is_empty() {
            return Ok(existing.into());
        }

        let updated = self
            .write_repo
            .update(update.touched_at(self.clock.now()))
            .await?;

        self.announce(&ContentEvent::Updated {
            id: updated.id,
            kind: updated.kind,
            previous_slug: existing.slug,
            slug: updated.slug.clone(),
        })
        .await;

        Ok(updated.into())
    }

    pub(super) async fn load_existing(&self, id: ContentId) -> ApplicationResult<ContentItem> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("content {id} not found")))
    }
}

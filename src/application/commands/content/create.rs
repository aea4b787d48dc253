// src/application/commands/content/create.rs
use super::ContentCommandService;
use crate::{
    application::{
        authorization::{Principal, ensure_permission},
        cancellation::CancellationSignal,
        dto::ContentDto,
        error::ApplicationResult,
    },
    domain::{
        content::{ContentEvent, ContentKind, ContentSummary, ContentTitle, NewContentItem},
        errors::DomainError,
        user::permissions,
    },
};

/// A concurrent writer can claim the probed slug before our insert lands.
const MAX_INSERT_ATTEMPTS: u32 = 3;

pub struct CreateContentCommand {
    pub kind: ContentKind,
    pub title: String,
    pub summary: Option<String>,
    pub body: String,
    pub publish: bool,
    pub sort_order: Option<i32>,
}

impl CreateContentCommand {
    pub fn builder(kind: ContentKind) -> CreateContentCommandBuilder {
        CreateContentCommandBuilder {
            kind,
            title: None,
            summary: None,
            body: String::new(),
            publish: false,
            sort_order: None,
        }
    }
}

pub struct CreateContentCommandBuilder {
    kind: ContentKind,
    title: Option<String>,
    summary: Option<String>,
    body: String,
    publish: bool,
    sort_order: Option<i32>,
}

impl CreateContentCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub const fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub const fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    pub fn build(self) -> Result<CreateContentCommand, &'static str> {
        Ok(CreateContentCommand {
            kind: self.kind,
            title: self.title.ok_or("title is required")?,
            summary: self.summary,
            body: self.body,
            publish: self.publish,
            sort_order: self.sort_order,
        })
    }
}

impl ContentCommandService {
    pub async fn create_content(
        &self,
        actor: &Principal,
        command: CreateContentCommand,
        cancel: &CancellationSignal,
    ) -> ApplicationResult<ContentDto> {
        ensure_permission(actor, permissions::CONTENT_CREATE)?;
        if command.publish {
            ensure_permission(actor, permissions::CONTENT_PUBLISH)?;
        }

        let title = ContentTitle::new(command.title)?;
        let summary = ContentSummary::new(command.summary.unwrap_or_default())?;
        let now = self.clock.now();

        let mut attempt = 0;
        let created = loop {
            attempt += 1;
            let slug = self
                .slug_service
                .generate_unique_slug(command.kind, title.as_str(), None, cancel)
                .await?;

            let new_item = NewContentItem {
                kind: command.kind,
                title: title.clone(),
                slug,
                summary: summary.clone(),
                body: command.body.clone(),
                published: command.publish,
                published_at: command.publish.then_some(now),
                sort_order: command.sort_order.unwrap_or(0),
                created_at: now,
            };

            match self.write_repo.insert(new_item).await {
                Ok(item) => break item,
                Err(DomainError::Conflict(reason)) if attempt < MAX_INSERT_ATTEMPTS => {
                    tracing::debug!(attempt, %reason, "slug claimed concurrently, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        };

        tracing::info!(id = %created.id, kind = %created.kind, slug = %created.slug, "content created");
        self.announce(&ContentEvent::Created {
            id: created.id,
            kind: created.kind,
            slug: created.slug.clone(),
        })
        .await;

        Ok(created.into())
    }
}

use super::ContentQueryService;
use crate::{
    application::{
        authorization::{Principal, ensure_permission},
        cache_keys,
        dto::ContentDto,
        error::{ApplicationError, ApplicationResult},
        queries::cached,
    },
    domain::{
        content::{ContentId, ContentKind, ContentSlug},
        user::permissions,
    },
};

pub struct GetContentBySlugQuery {
    pub kind: ContentKind,
    pub slug: String,
}

impl ContentQueryService {
    /// Read-through lookup. Only published items are cached, drafts are
    /// visible to `Content.View` holders and reported missing to everyone else.
    pub async fn get_content_by_slug(
        &self,
        actor: Option<&Principal>,
        query: GetContentBySlugQuery,
    ) -> ApplicationResult<ContentDto> {
        let slug = ContentSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("content not found"))?;
        let key = cache_keys::content_by_slug(query.kind, slug.as_str());

        if let Some(hit) = cached::read::<ContentDto>(self.cache.as_ref(), &key).await {
            return Ok(hit);
        }

        let item = self
            .read_repo
            .find_by_slug(query.kind, &slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        if !item.published {
            let can_view_drafts =
                actor.is_some_and(|actor| actor.has_permission(permissions::CONTENT_VIEW));
            if !can_view_drafts {
                return Err(ApplicationError::not_found("content not found"));
            }
            return Ok(item.into());
        }

        let dto = ContentDto::from(item);
        cached::write(self.cache.as_ref(), &key, &dto, self.cache_ttl).await;
        Ok(dto)
    }

    pub async fn get_content_by_id(&self, actor: &Principal, id: i64) -> ApplicationResult<ContentDto> {
        ensure_permission(actor, permissions::CONTENT_VIEW)?;

        let id = ContentId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("content {id} not found")))
    }
}
